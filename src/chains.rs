//! Chain Support and Endpoint Resolution
//!
//! This module defines the supported blockchain networks and maps each one
//! to its Uniswap v4 subgraph deployment on The Graph gateway. The key set
//! of the table is the single source of truth for which chains are
//! supported; adding a chain means adding one entry here.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{TagError, TagResult};

/// Literal placeholder in the gateway URL templates that gets replaced by
/// the caller's API key.
const API_KEY_PLACEHOLDER: &str = "[api-key]";

/// Static mapping from decimal chain id to the gateway URL template for
/// that chain's Uniswap v4 subgraph.
///
/// The deployment ids differ per chain because each network is indexed by
/// its own subgraph deployment.
static CHAIN_ENDPOINTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // Ethereum mainnet
    m.insert(
        "1",
        "https://gateway.thegraph.com/api/[api-key]/subgraphs/id/DiYPVdygkfjDWhbxGSqAQxwBKmfKnkWQojqeM2rkLb3G",
    );
    // Optimism
    m.insert(
        "10",
        "https://gateway.thegraph.com/api/[api-key]/subgraphs/id/6RBtsmGUYfeLeZsYyxyKSUiaA6WpuC69shMEQ1Cfuj9u",
    );
    // BNB Smart Chain
    m.insert(
        "56",
        "https://gateway.thegraph.com/api/[api-key]/subgraphs/id/2qQpC8inZPZL4tYfRQPFGZhsE8mYzE67n5z3Yf5uuKMu",
    );
    // Polygon
    m.insert(
        "137",
        "https://gateway.thegraph.com/api/[api-key]/subgraphs/id/CwpebM66AH5uqS5sLSoFkMf8cFnGSBFjzGtabn1kmQJc",
    );
    // Base
    m.insert(
        "8453",
        "https://gateway.thegraph.com/api/[api-key]/subgraphs/id/HNCFA9TyBqpo5qpe6QreQABAA1kV8g46mhkCcicu6v2R",
    );
    // Arbitrum One
    m.insert(
        "42161",
        "https://gateway.thegraph.com/api/[api-key]/subgraphs/id/G5TsTKNi8yhPSV7kycaE23oWbqv9zzNqR49FoEQjzq1r",
    );
    // Avalanche
    m.insert(
        "43114",
        "https://gateway.thegraph.com/api/[api-key]/subgraphs/id/49JxRo9FGxWpSf5Y5GKQPj5NUpX2HhpoZHpGzNEWQZjq",
    );
    // Blast
    m.insert(
        "81457",
        "https://gateway.thegraph.com/api/[api-key]/subgraphs/id/HT5vW9TbJgZ69HTZyYLcfM1qxy1bTZX9cSqnWzKafGdn",
    );

    m
});

/// Supported chain ids in ascending numeric order, for stable error
/// messages and iteration.
pub fn supported_chains() -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = CHAIN_ENDPOINTS.keys().copied().collect();
    ids.sort_by_key(|id| id.parse::<u64>().unwrap_or(u64::MAX));
    ids
}

/// Resolve the subgraph endpoint for a chain, substituting the caller's
/// API key into the gateway URL template.
///
/// The key is percent-encoded before substitution so reserved characters
/// in the credential cannot break the URL. Fails when the chain id is not
/// a valid decimal number or is not in the endpoint table; the error
/// message lists every supported id so callers can self-correct.
pub fn resolve_endpoint(chain_id: &str, api_key: &str) -> TagResult<String> {
    let template = chain_id
        .parse::<u64>()
        .ok()
        .and_then(|_| CHAIN_ENDPOINTS.get(chain_id))
        .ok_or_else(|| TagError::UnsupportedChain {
            chain_id: chain_id.to_string(),
            supported: supported_chains().join(", "),
        })?;

    Ok(template.replace(API_KEY_PLACEHOLDER, &urlencoding::encode(api_key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_supported_chain() {
        for chain_id in supported_chains() {
            let url = resolve_endpoint(chain_id, "key with/reserved:chars").unwrap();
            assert!(
                !url.contains(API_KEY_PLACEHOLDER),
                "placeholder left in endpoint for chain {}",
                chain_id
            );
            assert!(url.contains("key%20with%2Freserved%3Achars"));
        }
    }

    #[test]
    fn rejects_unknown_chain() {
        let err = resolve_endpoint("999", "key").unwrap_err();
        match err {
            TagError::UnsupportedChain { chain_id, supported } => {
                assert_eq!(chain_id, "999");
                for id in ["1", "10", "56", "137", "8453", "42161", "43114", "81457"] {
                    assert!(supported.contains(id), "missing {} in: {}", id, supported);
                }
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn rejects_non_numeric_chain() {
        let result = resolve_endpoint("mainnet", "key");
        assert!(matches!(result, Err(TagError::UnsupportedChain { .. })));
    }

    #[test]
    fn supported_chains_are_numerically_sorted() {
        assert_eq!(
            supported_chains(),
            vec!["1", "10", "56", "137", "8453", "42161", "43114", "81457"]
        );
    }
}
