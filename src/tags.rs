//! Contract tag production for Uniswap v4 hook contracts.

use std::collections::HashSet;

use serde::Serialize;

use crate::subgraph::Pool;

const PROJECT_NAME: &str = "Uniswap v4";
const WEBSITE_LINK: &str = "https://uniswap.org";

/// One labeled tag record describing a hook contract.
///
/// The fields serialize to the exact submission labels expected by the
/// tag consumers ("Contract Address", "Public Name Tag", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractTag {
    #[serde(rename = "Contract Address")]
    pub contract_address: String,
    #[serde(rename = "Public Name Tag")]
    pub public_name_tag: String,
    #[serde(rename = "Project Name")]
    pub project_name: String,
    #[serde(rename = "UI/Website Link")]
    pub website_link: String,
    #[serde(rename = "Public Note")]
    pub public_note: String,
}

/// Produce one tag per unique hook address found in `pools`.
///
/// Hooks are deduplicated in first-seen order and numbered from zero, so
/// the indices are fresh on every call; nothing persists across calls.
/// Pure and infallible: an empty pool list produces an empty tag list.
pub fn hook_tags(chain_id: &str, pools: &[Pool]) -> Vec<ContractTag> {
    let mut seen = HashSet::new();
    let mut unique_hooks = Vec::new();
    for pool in pools {
        if seen.insert(pool.hooks.as_str()) {
            unique_hooks.push(pool.hooks.as_str());
        }
    }

    unique_hooks
        .iter()
        .enumerate()
        .map(|(i, hook)| ContractTag {
            contract_address: format!("eip155:{}:{}", chain_id, hook),
            public_name_tag: format!("Hook #{}", i),
            project_name: PROJECT_NAME.to_string(),
            website_link: WEBSITE_LINK.to_string(),
            public_note: format!("Uniswap V4's Hook #{} contract", i),
        })
        .collect()
}

/// Shorten a long identifier for display: first 5 and last 5 characters
/// around an ellipsis. Identifiers of 10 characters or fewer pass through
/// unchanged. Not applied to the emitted contract address field.
pub fn truncate_id(id: &str) -> String {
    if id.len() <= 10 {
        return id.to_string();
    }
    format!("{}...{}", &id[..5], &id[id.len() - 5..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(hooks: &str) -> Pool {
        Pool {
            hooks: hooks.to_string(),
        }
    }

    #[test]
    fn dedupes_hooks_in_first_seen_order() {
        let pools = vec![pool("0xA"), pool("0xB"), pool("0xA")];
        let tags = hook_tags("1", &pools);

        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].contract_address, "eip155:1:0xA");
        assert_eq!(tags[0].public_name_tag, "Hook #0");
        assert_eq!(tags[0].project_name, "Uniswap v4");
        assert_eq!(tags[0].website_link, "https://uniswap.org");
        assert_eq!(tags[0].public_note, "Uniswap V4's Hook #0 contract");
        assert_eq!(tags[1].contract_address, "eip155:1:0xB");
        assert_eq!(tags[1].public_name_tag, "Hook #1");
        assert_eq!(tags[1].public_note, "Uniswap V4's Hook #1 contract");
    }

    #[test]
    fn empty_pools_produce_no_tags() {
        let tags = hook_tags("1", &[]);
        assert!(tags.is_empty());
    }

    #[test]
    fn serializes_with_exact_labels() {
        let tags = hook_tags("8453", &[pool("0xabc")]);
        let value = serde_json::to_value(&tags[0]).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();

        assert_eq!(value["Contract Address"], "eip155:8453:0xabc");
        for label in [
            "Contract Address",
            "Public Name Tag",
            "Project Name",
            "UI/Website Link",
            "Public Note",
        ] {
            assert!(keys.contains(&label), "missing label {}", label);
        }
        assert_eq!(keys.len(), 5);
    }

    #[test]
    fn truncates_long_ids_only() {
        assert_eq!(truncate_id("0x1234567890"), "0x123...67890");
        assert_eq!(truncate_id("0xabc"), "0xabc");
        assert_eq!(truncate_id("0123456789"), "0123456789");
        assert_eq!(truncate_id("0123456789a"), "01234...6789a");
    }
}
