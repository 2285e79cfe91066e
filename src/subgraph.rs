//! GraphQL client for the Uniswap v4 subgraphs on The Graph gateway.
//!
//! Fetches pool records for a chain and turns their hook addresses into
//! labeled contract tags. One client instance holds one resolved endpoint
//! and a shared HTTP client; nothing is cached across calls.

use std::time::Duration;

use log::{debug, error, info, warn};
use serde::Deserialize;
use serde_json::json;

use crate::chains::resolve_endpoint;
use crate::error::{TagError, TagResult};
use crate::tags::{hook_tags, ContractTag};

/// Page-size ceiling of the pools query. A page of exactly this many
/// records means more pools exist upstream.
const PAGE_SIZE: usize = 1000;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = "v4-hook-tags/0.1";

/// Pools created after `$lastTimestamp`, oldest first, hookless pools
/// (zero-address hook) filtered out upstream. Only the hook address is
/// selected; in particular `createdAtTimestamp` is not returned, which is
/// what keeps pagination disabled in [`SubgraphClient::accumulate_pools`].
const POOLS_QUERY: &str = r#"
query Pools($lastTimestamp: Int) {
  pools(
    first: 1000
    orderBy: createdAtTimestamp
    orderDirection: asc
    where: {
      createdAtTimestamp_gt: $lastTimestamp
      hooks_not: "0x0000000000000000000000000000000000000000"
    }
  ) {
    hooks
  }
}
"#;

/// One pool record as returned by the subgraph. Only the hook contract
/// address is fetched; the zero address never appears because the query
/// filters it out upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct Pool {
    pub hooks: String,
}

#[derive(Debug, Deserialize)]
struct PoolsData {
    #[serde(default)]
    pools: Option<Vec<Pool>>,
}

#[derive(Debug, Deserialize)]
struct QueryError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct PoolsResponse {
    #[serde(default)]
    data: Option<PoolsData>,
    #[serde(default)]
    errors: Option<Vec<QueryError>>,
}

/// Client for one chain's Uniswap v4 subgraph.
pub struct SubgraphClient {
    client: reqwest::Client,
    endpoint: String,
    chain_id: String,
}

impl SubgraphClient {
    /// Create a client for a supported chain, resolving the gateway
    /// endpoint from the chain id and API key.
    pub fn new(chain_id: &str, api_key: &str) -> TagResult<Self> {
        let endpoint = resolve_endpoint(chain_id, api_key)?;
        Self::with_endpoint(chain_id, endpoint)
    }

    /// Create a client pointed at an explicit endpoint, bypassing chain
    /// resolution. Useful for testing against a local server.
    pub fn with_endpoint(chain_id: &str, endpoint: String) -> TagResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            chain_id: chain_id.to_string(),
        })
    }

    /// Fetch one page of pools created strictly after `last_timestamp`.
    pub async fn fetch_pools(&self, last_timestamp: u64) -> TagResult<Vec<Pool>> {
        let body = json!({
            "query": POOLS_QUERY,
            "variables": { "lastTimestamp": last_timestamp },
        });

        debug!(
            "Fetching pools for chain {} (lastTimestamp={})",
            self.chain_id, last_timestamp
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TagError::Transport { status, body });
        }

        let parsed: PoolsResponse = response.json().await?;

        if let Some(errors) = parsed.errors {
            if !errors.is_empty() {
                for err in &errors {
                    error!("Subgraph query error: {}", err.message);
                }
                return Err(TagError::UpstreamQuery {
                    messages: errors.into_iter().map(|e| e.message).collect(),
                });
            }
        }

        let pools = parsed
            .data
            .and_then(|data| data.pools)
            .ok_or(TagError::MalformedResponse)?;

        info!(
            "Fetched {} pools for chain {}",
            pools.len(),
            self.chain_id
        );
        Ok(pools)
    }

    /// Fetch all reachable pools for the chain, starting from timestamp 0.
    ///
    /// A full page (exactly 1000 records, the page-size ceiling) signals
    /// that more pools exist, but the query does not select `createdAtTimestamp`, so
    /// there is no value to seed the next page's `lastTimestamp` with.
    /// Until the upstream schema exposes a cursor field this deliberately
    /// stops after the first page instead of refetching the same page.
    /// Any fetch error aborts immediately and is wrapped so the caller
    /// always sees a typed failure.
    pub async fn accumulate_pools(&self) -> TagResult<Vec<Pool>> {
        let mut all_pools: Vec<Pool> = Vec::new();

        let page = match self.fetch_pools(0).await {
            Ok(page) => page,
            Err(err) => {
                error!("Aborting pool fetch for chain {}: {}", self.chain_id, err);
                return Err(TagError::FetchFailed {
                    source: Box::new(err),
                });
            }
        };

        if page.len() == PAGE_SIZE {
            warn!(
                "Subgraph returned a full page of {} pools for chain {}; more may exist but the query exposes no cursor to continue from",
                PAGE_SIZE, self.chain_id
            );
        }
        all_pools.extend(page);

        Ok(all_pools)
    }

    /// Fetch pools and produce one tag per unique hook contract, in
    /// first-seen order.
    pub async fn fetch_hook_tags(&self) -> TagResult<Vec<ContractTag>> {
        let pools = self.accumulate_pools().await?;
        Ok(hook_tags(&self.chain_id, &pools))
    }
}
