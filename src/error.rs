use thiserror::Error;

/// Error types for tag production
#[derive(Debug, Error)]
pub enum TagError {
    #[error("Unsupported chain id {chain_id}: supported chains are {supported}")] UnsupportedChain {
        chain_id: String,
        supported: String,
    },

    #[error("Subgraph request failed with status {status}: {body}")] Transport {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Subgraph reported {} query error(s): {}", .messages.len(), .messages.join("; "))] UpstreamQuery {
        messages: Vec<String>,
    },

    #[error("Subgraph response is missing the pools payload")] MalformedResponse,

    #[error("HTTP error: {0}")] Http(#[from] reqwest::Error),

    #[error("Pool fetch failed: {source}")] FetchFailed {
        #[source]
        source: Box<TagError>,
    },
}

pub type TagResult<T> = Result<T, TagError>;
