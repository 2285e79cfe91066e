pub mod chains;
pub mod error;
pub mod subgraph;
pub mod tags;

pub use chains::{resolve_endpoint, supported_chains};
pub use error::{TagError, TagResult};
pub use subgraph::{Pool, SubgraphClient};
pub use tags::{hook_tags, truncate_id, ContractTag};
