//! Search index collaborators: the hosted Azure AI Search index and an
//! in-process [`LocalIndex`] used for offline runs.

pub mod client;
pub mod local;
pub mod schema;
pub mod search;
pub mod writer;

pub use client::AzureSearchIndex;
pub use local::LocalIndex;
pub use schema::{index_definition, IndexDefinition};
