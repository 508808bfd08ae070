//! Core building blocks for the document RAG pipeline.
//!
//! Pure logic lives here: chunking, identifier derivation, batch partitioning
//! and context assembly, plus the collaborator traits that the embedding,
//! search and chat crates implement.

#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod batch;
pub mod chunking;
pub mod config;
pub mod context;
pub mod data_processor;
pub mod error;
pub mod ids;
pub mod traits;
pub mod types;

pub use chunking::{chunk_text, Chunker, ChunkingConfig};
pub use error::{Error, Result};
pub use ids::derive_id;
