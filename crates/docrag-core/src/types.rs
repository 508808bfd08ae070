//! Domain types shared by the indexer, the search collaborators and the assistant.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::ids::derive_id;

pub type ChunkId = String;

/// A trimmed window of a source document.
///
/// - `source`: name of the originating document (its file name)
/// - `index`: 0-based ordinal among the retained chunks of that source
/// - `content`: the window text with surrounding whitespace removed
/// - `span`: character offsets `[start, end)` of the untrimmed window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub source: String,
    pub index: usize,
    pub content: String,
    pub span: Range<usize>,
}

impl Chunk {
    /// Identifier this chunk is stored under in the search index.
    pub fn id(&self) -> ChunkId {
        derive_id(&self.source, self.index)
    }
}

/// The unit persisted in the search index, one per retained chunk.
///
/// Field names match the index schema, so the struct serializes directly
/// into an upload payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedDocument {
    pub id: ChunkId,
    pub content: String,
    pub source_file: String,
    pub chunk_index: usize,
    pub content_vector: Vec<f32>,
}

impl IndexedDocument {
    pub fn from_chunk(chunk: &Chunk, content_vector: Vec<f32>) -> Self {
        Self {
            id: chunk.id(),
            content: chunk.content.clone(),
            source_file: chunk.source.clone(),
            chunk_index: chunk.index,
            content_vector,
        }
    }
}

/// Outcome of uploading a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadStatus {
    pub key: ChunkId,
    pub succeeded: bool,
    pub status_code: u16,
    pub error_message: Option<String>,
}

/// A scored chunk returned by a hybrid query.
///
/// `score` is whatever the ranking service reports; it only orders results
/// and is not normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedResult {
    pub content: String,
    pub source: String,
    pub score: f64,
    pub chunk_index: Option<usize>,
}

/// Lexical text plus query vector, answered with at most `top_k` results.
#[derive(Debug, Clone, PartialEq)]
pub struct HybridQuery {
    pub text: String,
    pub vector: Vec<f32>,
    pub top_k: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}
