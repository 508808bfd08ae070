//! Seams to the external services. Implementations live in the
//! `docrag-embed`, `docrag-search` and `docrag-chat` crates; failures are
//! returned as-is, without retries.

use crate::types::{ChatRequest, HybridQuery, IndexedDocument, RetrievedResult, UploadStatus};

pub trait Embedder: Send + Sync {
    fn dim(&self) -> usize;
    fn embed_text(&self, text: &str) -> anyhow::Result<Vec<f32>>;
}

pub trait SearchIndex: Send + Sync {
    /// Create the index, or update its schema if it already exists.
    fn ensure_index(&self) -> anyhow::Result<()>;
    /// Upsert one batch keyed by document id, reporting each item.
    fn upload(&self, docs: &[IndexedDocument]) -> anyhow::Result<Vec<UploadStatus>>;
    /// Results ordered by descending relevance.
    fn hybrid_search(&self, query: &HybridQuery) -> anyhow::Result<Vec<RetrievedResult>>;
}

pub trait ChatModel: Send + Sync {
    fn complete(&self, request: &ChatRequest) -> anyhow::Result<String>;
}

impl<T: Embedder + ?Sized> Embedder for Box<T> {
    fn dim(&self) -> usize { (**self).dim() }
    fn embed_text(&self, text: &str) -> anyhow::Result<Vec<f32>> { (**self).embed_text(text) }
}

impl<T: Embedder + ?Sized> Embedder for &T {
    fn dim(&self) -> usize { (**self).dim() }
    fn embed_text(&self, text: &str) -> anyhow::Result<Vec<f32>> { (**self).embed_text(text) }
}

impl<T: SearchIndex + ?Sized> SearchIndex for Box<T> {
    fn ensure_index(&self) -> anyhow::Result<()> { (**self).ensure_index() }
    fn upload(&self, docs: &[IndexedDocument]) -> anyhow::Result<Vec<UploadStatus>> { (**self).upload(docs) }
    fn hybrid_search(&self, query: &HybridQuery) -> anyhow::Result<Vec<RetrievedResult>> { (**self).hybrid_search(query) }
}

impl<T: SearchIndex + ?Sized> SearchIndex for &T {
    fn ensure_index(&self) -> anyhow::Result<()> { (**self).ensure_index() }
    fn upload(&self, docs: &[IndexedDocument]) -> anyhow::Result<Vec<UploadStatus>> { (**self).upload(docs) }
    fn hybrid_search(&self, query: &HybridQuery) -> anyhow::Result<Vec<RetrievedResult>> { (**self).hybrid_search(query) }
}

impl<T: ChatModel + ?Sized> ChatModel for Box<T> {
    fn complete(&self, request: &ChatRequest) -> anyhow::Result<String> { (**self).complete(request) }
}

impl<T: ChatModel + ?Sized> ChatModel for &T {
    fn complete(&self, request: &ChatRequest) -> anyhow::Result<String> { (**self).complete(request) }
}
