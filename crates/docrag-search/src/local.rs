//! In-process stand-in for the hosted index. Documents are kept by id, so
//! re-uploading a chunk replaces it, and the whole index can be persisted as
//! one JSON file between runs.

use anyhow::Result;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::RwLock;
use tracing::{debug, info};

use docrag_core::traits::SearchIndex;
use docrag_core::types::{HybridQuery, IndexedDocument, RetrievedResult, UploadStatus};
use docrag_core::Error;

const VECTOR_WEIGHT: f64 = 0.7;
const TEXT_WEIGHT: f64 = 0.3;

#[derive(Debug, Default)]
pub struct LocalIndex {
    docs: RwLock<HashMap<String, IndexedDocument>>,
}

impl LocalIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a previously saved index.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(format!("local index {}", path.display())).into());
        }
        let docs: Vec<IndexedDocument> = serde_json::from_str(&fs::read_to_string(path)?)?;
        info!(path = %path.display(), docs = docs.len(), "loaded local index");
        Ok(Self { docs: RwLock::new(docs.into_iter().map(|d| (d.id.clone(), d)).collect()) })
    }

    /// Load `path` if it exists, otherwise start empty.
    pub fn open(path: &Path) -> Result<Self> {
        if path.exists() { Self::load(path) } else { Ok(Self::new()) }
    }

    /// Write every document, ordered by id, as a JSON array.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut docs: Vec<IndexedDocument> = self.read().values().cloned().collect();
        docs.sort_by(|a, b| a.id.cmp(&b.id));
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string(&docs)?)?;
        info!(path = %path.display(), docs = docs.len(), "saved local index");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn get(&self, id: &str) -> Option<IndexedDocument> {
        self.read().get(id).cloned()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, IndexedDocument>> {
        self.docs.read().unwrap_or_else(|e| e.into_inner())
    }

    fn vector_width(&self) -> Option<usize> {
        self.read().values().next().map(|d| d.content_vector.len())
    }
}

impl SearchIndex for LocalIndex {
    fn ensure_index(&self) -> Result<()> {
        debug!("local index needs no schema");
        Ok(())
    }

    /// Documents whose vector is empty or disagrees with the width already
    /// stored are rejected individually; the rest are upserted.
    fn upload(&self, docs: &[IndexedDocument]) -> Result<Vec<UploadStatus>> {
        let mut width = self.vector_width();
        let mut map = self.docs.write().unwrap_or_else(|e| e.into_inner());
        let mut statuses = Vec::with_capacity(docs.len());
        for doc in docs {
            let len = doc.content_vector.len();
            if len == 0 {
                statuses.push(UploadStatus {
                    key: doc.id.clone(),
                    succeeded: false,
                    status_code: 400,
                    error_message: Some("vector is empty".to_string()),
                });
                continue;
            }
            let expected = *width.get_or_insert(len);
            if len != expected {
                statuses.push(UploadStatus {
                    key: doc.id.clone(),
                    succeeded: false,
                    status_code: 400,
                    error_message: Some(format!("vector has {len} dimensions, index expects {expected}")),
                });
                continue;
            }
            let replaced = map.insert(doc.id.clone(), doc.clone()).is_some();
            statuses.push(UploadStatus {
                key: doc.id.clone(),
                succeeded: true,
                status_code: if replaced { 200 } else { 201 },
                error_message: None,
            });
        }
        Ok(statuses)
    }

    /// 70% cosine similarity, 30% share of query words found in the content.
    fn hybrid_search(&self, query: &HybridQuery) -> Result<Vec<RetrievedResult>> {
        let query_lower = query.text.to_lowercase();
        let query_words: Vec<&str> = query_lower.split_whitespace().collect();

        let map = self.read();
        let mut scored: Vec<(&IndexedDocument, f64)> = map
            .values()
            .map(|doc| {
                let dense = cosine(&query.vector, &doc.content_vector);
                let text = lexical_overlap(&query_words, &doc.content);
                (doc, dense * VECTOR_WEIGHT + text * TEXT_WEIGHT)
            })
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal).then_with(|| a.0.id.cmp(&b.0.id)));
        scored.truncate(query.top_k);

        Ok(scored
            .into_iter()
            .map(|(doc, score)| RetrievedResult {
                content: doc.content.clone(),
                source: doc.source_file.clone(),
                score,
                chunk_index: Some(doc.chunk_index),
            })
            .collect())
    }
}

fn cosine(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let dot: f64 = a.iter().zip(b).map(|(x, y)| f64::from(*x) * f64::from(*y)).sum();
    let na: f64 = a.iter().map(|x| f64::from(*x).powi(2)).sum::<f64>().sqrt();
    let nb: f64 = b.iter().map(|x| f64::from(*x).powi(2)).sum::<f64>().sqrt();
    if na == 0.0 || nb == 0.0 { 0.0 } else { dot / (na * nb) }
}

fn lexical_overlap(query_words: &[&str], content: &str) -> f64 {
    if query_words.is_empty() {
        return 0.0;
    }
    let content_lower = content.to_lowercase();
    let hits = query_words.iter().filter(|w| content_lower.contains(**w)).count();
    hits as f64 / query_words.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosine_handles_degenerate_vectors() {
        assert_eq!(cosine(&[], &[]), 0.0);
        assert_eq!(cosine(&[1.0, 0.0], &[1.0]), 0.0);
        assert_eq!(cosine(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
        assert!((cosine(&[1.0, 1.0], &[2.0, 2.0]) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn lexical_overlap_is_a_fraction_of_query_words() {
        assert_eq!(lexical_overlap(&["agent", "powers"], "The Agent may act"), 0.5);
        assert_eq!(lexical_overlap(&[], "anything"), 0.0);
    }
}
