use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use tracing::{info, warn};

use docrag_core::batch::partition;
use docrag_core::traits::{Embedder, SearchIndex};
use docrag_core::types::{Chunk, IndexedDocument};
use docrag_core::Error;

/// Outcome of one uploaded batch. `batch` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub batch: usize,
    pub size: usize,
    pub succeeded: usize,
    pub failed_keys: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexingReport {
    pub batches: Vec<BatchReport>,
}

impl IndexingReport {
    pub fn total(&self) -> usize {
        self.batches.iter().map(|b| b.size).sum()
    }

    pub fn succeeded(&self) -> usize {
        self.batches.iter().map(|b| b.succeeded).sum()
    }

    pub fn failed_keys(&self) -> Vec<&str> {
        self.batches.iter().flat_map(|b| b.failed_keys.iter().map(String::as_str)).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.succeeded() == self.total()
    }
}

/// Embeds chunks and uploads them in fixed-size batches.
pub struct Indexer<E, S> {
    embedder: E,
    index: S,
    batch_size: usize,
}

impl<E: Embedder, S: SearchIndex> Indexer<E, S> {
    pub fn new(embedder: E, index: S, batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(Error::InvalidConfig("index.batch_size must be positive".to_string()).into());
        }
        Ok(Self { embedder, index, batch_size })
    }

    /// Embed every chunk once, in order. Two chunks mapping to the same key
    /// would overwrite each other in the index, so that aborts the run.
    pub fn build_documents(&self, chunks: &[Chunk]) -> Result<Vec<IndexedDocument>> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        for chunk in chunks {
            if let Some(other) = seen.insert(chunk.id(), &chunk.source) {
                return Err(Error::Operation(format!(
                    "chunk key {} is produced by both {} and {}",
                    chunk.id(),
                    other,
                    chunk.source
                ))
                .into());
            }
        }

        let pb = ProgressBar::new(chunks.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} chunks ({percent}%) {msg}")?
                .progress_chars("#>-"),
        );

        let expected = self.embedder.dim();
        let mut docs = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            pb.set_message(format!("{} #{}", chunk.source, chunk.index));
            let vector = self.embedder.embed_text(&chunk.content)?;
            if vector.len() != expected {
                pb.abandon();
                return Err(Error::DimensionMismatch { expected, actual: vector.len() }.into());
            }
            docs.push(IndexedDocument::from_chunk(chunk, vector));
            pb.inc(1);
        }
        pb.finish_with_message("embedded");
        info!("embedded {} chunks", docs.len());
        Ok(docs)
    }

    /// Upload in batches of `batch_size`. Rejected items are recorded and the
    /// remaining batches still go out; a failed request stops the run.
    pub fn upload(&self, documents: &[IndexedDocument]) -> Result<IndexingReport> {
        let batches = partition(documents, self.batch_size)?;
        info!("uploading {} documents in {} batches", documents.len(), batches.len());

        let mut report = IndexingReport::default();
        for (i, batch) in batches.into_iter().enumerate() {
            let statuses = self.index.upload(batch)?;
            let succeeded = statuses.iter().filter(|s| s.succeeded).count();
            let failed_keys: Vec<String> = statuses.iter().filter(|s| !s.succeeded).map(|s| s.key.clone()).collect();
            info!("batch {}: {}/{} succeeded", i + 1, succeeded, batch.len());
            if !failed_keys.is_empty() {
                warn!(batch = i + 1, "failed keys: {}", failed_keys.join(", "));
            }
            report.batches.push(BatchReport { batch: i + 1, size: batch.len(), succeeded, failed_keys });
        }
        Ok(report)
    }

    /// Ensure the index exists, then embed and upload `chunks`.
    pub fn run(&self, chunks: &[Chunk]) -> Result<IndexingReport> {
        self.index.ensure_index()?;
        let docs = self.build_documents(chunks)?;
        self.upload(&docs)
    }
}
