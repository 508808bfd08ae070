//! Glue shared by the `docrag-*` binaries.

use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use docrag_chat::AzureChatModel;
use docrag_core::config::{Config, Settings};
use docrag_core::context::preview;
use docrag_core::traits::{ChatModel, SearchIndex};
use docrag_core::types::{ChatRequest, HybridQuery, IndexedDocument, RetrievedResult, UploadStatus};
use docrag_search::{AzureSearchIndex, LocalIndex};

pub const PREVIEW_CHARS: usize = 100;

/// Logs go to stderr so stdout stays readable; `RUST_LOG` overrides `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

/// `.env` first, then the layered configuration from the working directory.
pub fn load_settings() -> Result<Settings> {
    dotenv::dotenv().ok();
    Config::load()?.settings()
}

/// The hosted index, or a JSON-backed [`LocalIndex`] when a path is given.
pub enum IndexBackend {
    Azure(AzureSearchIndex),
    Local { index: LocalIndex, path: PathBuf },
}

impl IndexBackend {
    pub fn open(settings: &Settings, local: Option<&Path>) -> Result<Self> {
        match local {
            Some(path) => {
                info!(path = %path.display(), "using local index");
                Ok(Self::Local { index: LocalIndex::open(path)?, path: path.to_path_buf() })
            }
            None => {
                let index = AzureSearchIndex::from_env(settings)?;
                info!(index = %index.index_name(), "using Azure AI Search");
                Ok(Self::Azure(index))
            }
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local { .. })
    }

    /// Save a local index back to its file; the hosted index needs nothing.
    pub fn persist(&self) -> Result<()> {
        match self {
            Self::Azure(_) => Ok(()),
            Self::Local { index, path } => index.save(path),
        }
    }

    fn inner(&self) -> &dyn SearchIndex {
        match self {
            Self::Azure(index) => index as &dyn SearchIndex,
            Self::Local { index, .. } => index as &dyn SearchIndex,
        }
    }
}

impl SearchIndex for IndexBackend {
    fn ensure_index(&self) -> Result<()> {
        self.inner().ensure_index()
    }

    fn upload(&self, docs: &[IndexedDocument]) -> Result<Vec<UploadStatus>> {
        self.inner().upload(docs)
    }

    fn hybrid_search(&self, query: &HybridQuery) -> Result<Vec<RetrievedResult>> {
        self.inner().hybrid_search(query)
    }
}

/// Stands in for the chat model when only retrieval was asked for.
pub struct ChatDisabled;

impl ChatModel for ChatDisabled {
    fn complete(&self, _request: &ChatRequest) -> Result<String> {
        Err(anyhow!("answer generation is disabled (--retrieve-only)"))
    }
}

pub fn chat_model(settings: &Settings, retrieve_only: bool) -> Result<Box<dyn ChatModel>> {
    if retrieve_only {
        return Ok(Box::new(ChatDisabled));
    }
    Ok(Box::new(AzureChatModel::from_env(settings)?))
}

pub fn is_exit_command(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "quit" | "exit" | "q")
}

/// One retrieved chunk as a single display line.
pub fn format_result(rank: usize, result: &RetrievedResult) -> String {
    format!(
        "  [{}] {} (score: {:.4}) {}...",
        rank,
        result.source,
        result.score,
        preview(&result.content, PREVIEW_CHARS)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn exit_commands_are_case_insensitive() {
        for word in ["quit", "EXIT", " q "] {
            assert!(is_exit_command(word), "{word}");
        }
        assert!(!is_exit_command("question"));
        assert!(!is_exit_command(""));
    }

    #[test]
    fn result_line_is_single_line_preview() {
        let r = RetrievedResult {
            content: format!("line one\nline two {}", "x".repeat(200)),
            source: "PA.md".to_string(),
            score: 1.5,
            chunk_index: Some(0),
        };
        let line = format_result(1, &r);
        assert!(line.starts_with("  [1] PA.md (score: 1.5000) line one line two"));
        assert!(!line.contains('\n'));
        assert_eq!(line.chars().count(), "  [1] PA.md (score: 1.5000) ".chars().count() + PREVIEW_CHARS + 3);
    }

    #[test]
    fn local_backend_persists_uploads() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("index.json");
        let settings = Settings::default();

        let backend = IndexBackend::open(&settings, Some(&path)).unwrap();
        assert!(backend.is_local());
        backend.ensure_index().unwrap();
        let doc = IndexedDocument {
            id: "a-md-chunk-0".to_string(),
            content: "alpha".to_string(),
            source_file: "a.md".to_string(),
            chunk_index: 0,
            content_vector: vec![1.0, 0.0],
        };
        assert!(backend.upload(&[doc]).unwrap()[0].succeeded);
        backend.persist().unwrap();

        let reopened = IndexBackend::open(&settings, Some(&path)).unwrap();
        let hits = reopened
            .hybrid_search(&HybridQuery { text: "alpha".to_string(), vector: vec![1.0, 0.0], top_k: 3 })
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].source, "a.md");
    }

    #[test]
    fn retrieve_only_chat_refuses() {
        let chat = chat_model(&Settings::default(), true).unwrap();
        let req = ChatRequest { system: String::new(), user: String::new(), temperature: 0.0, max_tokens: 1 };
        assert!(chat.complete(&req).is_err());
    }
}
