use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::chunking::{Chunker, ChunkingConfig};
use crate::error::Result;
use crate::types::Chunk;

/// Reads whole-document text files from a directory and chunks each one.
#[derive(Debug, Clone)]
pub struct DataProcessor {
    chunker: Chunker,
    extension: String,
}

impl DataProcessor {
    pub fn new(chunking: ChunkingConfig, extension: &str) -> Result<Self> {
        Ok(Self { chunker: Chunker::new(chunking)?, extension: extension.trim_start_matches('.').to_string() })
    }

    pub fn process_directory(&self, data_dir: &Path) -> Result<Vec<Chunk>> {
        let files = self.list_source_files(data_dir);
        self.process_files(data_dir, &files)
    }

    pub fn process_directory_limited(&self, data_dir: &Path, limit: usize) -> Result<Vec<Chunk>> {
        let mut files = self.list_source_files(data_dir);
        if files.len() > limit {
            files.truncate(limit);
            info!(limit, "limited to first {} files", limit);
        }
        self.process_files(data_dir, &files)
    }

    /// Chunk one document. The source name is the file name, extension included.
    pub fn process_file(&self, file_path: &Path) -> Result<Vec<Chunk>> {
        let content = self.read_file_content(file_path)?;
        let source = source_name(file_path);
        let chunks = self.chunker.chunk(&source, &content);
        info!(source = %source, chunks = chunks.len(), "split into {} chunks", chunks.len());
        Ok(chunks)
    }

    /// Files with the configured extension under `root`, sorted by path.
    pub fn list_source_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for entry in walkdir::WalkDir::new(root).into_iter().filter_map(|e| e.ok()).filter(|e| e.file_type().is_file()) {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some(self.extension.as_str()) {
                files.push(path.to_path_buf());
            }
        }
        files.sort();
        files
    }

    fn process_files(&self, data_dir: &Path, files: &[PathBuf]) -> Result<Vec<Chunk>> {
        if files.is_empty() {
            warn!("no .{} files found under {}", self.extension, data_dir.display());
            return Ok(vec![]);
        }
        let mut all_chunks = Vec::new();
        for (file_index, file_path) in files.iter().enumerate() {
            info!("processing file {}/{}: {}", file_index + 1, files.len(), file_path.display());
            all_chunks.extend(self.process_file(file_path)?);
        }
        info!("processed {} files into {} chunks", files.len(), all_chunks.len());
        Ok(all_chunks)
    }

    fn read_file_content(&self, file_path: &Path) -> Result<String> {
        match fs::read_to_string(file_path) {
            Ok(content) => Ok(content),
            Err(_) => Ok(String::from_utf8_lossy(&fs::read(file_path)?).to_string()),
        }
    }
}

fn source_name(file_path: &Path) -> String {
    file_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| file_path.to_string_lossy().to_string())
}
