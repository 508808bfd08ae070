//! Fixed-size character windows with overlap.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Chunk;

/// Window size and overlap, both counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    pub chunk_size: usize,
    pub overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self { chunk_size: 1000, overlap: 200 }
    }
}

impl ChunkingConfig {
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        let config = Self { chunk_size, overlap };
        config.validate()?;
        Ok(config)
    }

    /// `chunk_size` must exceed `overlap`, otherwise the window never advances.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size <= self.overlap {
            return Err(Error::InvalidConfig(format!(
                "chunk_size ({}) must be greater than overlap ({})",
                self.chunk_size, self.overlap
            )));
        }
        Ok(())
    }

    /// Distance between the starts of consecutive windows.
    pub fn stride(&self) -> usize {
        self.chunk_size - self.overlap
    }
}

#[derive(Debug, Clone)]
pub struct Chunker {
    config: ChunkingConfig,
}

impl Chunker {
    pub fn new(config: ChunkingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Slide a `chunk_size` window over `text` in steps of `chunk_size - overlap`.
    ///
    /// Each window is trimmed; whitespace-only windows are dropped and do not
    /// consume an ordinal. The last window is clamped to the end of the text.
    pub fn chunk(&self, source: &str, text: &str) -> Vec<Chunk> {
        // Byte offset of every char boundary, including the end of the text.
        let bounds: Vec<usize> = text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(text.len()))
            .collect();
        let len = bounds.len() - 1;
        let stride = self.config.stride();

        let mut chunks = Vec::new();
        let mut start = 0;
        while start < len {
            let end = start.saturating_add(self.config.chunk_size).min(len);
            let content = text[bounds[start]..bounds[end]].trim();
            if !content.is_empty() {
                chunks.push(Chunk {
                    source: source.to_string(),
                    index: chunks.len(),
                    content: content.to_string(),
                    span: start..end,
                });
            }
            start = start.saturating_add(stride);
        }
        chunks
    }
}

/// Validate the parameters, then chunk `text`. Nothing is produced on invalid input.
pub fn chunk_text(source: &str, text: &str, chunk_size: usize, overlap: usize) -> Result<Vec<Chunk>> {
    let chunker = Chunker::new(ChunkingConfig::new(chunk_size, overlap)?)?;
    Ok(chunker.chunk(source, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(len: usize) -> String {
        (0..len).map(|i| (b'a' + (i % 26) as u8) as char).collect()
    }

    #[test]
    fn windows_start_every_stride() {
        let text = letters(2500);
        let chunks = chunk_text("doc.md", &text, 1000, 200).unwrap();
        let starts: Vec<usize> = chunks.iter().map(|c| c.span.start).collect();
        assert_eq!(starts, vec![0, 800, 1600, 2400]);
        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[3].content.chars().count(), 100);
        assert_eq!(chunks[0].content, &text[..1000]);
    }

    #[test]
    fn short_text_is_one_trimmed_chunk() {
        let chunks = chunk_text("a.md", "  hello world \n", 1000, 200).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "hello world");
        assert_eq!(chunks[0].index, 0);
        assert_eq!(chunks[0].span, 0..15);
    }

    #[test]
    fn whitespace_only_text_has_no_chunks() {
        let text = " \n\t ".repeat(700);
        assert!(chunk_text("blank.md", &text, 1000, 200).unwrap().is_empty());
        assert!(chunk_text("empty.md", "", 1000, 200).unwrap().is_empty());
    }

    #[test]
    fn blank_windows_do_not_consume_ordinals() {
        // Windows of 4 with stride 4: "abcd", "    ", "efgh".
        let chunks = chunk_text("gap.md", "abcd    efgh", 4, 0).unwrap();
        let summary: Vec<(usize, &str, usize)> =
            chunks.iter().map(|c| (c.index, c.content.as_str(), c.span.start)).collect();
        assert_eq!(summary, vec![(0, "abcd", 0), (1, "efgh", 8)]);
    }

    #[test]
    fn consecutive_spans_overlap_by_exactly_overlap() {
        for (size, overlap) in [(10, 3), (7, 0), (5, 4), (100, 99)] {
            let text = letters(137);
            let chunks = chunk_text("x.md", &text, size, overlap).unwrap();
            assert_eq!(chunks.first().map(|c| c.span.start), Some(0));
            assert_eq!(chunks.last().map(|c| c.span.end), Some(137));
            for pair in chunks.windows(2) {
                assert_eq!(pair[1].span.start - pair[0].span.start, size - overlap);
                // Windows clamped to the end of the text overlap by less.
                if pair[0].span.len() == size {
                    assert_eq!(pair[0].span.end - pair[1].span.start, overlap);
                }
            }
        }
    }

    #[test]
    fn huge_window_sizes_do_not_overflow() {
        // stride is 1, so every character starts a window clamped to the text.
        let chunks = chunk_text("a.md", "abc", usize::MAX, usize::MAX - 1).unwrap();
        let summary: Vec<(&str, std::ops::Range<usize>)> =
            chunks.iter().map(|c| (c.content.as_str(), c.span.clone())).collect();
        assert_eq!(summary, vec![("abc", 0..3), ("bc", 1..3), ("c", 2..3)]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let text = "é".repeat(10);
        let chunks = chunk_text("accents.md", &text, 4, 1).unwrap();
        assert_eq!(chunks[0].content, "éééé");
        assert_eq!(chunks[1].span, 3..7);
    }

    #[test]
    fn overlap_not_smaller_than_size_is_rejected() {
        assert!(matches!(chunk_text("a.md", "text", 200, 200), Err(Error::InvalidConfig(_))));
        assert!(matches!(chunk_text("a.md", "text", 100, 300), Err(Error::InvalidConfig(_))));
        assert!(matches!(chunk_text("a.md", "", 0, 0), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rechunking_is_idempotent() {
        let text = format!("{} \n\n {}", letters(1700), letters(900));
        let first: Vec<(String, String)> = chunk_text("PA Durable Power of Attorney.md", &text, 1000, 200)
            .unwrap()
            .into_iter()
            .map(|c| (c.id(), c.content))
            .collect();
        let second: Vec<(String, String)> = chunk_text("PA Durable Power of Attorney.md", &text, 1000, 200)
            .unwrap()
            .into_iter()
            .map(|c| (c.id(), c.content))
            .collect();
        assert_eq!(first, second);
        assert_eq!(first[0].0, "PA-Durable-Power-of-Attorney-md-chunk-0");
    }
}
