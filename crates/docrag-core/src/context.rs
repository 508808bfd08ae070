//! Prompt material handed to the chat model.

use crate::types::RetrievedResult;

pub const CONTEXT_SEPARATOR: &str = "\n\n---\n\n";

pub const SYSTEM_PROMPT: &str = "You are a helpful legal document assistant. You answer questions
about Power of Attorney (POA) documents based ONLY on the provided context.

Rules:
- Only use information from the provided context to answer.
- If the context doesn't contain enough information, say so clearly.
- Always mention which source document (PA or IL) the information comes from.
- Be precise about legal details - do not paraphrase legal terms loosely.
- If PA and IL differ on something, highlight the differences.";

/// Render each result as `[Source: name]` followed by its content, in the
/// order given, joined by [`CONTEXT_SEPARATOR`]. No results, no text.
pub fn assemble_context(results: &[RetrievedResult]) -> String {
    results
        .iter()
        .map(|r| format!("[Source: {}]\n{}", r.source, r.content))
        .collect::<Vec<_>>()
        .join(CONTEXT_SEPARATOR)
}

pub fn build_user_message(question: &str, context: &str) -> String {
    format!(
        "Context from POA documents:\n\n{context}{CONTEXT_SEPARATOR}Question: {question}\n\nPlease answer based on the context above."
    )
}

/// First `max_chars` characters of `content` on a single line.
pub fn preview(content: &str, max_chars: usize) -> String {
    content.chars().take(max_chars).map(|c| if c == '\n' { ' ' } else { c }).collect()
}
