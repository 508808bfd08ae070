use anyhow::Result;
use tracing::{debug, info};

use docrag_core::config::Settings;
use docrag_core::context::{assemble_context, build_user_message, SYSTEM_PROMPT};
use docrag_core::traits::{ChatModel, Embedder, SearchIndex};
use docrag_core::types::{ChatRequest, HybridQuery, RetrievedResult};
use docrag_core::Error;

pub const NO_RELEVANT_CONTENT: &str = "No relevant documents found.";

#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOptions {
    pub top_k: usize,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for AnswerOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl AnswerOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            top_k: settings.retrieval.top_k,
            temperature: settings.chat.temperature,
            max_tokens: settings.chat.max_tokens,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Retrieval came back empty; the chat model was not consulted.
    NoRelevantContent,
    /// `sources` lists each contributing document once, in retrieval order.
    Generated { text: String, sources: Vec<String> },
}

impl Answer {
    pub fn text(&self) -> &str {
        match self {
            Answer::NoRelevantContent => NO_RELEVANT_CONTENT,
            Answer::Generated { text, .. } => text,
        }
    }
}

/// Retrieval-augmented question answering over a search index.
pub struct RagAssistant<E, S, C> {
    embedder: E,
    index: S,
    chat: C,
    options: AnswerOptions,
}

impl<E: Embedder, S: SearchIndex, C: ChatModel> RagAssistant<E, S, C> {
    pub fn new(embedder: E, index: S, chat: C, options: AnswerOptions) -> Result<Self> {
        if options.top_k == 0 {
            return Err(Error::InvalidConfig("top_k must be positive".to_string()).into());
        }
        Ok(Self { embedder, index, chat, options })
    }

    /// Embed the question once and run one hybrid query for `top_k` results.
    pub fn retrieve(&self, question: &str) -> Result<Vec<RetrievedResult>> {
        let vector = self.embedder.embed_text(question)?;
        let query = HybridQuery { text: question.to_string(), vector, top_k: self.options.top_k };
        let results = self.index.hybrid_search(&query)?;
        debug!(results = results.len(), "retrieved");
        Ok(results)
    }

    /// Answer from results already retrieved for `question`.
    pub fn answer_from(&self, question: &str, results: &[RetrievedResult]) -> Result<Answer> {
        if results.is_empty() {
            info!("no results, skipping generation");
            return Ok(Answer::NoRelevantContent);
        }
        let context = assemble_context(results);
        let request = ChatRequest {
            system: SYSTEM_PROMPT.to_string(),
            user: build_user_message(question, &context),
            temperature: self.options.temperature,
            max_tokens: self.options.max_tokens,
        };
        let text = self.chat.complete(&request)?;

        let mut sources: Vec<String> = Vec::new();
        for r in results {
            if !sources.contains(&r.source) {
                sources.push(r.source.clone());
            }
        }
        Ok(Answer::Generated { text, sources })
    }

    pub fn answer(&self, question: &str) -> Result<Answer> {
        let results = self.retrieve(question)?;
        self.answer_from(question, &results)
    }
}
