//! Orchestration over the collaborator traits: indexing chunks into a search
//! index, and answering questions from what the index returns.

pub mod assistant;
pub mod indexing;

pub use assistant::{Answer, AnswerOptions, RagAssistant, NO_RELEVANT_CONTENT};
pub use indexing::{BatchReport, Indexer, IndexingReport};
