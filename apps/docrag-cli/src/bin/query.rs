use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::error;

use docrag_cli::{chat_model, format_result, init_tracing, is_exit_command, load_settings, IndexBackend};
use docrag_core::traits::{ChatModel, Embedder};
use docrag_embed::get_default_embedder;
use docrag_pipeline::{AnswerOptions, RagAssistant, NO_RELEVANT_CONTENT};

#[derive(Debug, Parser)]
#[command(name = "docrag-query", about = "Ask questions about the indexed documents")]
struct Args {
    /// Ask once and exit; without it, read questions interactively
    question: Option<String>,
    /// Number of chunks to retrieve (defaults to retrieval.top_k)
    #[arg(long)]
    top_k: Option<usize>,
    /// Query a local JSON index instead of Azure AI Search
    #[arg(long)]
    local_index: Option<PathBuf>,
    /// Show retrieved chunks without generating an answer
    #[arg(long)]
    retrieve_only: bool,
}

type Assistant<'a> = RagAssistant<Box<dyn Embedder>, &'a IndexBackend, Box<dyn ChatModel>>;

fn ask(assistant: &Assistant<'_>, question: &str, retrieve_only: bool) -> anyhow::Result<()> {
    let results = assistant.retrieve(question)?;
    if results.is_empty() {
        println!("{}", NO_RELEVANT_CONTENT);
        return Ok(());
    }
    println!("\nRetrieved {} chunks:", results.len());
    for (i, result) in results.iter().enumerate() {
        println!("{}", format_result(i + 1, result));
    }
    if retrieve_only {
        return Ok(());
    }
    let answer = assistant.answer_from(question, &results)?;
    println!("\nAnswer:\n{}", answer.text());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let settings = load_settings()?;

    let mut options = AnswerOptions::from_settings(&settings);
    if let Some(top_k) = args.top_k {
        options.top_k = top_k;
    }
    let backend = IndexBackend::open(&settings, args.local_index.as_deref())?;
    let assistant = RagAssistant::new(
        get_default_embedder(&settings)?,
        &backend,
        chat_model(&settings, args.retrieve_only)?,
        options,
    )?;

    if let Some(question) = args.question.as_deref() {
        return ask(&assistant, question, args.retrieve_only);
    }

    println!("POA Document Assistant (type 'quit' to exit)\n============================================");
    let stdin = io::stdin();
    loop {
        print!("\nQuestion: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if is_exit_command(question) {
            break;
        }
        if let Err(e) = ask(&assistant, question, args.retrieve_only) {
            error!("query failed: {:#}", e);
        }
    }
    Ok(())
}
