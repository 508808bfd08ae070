use clap::Parser;
use std::path::PathBuf;

use docrag_cli::{init_tracing, load_settings, IndexBackend};
use docrag_core::data_processor::DataProcessor;
use docrag_core::traits::SearchIndex;
use docrag_embed::get_default_embedder;
use docrag_pipeline::Indexer;

#[derive(Debug, Parser)]
#[command(name = "docrag-indexer", about = "Chunk, embed and upload documents to the search index")]
struct Args {
    /// Directory of documents (defaults to data.docs_dir)
    dir: Option<PathBuf>,
    /// Process at most this many files
    #[arg(long)]
    limit: Option<usize>,
    /// Index into a local JSON file instead of Azure AI Search
    #[arg(long)]
    local_index: Option<PathBuf>,
    /// Do not create or update the index schema first
    #[arg(long)]
    skip_schema: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let settings = load_settings()?;
    let data_dir = args.dir.clone().unwrap_or_else(|| settings.data.docs_path());

    println!("Document Indexer\n================");
    println!("Data directory: {}", data_dir.display());

    let processor = DataProcessor::new(settings.chunking, &settings.data.extension)?;
    let chunks = match args.limit {
        Some(limit) => {
            println!("🔢 Limiting indexing to {} files", limit);
            processor.process_directory_limited(&data_dir, limit)?
        }
        None => processor.process_directory(&data_dir)?,
    };
    if chunks.is_empty() {
        println!("No chunks to index");
        return Ok(());
    }

    let backend = IndexBackend::open(&settings, args.local_index.as_deref())?;
    if args.skip_schema || backend.is_local() {
        println!("Skipping schema setup");
    } else {
        backend.ensure_index()?;
        println!("Search index ready");
    }

    let embedder = get_default_embedder(&settings)?;
    let indexer = Indexer::new(embedder, &backend, settings.index.batch_size)?;
    let docs = indexer.build_documents(&chunks)?;
    let report = indexer.upload(&docs)?;
    backend.persist()?;

    for batch in &report.batches {
        println!("  -> Batch {}: {}/{} succeeded", batch.batch, batch.succeeded, batch.size);
    }
    if report.is_complete() {
        println!("\n✅ All {} chunks indexed successfully.", report.total());
        Ok(())
    } else {
        let failed = report.failed_keys();
        eprintln!("\n⚠️  {} of {} chunks failed: {}", failed.len(), report.total(), failed.join(", "));
        std::process::exit(1);
    }
}
