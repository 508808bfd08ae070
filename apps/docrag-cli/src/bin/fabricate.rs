use clap::Parser;
use std::path::PathBuf;

use docrag_cli::{init_tracing, load_settings};

#[derive(Debug, Parser)]
#[command(name = "docrag-fabricate", about = "Write the fictional sample POA documents")]
struct Args {
    /// Output directory (defaults to data.docs_dir)
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let settings = load_settings()?;
    let out = args.out.unwrap_or_else(|| settings.data.docs_path());

    let written = docrag_fabricate::write_samples(&out)?;
    for path in &written {
        println!("Created {}", path.display());
    }
    println!("\n✅ {} sample documents written to {}", written.len(), out.display());
    Ok(())
}
