pub mod cli;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // 1. ── Load ───────────────────────────────────────────────────────
    let sources = parser::load(&args).with_context(|| "Loading upstream registries")?;

    // 2. ── Process ────────────────────────────────────────────────────
    let snapshot = processor::run(&sources);

    // 3. ── Write outputs ──────────────────────────────────────────────
    writer::sql::emit(&snapshot, &args.output)
        .with_context(|| format!("Writing {}", args.output.display()))?;
    info!("wrote {}", args.output.display());

    if let Some(json) = &args.json {
        writer::json::emit(&snapshot, json)
            .with_context(|| format!("Writing {}", json.display()))?;
        info!("wrote {}", json.display());
    }

    Ok(())
}
