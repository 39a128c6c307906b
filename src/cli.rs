use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output .sql statement stream
    #[arg(default_value = "zls.sql")]
    pub output: PathBuf,
    /// Local copy of the ISO 639-2 code list (fetched when omitted)
    #[arg(long)]
    pub iso: Option<PathBuf>,
    /// Local copy of the IANA language subtag registry
    #[arg(long)]
    pub iana: Option<PathBuf>,
    /// Local copy of Unicode Scripts.txt
    #[arg(long)]
    pub scripts: Option<PathBuf>,
    /// Also dump the snapshot as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,
    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}
