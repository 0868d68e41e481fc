use clap::Subcommand;
use std::path::PathBuf;

pub mod info;
pub mod scan;

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a single model file and display its header
    Info {
        /// Model file (.mdl or .vtx)
        path: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Scan a directory tree and decode every model header in it
    Scan {
        /// Directory to scan
        #[arg(short, long)]
        source: PathBuf,

        /// Output the full report as JSON
        #[arg(long)]
        json: bool,

        /// Suppress progress display
        #[arg(short, long)]
        quiet: bool,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Info { path, json } => info::execute(path, *json),
            Commands::Scan {
                source,
                json,
                quiet,
            } => scan::execute(source, *json, *quiet),
        }
    }
}
