use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// File containing the grammar
    pub file: PathBuf,

    /// Search depth ceiling (default: 4096)
    #[arg(short, long, value_name = "DEPTH")]
    pub depth: Option<usize>,

    /// Skip printing the compiled command table
    #[arg(short, long)]
    pub quiet: bool,
}
