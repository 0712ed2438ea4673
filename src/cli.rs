use clap::Parser;
use std::path::PathBuf;

/// Count occurrences in a CSV column
///
/// Options left out on the command line are asked for on stdin.
#[derive(Parser, Debug)]
#[command(name = "csv-tally")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the CSV file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Name of the column to analyze
    #[arg(long)]
    pub column: Option<String>,

    /// Delimiter to split entries (e.g. '; ' for authors)
    #[arg(long)]
    pub split: Option<String>,
}
