use std::path::PathBuf;

use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot open '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Column '{column}' not found in CSV. Available columns: {}",
        format_columns(.available)
    )]
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    #[error("CSV error: {0}")]
    Parse(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Render column names as a bracketed, quoted list: `['a', 'b']`
fn format_columns(columns: &[String]) -> String {
    let quoted: Vec<String> = columns.iter().map(|c| quote_name(c)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Quote a name with single quotes, or double quotes when it contains a
/// single quote and no double quote
fn quote_name(name: &str) -> String {
    let escaped = name.replace('\\', "\\\\");
    if escaped.contains('\'') && !escaped.contains('"') {
        format!("\"{}\"", escaped)
    } else {
        format!("'{}'", escaped.replace('\'', "\\'"))
    }
}
