use std::path::PathBuf;

/// Result type for csv-tally operations
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Field separator of the input files
pub const FIELD_DELIMITER: u8 = b',';

/// What to tally and how
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyRequest {
    /// CSV file with a header row
    pub path: PathBuf,

    /// Header name of the column to count
    pub column: String,

    /// Split cells on this substring; `None` counts whole cells
    pub delimiter: Option<String>,
}

impl TallyRequest {
    pub fn new(path: impl Into<PathBuf>, column: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            column: column.into(),
            delimiter: None,
        }
    }

    /// Set the split delimiter. An empty delimiter disables splitting.
    pub fn with_delimiter(mut self, delimiter: Option<String>) -> Self {
        self.delimiter = delimiter.filter(|d| !d.is_empty());
        self
    }
}

/// A counted key and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    pub key: String,
    pub count: u64,
}

impl Tally {
    pub fn new(key: impl Into<String>, count: u64) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}
