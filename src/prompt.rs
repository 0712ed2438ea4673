use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::Error;
use crate::types::{Result, TallyRequest};

const FILE_PROMPT: &str = "Enter the path to the CSV file: ";
const COLUMN_PROMPT: &str = "Enter the column name to analyze: ";
const SPLIT_PROMPT: &str = "Enter a delimiter to split entries (leave blank if none): ";

/// Asks for the inputs the command line left out
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and return the trimmed answer
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InvalidInput("no input provided".to_string()));
        }
        Ok(line.trim().to_string())
    }

    /// Ask for a file path until the answer names an existing file
    pub fn ask_file(&mut self) -> Result<PathBuf> {
        loop {
            let answer = self.ask(FILE_PROMPT)?;
            match check_file(Path::new(&answer)) {
                Ok(()) => return Ok(PathBuf::from(answer)),
                Err(_) => writeln!(self.output, "File not found. Try again.")?,
            }
        }
    }

    pub fn ask_column(&mut self) -> Result<String> {
        self.ask(COLUMN_PROMPT)
    }

    /// Ask for a split delimiter; a blank answer means no splitting
    pub fn ask_delimiter(&mut self) -> Result<Option<String>> {
        let answer = self.ask(SPLIT_PROMPT)?;
        Ok(Some(answer).filter(|d| !d.is_empty()))
    }

    /// Build a request from the command line, prompting for missing values
    pub fn resolve(&mut self, cli: Cli) -> Result<TallyRequest> {
        let path = match cli.file {
            Some(path) => path,
            None => self.ask_file()?,
        };

        let column = match cli.column.filter(|c| !c.is_empty()) {
            Some(column) => column,
            None => self.ask_column()?,
        };

        let delimiter = match cli.split {
            Some(split) => Some(split),
            None => self.ask_delimiter()?,
        };

        Ok(TallyRequest::new(path, column).with_delimiter(delimiter))
    }
}

/// Validate that `path` names an existing regular file
pub fn check_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::FileAccess {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    fn cli(file: Option<PathBuf>, column: Option<&str>, split: Option<&str>) -> Cli {
        Cli {
            file,
            column: column.map(str::to_string),
            split: split.map(str::to_string),
        }
    }

    #[test]
    fn test_all_flags_given_no_prompt() {
        let mut out = Vec::new();
        let request = Prompter::new(Cursor::new(""), &mut out)
            .resolve(cli(Some("data.csv".into()), Some("tags"), Some("; ")))
            .unwrap();

        assert!(out.is_empty());
        assert_eq!(request.path, PathBuf::from("data.csv"));
        assert_eq!(request.column, "tags");
        assert_eq!(request.delimiter.as_deref(), Some("; "));
    }

    #[test]
    fn test_empty_split_flag_means_no_split() {
        let mut out = Vec::new();
        let request = Prompter::new(Cursor::new(""), &mut out)
            .resolve(cli(Some("data.csv".into()), Some("tags"), Some("")))
            .unwrap();
        assert_eq!(request.delimiter, None);
    }

    #[test]
    fn test_prompts_for_missing_values() {
        let file = NamedTempFile::with_suffix(".csv").unwrap();
        let input = format!("{}\n  name  \n\n", file.path().display());
        let mut out = Vec::new();

        let request = Prompter::new(Cursor::new(input), &mut out)
            .resolve(cli(None, None, None))
            .unwrap();

        assert_eq!(request.path, file.path());
        assert_eq!(request.column, "name");
        assert_eq!(request.delimiter, None);

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains(FILE_PROMPT));
        assert!(shown.contains(COLUMN_PROMPT));
        assert!(shown.contains(SPLIT_PROMPT));
    }

    #[test]
    fn test_reprompts_until_file_exists() {
        let dir = tempfile::tempdir().unwrap();
        let file = NamedTempFile::with_suffix(".csv").unwrap();
        let input = format!(
            "{}\n{}\n{}\n",
            dir.path().join("nope.csv").display(),
            dir.path().display(),
            file.path().display()
        );
        let mut out = Vec::new();

        let path = Prompter::new(Cursor::new(input), &mut out).ask_file().unwrap();
        assert_eq!(path, file.path());

        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown.matches("File not found. Try again.").count(), 2);
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut out = Vec::new();
        let err = Prompter::new(Cursor::new(""), &mut out)
            .resolve(cli(Some("data.csv".into()), None, None))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_prompted_delimiter() {
        let mut out = Vec::new();
        let delimiter = Prompter::new(Cursor::new(";\n"), &mut out)
            .ask_delimiter()
            .unwrap();
        assert_eq!(delimiter.as_deref(), Some(";"));
    }

    #[test]
    fn test_check_file_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            check_file(dir.path()),
            Err(Error::FileAccess { .. })
        ));
    }
}
