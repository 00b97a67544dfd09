use std::path::PathBuf;

use serde::Serialize;

/// Directory scanned when none is given.
pub const DEFAULT_DIRECTORY: &str = ".";
/// Prefix preceding the captured output name, e.g. `Part 3. John Smith`.
pub const DEFAULT_CAPTURE_PREFIX: &str = r"part [\d]*. ";
/// Whole-line delimiter that closes the current output file.
pub const DEFAULT_DELIMITER: &str = "(payment|salary)";

/// Terminator written after every output line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    #[value(name = "crlf")]
    CrLf,
}

impl LineEnding {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Settings for one split run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory containing the PDF files; outputs are written next to them.
    pub directory: PathBuf,
    /// Regex matched at line start; the rest of the line names the output file.
    pub capture_prefix: String,
    /// Regex matched against the whole line to split on.
    pub delimiter: String,
    pub line_ending: LineEnding,
    /// Process PDFs in file-name order instead of directory order.
    pub sort: bool,
    /// Record per-file failures and continue instead of aborting the run.
    pub keep_going: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_DIRECTORY)
    }
}

impl Config {
    /// Create config for a directory with the default patterns.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            capture_prefix: DEFAULT_CAPTURE_PREFIX.into(),
            delimiter: DEFAULT_DELIMITER.into(),
            line_ending: LineEnding::default(),
            sort: false,
            keep_going: false,
        }
    }

    #[must_use]
    pub fn with_patterns(mut self, capture_prefix: impl Into<String>, delimiter: impl Into<String>) -> Self {
        self.capture_prefix = capture_prefix.into();
        self.delimiter = delimiter.into();
        self
    }

    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    #[must_use]
    pub fn sorted(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    #[must_use]
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }
}
