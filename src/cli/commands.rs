use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, LineEnding, DEFAULT_CAPTURE_PREFIX, DEFAULT_DELIMITER, DEFAULT_DIRECTORY};

#[derive(Parser, Debug)]
#[command(
    name = "pdfsplit",
    version,
    about = "Extract text from PDF files and split it into named text files",
    after_help = "Each `<name>.pdf` in DIRECTORY is extracted to `<name>.txt`. A line matching \
                  CAPTURE_PREFIX names the next output file from the rest of the line \
                  (lowercased, spaces become hyphens). A line matching DELIMITER closes the \
                  current output file. Set RUST_LOG to change log verbosity."
)]
pub struct Cli {
    /// Directory containing the PDF files (default: current directory)
    #[arg(default_value = DEFAULT_DIRECTORY)]
    pub directory: PathBuf,

    /// Regex for the text before the captured output name
    #[arg(default_value = DEFAULT_CAPTURE_PREFIX)]
    pub capture_prefix: String,

    /// Regex matching a whole delimiter line
    #[arg(default_value = DEFAULT_DELIMITER)]
    pub delimiter: String,

    /// Process PDFs in file-name order instead of directory order
    #[arg(long)]
    pub sort: bool,

    /// Record per-file failures and continue with the remaining PDFs
    #[arg(long)]
    pub keep_going: bool,

    /// Line terminator for output files
    #[arg(long, value_enum, default_value_t = LineEnding::Lf)]
    pub line_ending: LineEnding,

    /// Print a JSON run summary instead of "Done."
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Build the run configuration from parsed arguments.
    #[must_use]
    pub fn to_config(&self) -> Config {
        Config::new(&self.directory)
            .with_patterns(&self.capture_prefix, &self.delimiter)
            .with_line_ending(self.line_ending)
            .sorted(self.sort)
            .keep_going(self.keep_going)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_defaults() {
        let cli = Cli::parse_from(["pdfsplit"]);
        let cfg = cli.to_config();
        assert_eq!(cfg.directory, PathBuf::from("."));
        assert_eq!(cfg.capture_prefix, DEFAULT_CAPTURE_PREFIX);
        assert_eq!(cfg.delimiter, DEFAULT_DELIMITER);
        assert!(!cli.json);
    }

    #[test]
    fn positionals_and_flags() {
        let cli = Cli::parse_from([
            "pdfsplit",
            "/tmp/in",
            "chapter ",
            "end",
            "--sort",
            "--keep-going",
            "--line-ending",
            "crlf",
            "--json",
        ]);
        let cfg = cli.to_config();
        assert_eq!(cfg.directory, PathBuf::from("/tmp/in"));
        assert_eq!(cfg.capture_prefix, "chapter ");
        assert_eq!(cfg.delimiter, "end");
        assert!(cfg.sort);
        assert!(cfg.keep_going);
        assert_eq!(cfg.line_ending, LineEnding::CrLf);
        assert!(cli.json);
    }

    #[test]
    fn unknown_line_ending_is_rejected() {
        assert!(Cli::try_parse_from(["pdfsplit", "--line-ending", "cr"]).is_err());
    }
}
