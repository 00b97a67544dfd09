use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::LineEnding;
use crate::error::{Result, SplitError};
use crate::split::patterns::{output_file_name, SplitPatterns};

/// A delimiter that arrived again before a new capture line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MismatchWarning {
    /// 1-based line number in the source text.
    pub line_number: usize,
    /// Offending delimiter line, lowercased.
    pub line: String,
    pub capture: String,
    /// Name of the suffixed file that was opened for it.
    pub file: String,
}

/// Result of splitting one text file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SplitReport {
    /// Output files in creation order. A name repeats if a later capture overwrote it.
    pub files_written: Vec<PathBuf>,
    pub warnings: Vec<MismatchWarning>,
    pub lines_read: usize,
    /// Lines dropped because no capture named a file for them.
    pub lines_discarded: usize,
}

/// Split a text file into sibling files named by capture lines.
pub fn split_text_file(
    text_path: &Path,
    patterns: &SplitPatterns,
    line_ending: LineEnding,
) -> Result<SplitReport> {
    let file = File::open(text_path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => SplitError::SourceNotFound {
            path: text_path.display().to_string(),
        },
        _ => SplitError::Io(e),
    })?;
    let out_dir = text_path.parent().unwrap_or_else(|| Path::new("."));
    split_lines(BufReader::new(file), out_dir, patterns, line_ending)
}

/// Run the splitter over any line source, writing outputs into `out_dir`.
pub fn split_lines<R: BufRead>(
    reader: R,
    out_dir: &Path,
    patterns: &SplitPatterns,
    line_ending: LineEnding,
) -> Result<SplitReport> {
    let mut splitter = Splitter::new(out_dir, patterns, line_ending);
    for line in reader.lines() {
        splitter.feed(line?)?;
    }
    splitter.finish()
}

/// An open output file.
struct OutputFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl OutputFile {
    fn create(path: PathBuf) -> Result<Self> {
        let file = File::create(&path).map_err(|e| write_error(&path, e))?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    fn write_lines(&mut self, lines: &[String], ending: &str) -> Result<()> {
        for line in lines {
            self.writer
                .write_all(line.as_bytes())
                .and_then(|()| self.writer.write_all(ending.as_bytes()))
                .map_err(|e| write_error(&self.path, e))?;
        }
        Ok(())
    }

    /// Flush and release the handle, surfacing any buffered write error.
    fn close(mut self) -> Result<()> {
        self.writer.flush().map_err(|e| write_error(&self.path, e))
    }
}

fn write_error(path: &Path, source: std::io::Error) -> SplitError {
    SplitError::Write {
        path: path.display().to_string(),
        source,
    }
}

/// Line-at-a-time state machine: idle, buffering, then writing.
///
/// Lines accumulate in `pending` until a delimiter closes the segment. The
/// segment is then written to a file named by the current capture. Before
/// any capture exists, a delimiter drops the segment it closes.
struct Splitter<'a> {
    out_dir: &'a Path,
    patterns: &'a SplitPatterns,
    ending: &'static str,
    pending: Vec<String>,
    current: Option<OutputFile>,
    capture: Option<String>,
    mismatch: usize,
    report: SplitReport,
}

impl<'a> Splitter<'a> {
    fn new(out_dir: &'a Path, patterns: &'a SplitPatterns, line_ending: LineEnding) -> Self {
        Self {
            out_dir,
            patterns,
            ending: line_ending.as_str(),
            pending: Vec::new(),
            current: None,
            capture: None,
            mismatch: 0,
            report: SplitReport::default(),
        }
    }

    fn feed(&mut self, line: String) -> Result<()> {
        self.report.lines_read += 1;

        if let Some(name) = self.patterns.capture(&line) {
            self.capture = Some(name);
            self.mismatch = 0;
        }

        let is_delimiter = self.patterns.is_delimiter(&line);
        self.pending.push(line);

        if is_delimiter {
            self.rotate()?;
        }
        Ok(())
    }

    /// Close the pending segment into a freshly opened output file.
    fn rotate(&mut self) -> Result<()> {
        let Some(capture) = self.capture.clone() else {
            tracing::warn!(
                line = self.report.lines_read,
                discarded = self.pending.len(),
                "delimiter before any capture, discarding lines"
            );
            self.report.lines_discarded += self.pending.len();
            self.pending.clear();
            return Ok(());
        };

        let name = output_file_name(&capture, self.mismatch);
        if self.mismatch > 0 {
            let line = self
                .pending
                .last()
                .map(|l| l.to_lowercase())
                .unwrap_or_default();
            tracing::warn!("mismatched delimiter [{line}] for capture [{capture}]");
            self.report.warnings.push(MismatchWarning {
                line_number: self.report.lines_read,
                line,
                capture,
                file: name.clone(),
            });
        }

        if let Some(previous) = self.current.take() {
            previous.close()?;
        }

        tracing::info!("Writing: {name}");
        let mut output = OutputFile::create(self.out_dir.join(&name))?;
        output.write_lines(&self.pending, self.ending)?;
        self.pending.clear();
        self.report.files_written.push(output.path.clone());
        self.current = Some(output);
        self.mismatch += 1;
        Ok(())
    }

    fn finish(mut self) -> Result<SplitReport> {
        match self.current.take() {
            Some(mut last) => {
                last.write_lines(&self.pending, self.ending)?;
                last.close()?;
            }
            None => {
                if !self.pending.is_empty() {
                    tracing::debug!(
                        lines = self.pending.len(),
                        "no output file opened, discarding buffered lines"
                    );
                }
                self.report.lines_discarded += self.pending.len();
            }
        }
        Ok(self.report)
    }
}
