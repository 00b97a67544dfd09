use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::ingest::pdf::TextExtractor;
use crate::ingest::scanner::Scanner;
use crate::split::{split_text_file, SplitPatterns, SplitReport};

/// Outcome for one PDF.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub pdf: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub outputs: Vec<String>,
    pub warnings: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Statistics from a split run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub directory: String,
    pub pdfs_found: usize,
    pub files: Vec<FileOutcome>,
}

impl RunSummary {
    #[must_use]
    pub fn failures(&self) -> usize {
        self.files.iter().filter(|f| f.error.is_some()).count()
    }

    #[must_use]
    pub fn outputs_written(&self) -> usize {
        self.files.iter().map(|f| f.outputs.len()).sum()
    }
}

/// Run the driver: scan for PDFs, extract each, then split its text.
///
/// Patterns are compiled before anything is scanned, so a bad expression
/// never touches the file system. The first per-file error aborts the run
/// unless `config.keep_going` is set.
pub fn run_split(config: &Config, extractor: &dyn TextExtractor) -> Result<RunSummary> {
    let patterns = SplitPatterns::compile(&config.capture_prefix, &config.delimiter)?;
    let pdfs = Scanner::new(&config.directory)
        .sorted(config.sort)
        .scan()?;

    let mut summary = RunSummary {
        directory: config.directory.display().to_string(),
        pdfs_found: pdfs.len(),
        files: Vec::with_capacity(pdfs.len()),
    };

    for pdf in &pdfs {
        let pdf_name = display_name(pdf);
        tracing::info!("Reading: {pdf_name}");

        match process_pdf(pdf, config, &patterns, extractor) {
            Ok((text_path, report)) => summary.files.push(FileOutcome {
                pdf: pdf_name,
                text: Some(display_name(&text_path)),
                outputs: report.files_written.iter().map(|p| display_name(p)).collect(),
                warnings: report.warnings.len(),
                error: None,
            }),
            Err(e) if config.keep_going => {
                tracing::error!(pdf = %pdf_name, "{e}");
                summary.files.push(FileOutcome {
                    pdf: pdf_name,
                    text: None,
                    outputs: Vec::new(),
                    warnings: 0,
                    error: Some(e.to_string()),
                });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(summary)
}

fn process_pdf(
    pdf: &Path,
    config: &Config,
    patterns: &SplitPatterns,
    extractor: &dyn TextExtractor,
) -> Result<(PathBuf, SplitReport)> {
    let text_path = extractor.extract_text(pdf)?;
    let report = split_text_file(&text_path, patterns, config.line_ending)?;
    Ok((text_path, report))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
