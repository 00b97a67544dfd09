use std::path::{Path, PathBuf};

use crate::error::{Result, SplitError};

/// Turns a PDF into a sibling UTF-8 text file.
pub trait TextExtractor {
    /// Extract `pdf_path` and return the path of the text file written.
    fn extract_text(&self, pdf_path: &Path) -> Result<PathBuf>;
}

/// `report.pdf` -> `report.txt` in the same directory.
#[must_use]
pub fn text_path_for(pdf_path: &Path) -> PathBuf {
    pdf_path.with_extension("txt")
}

/// Extractor backed by the `pdf-extract` crate.
pub struct PdfTextExtractor;

impl Default for PdfTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfTextExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Extract the text of a PDF held in memory.
    pub fn extract_from_mem(&self, bytes: &[u8], path: &Path) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| SplitError::Extraction {
            path: path.display().to_string(),
            detail: e.to_string(),
        })
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, pdf_path: &Path) -> Result<PathBuf> {
        let bytes = std::fs::read(pdf_path)?;
        let text = self.extract_from_mem(&bytes, pdf_path)?;
        let text_path = text_path_for(pdf_path);
        tracing::debug!(
            pdf = %pdf_path.display(),
            chars = text.len(),
            "extracted text"
        );
        std::fs::write(&text_path, text).map_err(|e| SplitError::Write {
            path: text_path.display().to_string(),
            source: e,
        })?;
        Ok(text_path)
    }
}
