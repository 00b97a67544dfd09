use std::path::PathBuf;

use ignore::WalkBuilder;

use crate::error::Result;

/// Suffix a directory entry must end with to be processed.
pub const PDF_SUFFIX: &str = ".pdf";

/// Flat, non-recursive lister of the PDF files in one directory.
pub struct Scanner {
    root: PathBuf,
    sort: bool,
}

impl Scanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sort: false,
        }
    }

    /// Order results by file name instead of directory listing order.
    #[must_use]
    pub fn sorted(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// List regular files whose name ends with `.pdf` (case-sensitive).
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let mut builder = WalkBuilder::new(&self.root);
        builder
            .standard_filters(false) // every entry counts, hidden or ignored
            .max_depth(Some(1))
            .follow_links(false);
        if self.sort {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = entry?;
            if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            if is_pdf_name(&entry.file_name().to_string_lossy()) {
                files.push(entry.into_path());
            }
        }

        tracing::debug!(root = %self.root.display(), found = files.len(), "scanned for PDFs");
        Ok(files)
    }
}

/// Literal, case-sensitive `.pdf` suffix check.
#[must_use]
pub fn is_pdf_name(name: &str) -> bool {
    name.ends_with(PDF_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn file_names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn pdf_suffix_is_case_sensitive() {
        assert!(is_pdf_name("a.pdf"));
        assert!(is_pdf_name(".pdf"));
        assert!(!is_pdf_name("a.PDF"));
        assert!(!is_pdf_name("a.pdf.txt"));
        assert!(!is_pdf_name("pdf"));
    }

    #[test]
    fn scanner_finds_only_pdfs() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("one.pdf"), "x").unwrap();
        fs::write(tmp.path().join("two.PDF"), "x").unwrap();
        fs::write(tmp.path().join("notes.txt"), "x").unwrap();

        let files = Scanner::new(tmp.path()).scan().unwrap();
        assert_eq!(file_names(&files), vec!["one.pdf"]);
    }

    #[test]
    fn scanner_is_not_recursive_and_skips_directories() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("archive.pdf");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("inner.pdf"), "x").unwrap();
        fs::write(tmp.path().join("top.pdf"), "x").unwrap();

        let files = Scanner::new(tmp.path()).scan().unwrap();
        assert_eq!(file_names(&files), vec!["top.pdf"]);
    }

    #[test]
    fn scanner_includes_hidden_and_gitignored_files() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        fs::write(tmp.path().join(".gitignore"), "*.pdf").unwrap();
        fs::write(tmp.path().join(".hidden.pdf"), "x").unwrap();
        fs::write(tmp.path().join("visible.pdf"), "x").unwrap();

        let files = Scanner::new(tmp.path()).sorted(true).scan().unwrap();
        assert_eq!(file_names(&files), vec![".hidden.pdf", "visible.pdf"]);
    }

    #[test]
    fn sorted_scan_orders_by_name() {
        let tmp = TempDir::new().unwrap();
        for name in ["c.pdf", "a.pdf", "b.pdf"] {
            fs::write(tmp.path().join(name), "x").unwrap();
        }
        let files = Scanner::new(tmp.path()).sorted(true).scan().unwrap();
        assert_eq!(file_names(&files), vec!["a.pdf", "b.pdf", "c.pdf"]);
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(Scanner::new(tmp.path()).scan().unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let tmp = TempDir::new().unwrap();
        assert!(Scanner::new(tmp.path().join("nope")).scan().is_err());
    }
}
