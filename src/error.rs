use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("text file not found: {path}")]
    SourceNotFound { path: String },

    #[error("cannot write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("text extraction failed for {path}: {detail}")]
    Extraction { path: String, detail: String },

    #[error("cannot list directory: {0}")]
    Scan(#[from] ignore::Error),
}

pub type Result<T> = std::result::Result<T, SplitError>;
