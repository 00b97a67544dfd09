//! Line-oriented splitting of extracted text into named output files.
//!
//! A *capture* line names the files that follow it; a *delimiter* line
//! closes the current file. See [`splitter`] for the state machine.

pub mod patterns;
pub mod splitter;

pub use patterns::{normalize_capture, output_file_name, SplitPatterns};
pub use splitter::{split_lines, split_text_file, MismatchWarning, SplitReport};
