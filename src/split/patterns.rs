use regex::{Regex, RegexBuilder};

use crate::error::{Result, SplitError};

/// Compiled capture and delimiter rules.
///
/// Both are anchored to the whole line and case-insensitive with Unicode
/// simple case folding, so `ſ` matches `s`. The user's
/// expressions are wrapped in non-capturing groups so alternations stay
/// inside their anchors.
#[derive(Debug, Clone)]
pub struct SplitPatterns {
    capture: Regex,
    delimiter: Regex,
}

impl SplitPatterns {
    /// Compile `^(?:<capture_prefix>)(.*)$` and `^(?:<delimiter>)$`.
    pub fn compile(capture_prefix: &str, delimiter: &str) -> Result<Self> {
        let capture = build(&format!("^(?:{capture_prefix})(.*)$"), capture_prefix)?;
        let delimiter = build(&format!("^(?:{delimiter})$"), delimiter)?;
        Ok(Self { capture, delimiter })
    }

    /// Normalized output name if `line` is a capture line.
    ///
    /// The trailing `(.*)` is always the last group, so groups inside the
    /// user's prefix never shadow it.
    #[must_use]
    pub fn capture(&self, line: &str) -> Option<String> {
        let caps = self.capture.captures(line)?;
        let name = caps.get(caps.len() - 1).map_or("", |m| m.as_str());
        Some(normalize_capture(name))
    }

    #[must_use]
    pub fn is_delimiter(&self, line: &str) -> bool {
        self.delimiter.is_match(line)
    }
}

fn build(source: &str, original: &str) -> Result<Regex> {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .map_err(|e| SplitError::InvalidPattern {
            pattern: original.to_string(),
            source: e,
        })
}

/// Lowercase and replace spaces with hyphens.
#[must_use]
pub fn normalize_capture(raw: &str) -> String {
    raw.replace(' ', "-").to_lowercase()
}

/// `<capture>.txt` for the first delimiter, `<capture>-<n>.txt` after that.
#[must_use]
pub fn output_file_name(capture: &str, mismatch: usize) -> String {
    if mismatch == 0 {
        format!("{capture}.txt")
    } else {
        format!("{capture}-{mismatch}.txt")
    }
}
