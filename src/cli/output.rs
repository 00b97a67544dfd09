use serde::Serialize;

/// Final line printed after a successful run without `--json`.
pub const DONE: &str = "Done.";

/// Format a result as minified JSON.
pub fn format_json<T: Serialize>(result: &T) -> String {
    serde_json::to_string(result).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
}

/// Format an error as JSON.
pub fn format_error(err: &dyn std::fmt::Display) -> String {
    serde_json::json!({ "error": err.to_string() }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{FileOutcome, RunSummary};

    #[test]
    fn format_json_minified() {
        let summary = RunSummary {
            directory: "in".into(),
            pdfs_found: 1,
            files: vec![FileOutcome {
                pdf: "a.pdf".into(),
                text: Some("a.txt".into()),
                outputs: vec!["bob.txt".into()],
                warnings: 0,
                error: None,
            }],
        };
        let json = format_json(&summary);
        assert!(!json.contains('\n'));
        assert!(json.contains("\"pdfs_found\":1"));
        assert!(json.contains("\"outputs\":[\"bob.txt\"]"));
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn format_error_produces_json() {
        let json = format_error(&"bad \"pattern\"");
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["error"], "bad \"pattern\"");
    }
}
