use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::Result;

/// Output key carrying the mirror issue number to later workflow steps.
pub const OUT_MIRROR_ISSUE_NUMBER: &str = "codeberg_issue_number";
/// Output key carrying the mirror issue URL to later workflow steps.
pub const OUT_MIRROR_ISSUE_URL: &str = "codeberg_issue_url";

/// Append-only key=value channel between pipeline steps.
///
/// Values are always recorded in memory; when a file path is configured
/// (the workflow runner's output file), each value is also appended there
/// as a `key=value` line.
#[derive(Debug, Default)]
pub struct PipelineOutput {
    path: Option<PathBuf>,
    values: Vec<(String, String)>,
}

impl PipelineOutput {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            values: Vec::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(crate::config::output_path_from_env())
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        if let Some(ref path) = self.path {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(file, "{}={}", key, value)?;
        }
        self.values.push((key.to_string(), value));
        Ok(())
    }

    /// Last value recorded under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn values(&self) -> &[(String, String)] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_recorded_in_order() {
        let mut output = PipelineOutput::new(None);
        output.set(OUT_MIRROR_ISSUE_NUMBER, "7").unwrap();
        output.set(OUT_MIRROR_ISSUE_URL, "https://example.tld/x").unwrap();

        assert_eq!(
            output.values(),
            &[
                (OUT_MIRROR_ISSUE_NUMBER.to_string(), "7".to_string()),
                (
                    OUT_MIRROR_ISSUE_URL.to_string(),
                    "https://example.tld/x".to_string()
                ),
            ]
        );
        assert_eq!(output.get(OUT_MIRROR_ISSUE_NUMBER), Some("7"));
        assert_eq!(output.get("unknown"), None);
    }

    #[test]
    fn test_appends_key_value_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output");

        let mut output = PipelineOutput::new(Some(path.clone()));
        output.set("codeberg_issue_number", "1").unwrap();
        output.set("codeberg_issue_url", "https://example.tld/1").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "codeberg_issue_number=1\ncodeberg_issue_url=https://example.tld/1\n"
        );
    }

    #[test]
    fn test_file_is_appended_not_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output");
        std::fs::write(&path, "earlier=value\n").unwrap();

        let mut output = PipelineOutput::new(Some(path.clone()));
        output.set("codeberg_issue_number", "1").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "earlier=value\ncodeberg_issue_number=1\n");
    }
}
