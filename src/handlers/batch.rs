//! Apply one grammar operation to every line of a path-list file.

use serde_json::Value;
use std::path::Path;
use tokio::fs;

use crate::grammar::PathGrammar;
use crate::transformers::transform_output;
use crate::types::{BatchEntry, DirnameOptions, Operation, OutputFormat};

pub struct BatchPathHandler {
    grammar: PathGrammar,
}

impl BatchPathHandler {
    pub fn new(grammar: PathGrammar) -> Self {
        Self { grammar }
    }

    /// Run `operation` over the file and return the serialized report.
    ///
    /// Blank lines and lines starting with `#` are skipped. Returns `None`
    /// when `file_path` is not a file.
    pub async fn process(
        &self,
        file_path: &str,
        operation: Operation,
        format: OutputFormat,
    ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
        if !self.validate_file(file_path).await? {
            return Ok(None);
        }

        log::debug!("Parsing path list: {}", file_path);
        let content = fs::read_to_string(file_path).await?;
        let entries: Vec<BatchEntry> = content
            .lines()
            .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
            .map(|line| self.apply(line, operation))
            .collect();

        Ok(Some(transform_output(format, &entries)))
    }

    /// Like [`process`](Self::process), but writes the report next to the
    /// input as `<stem>.report.<ext>` and returns where it went.
    pub async fn write_report(
        &self,
        file_path: &str,
        operation: Operation,
        format: OutputFormat,
    ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
        let Some(report) = self.process(file_path, operation, format).await? else {
            return Ok(None);
        };
        let output_path = self.get_output_path(file_path, format);
        fs::write(&output_path, report).await?;
        log::debug!("Wrote path report: {}", output_path);
        Ok(Some(output_path))
    }

    /// Apply `operation` to a single path.
    pub fn apply(&self, path: &str, operation: Operation) -> BatchEntry {
        let output = match operation {
            Operation::Drive => Value::from(self.grammar.get_drive(path)),
            Operation::IsAbsolute => Value::from(self.grammar.is_absolute(path)),
            Operation::Basename => Value::from(self.grammar.basename(path)),
            Operation::Dirname { no_drive } => {
                Value::from(self.grammar.dirname(path, DirnameOptions { no_drive }))
            }
            Operation::Normalize => match self.grammar.normalize(path) {
                Ok(normalized) => Value::from(normalized),
                Err(e) => {
                    log::warn!("Skipping {}: {}", path, e);
                    return BatchEntry {
                        input: path.to_string(),
                        output: None,
                        error: Some(e.to_string()),
                    };
                }
            },
            Operation::Split => {
                serde_json::to_value(self.grammar.split(path)).unwrap_or(Value::Null)
            }
        };
        BatchEntry {
            input: path.to_string(),
            output: Some(output),
            error: None,
        }
    }

    async fn validate_file(
        &self,
        path: &str,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let meta = fs::metadata(path).await?;
        if !meta.is_file() {
            log::error!("The provided path list is not a file: {}", path);
            return Ok(false);
        }
        Ok(true)
    }

    fn get_output_path(&self, file_path: &str, format: OutputFormat) -> String {
        let path = Path::new(file_path);
        let parent = path.parent().unwrap_or(Path::new("."));
        let stem = path.file_stem().and_then(|n| n.to_str()).unwrap_or("paths");
        let ext = match format {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        };
        parent
            .join(format!("{}.report.{}", stem, ext))
            .to_string_lossy()
            .to_string()
    }
}

impl Default for BatchPathHandler {
    fn default() -> Self {
        Self::new(PathGrammar::default())
    }
}
