//! Type definitions shared across the grammar, handlers and CLI.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Read-only decomposition of a path produced by `split`.
///
/// Components are taken verbatim after separator unification; empty segments
/// (from leading, doubled or trailing separators) are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitPath {
    pub absolute: bool,
    pub drive: Option<String>,
    pub components: Vec<String>,
}

/// Options for `dirname`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirnameOptions {
    /// Drop the drive specifier from the result.
    pub no_drive: bool,
}

impl DirnameOptions {
    pub fn no_drive() -> Self {
        Self { no_drive: true }
    }
}

/// The two shapes a drive specifier can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DriveKind {
    /// `X:`
    Letter,
    /// `\\server` or `//server`
    Unc,
}

/// How a path is judged absolute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Absoluteness {
    /// Separator right after the first `:` (or at index 0 without one).
    /// UNC paths without a colon only qualify through their leading separator.
    #[default]
    LegacyColonBased,
    /// UNC roots are absolute; otherwise a separator must follow the drive,
    /// or open the path when there is no drive.
    Structural,
}

/// Serialization target for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("unsupported output format \"{}\"", other)),
        }
    }
}

/// Grammar operation applied per line by the batch handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Drive,
    IsAbsolute,
    Basename,
    Dirname { no_drive: bool },
    Normalize,
    Split,
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drive" => Ok(Self::Drive),
            "is-absolute" => Ok(Self::IsAbsolute),
            "basename" => Ok(Self::Basename),
            "dirname" => Ok(Self::Dirname { no_drive: false }),
            "dirname-no-drive" => Ok(Self::Dirname { no_drive: true }),
            "normalize" => Ok(Self::Normalize),
            "split" => Ok(Self::Split),
            other => Err(format!("unknown operation \"{}\"", other)),
        }
    }
}

/// One line of a batch report. Exactly one of `output` and `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Contents of `.pathgrammar.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GrammarConfig {
    pub absoluteness: Absoluteness,
    pub format: OutputFormat,
}
