//! Pick a serializer by format.

use serde::Serialize;

use crate::transformers::{transform_to_json, transform_to_yaml};
use crate::types::OutputFormat;

/// Serialize `value` in the given format.
pub fn transform_output<T: Serialize + ?Sized>(format: OutputFormat, value: &T) -> String {
    match format {
        OutputFormat::Json => transform_to_json(value),
        OutputFormat::Yaml => transform_to_yaml(value),
    }
}

/// Serialize `value` in the named format.
/// Returns None if the format is not supported.
pub fn transform_format<T: Serialize + ?Sized>(format: &str, value: &T) -> Option<String> {
    let format = format.parse::<OutputFormat>().ok()?;
    Some(transform_output(format, value))
}
