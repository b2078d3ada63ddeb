//! Decompose a path into drive, absoluteness and raw components.

use crate::constants::{ALT_SEPARATOR, SEPARATOR, SEPARATOR_STR};
use crate::parsers::{get_drive, is_absolute_with};
use crate::types::{Absoluteness, SplitPath};

/// Split `path` without normalizing it first.
pub fn split_path(path: &str, absoluteness: Absoluteness) -> SplitPath {
    let components = path
        .replace(ALT_SEPARATOR, SEPARATOR_STR)
        .split(SEPARATOR)
        .map(str::to_string)
        .collect();
    SplitPath {
        absolute: is_absolute_with(path, absoluteness),
        drive: get_drive(path).map(str::to_string),
        components,
    }
}
