//! Collapse `.`, `..` and redundant separators.

use crate::constants::{ALT_SEPARATOR, CURRENT_DIR, PARENT_DIR, SEPARATOR, SEPARATOR_STR};
use crate::error::PathError;
use crate::parsers::{get_drive, is_absolute_with};
use crate::types::Absoluteness;

/// Normalize `path` lexically.
///
/// Only the first `/` is rewritten to `\` before splitting, so later forward
/// slashes stay inside their segment. Leading `..` are kept on relative
/// paths and rejected on absolute ones.
pub fn normalize_path(path: &str, absoluteness: Absoluteness) -> Result<String, PathError> {
    let drive = get_drive(path).unwrap_or("");
    let rest = &path[drive.len()..];
    let absolute = is_absolute_with(rest, absoluteness);
    let rest = rest.replacen(ALT_SEPARATOR, SEPARATOR_STR, 1);

    let mut stack: Vec<&str> = Vec::new();
    for segment in rest.split(SEPARATOR) {
        match segment {
            "" | CURRENT_DIR => {}
            PARENT_DIR => {
                if stack.last().is_some_and(|last| *last != PARENT_DIR) {
                    stack.pop();
                } else if absolute {
                    return Err(PathError::IllFormed {
                        path: path.to_string(),
                    });
                } else {
                    stack.push(PARENT_DIR);
                }
            }
            other => stack.push(other),
        }
    }

    let mut normalized = drive.to_string();
    if absolute {
        normalized.push(SEPARATOR);
    }
    normalized.push_str(&stack.join(SEPARATOR_STR));
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(path: &str) -> Result<String, PathError> {
        normalize_path(path, Absoluteness::LegacyColonBased)
    }

    #[test]
    fn resolves_parent_under_drive() {
        assert_eq!(normalize(r"C:\a\..\b").unwrap(), r"C:\b");
    }

    #[test]
    fn accumulates_leading_parents_on_relative_paths() {
        assert_eq!(normalize(r"a\..\..\b").unwrap(), r"..\b");
        assert_eq!(normalize(r"..\..\a").unwrap(), r"..\..\a");
    }

    #[test]
    fn collapses_to_bare_root() {
        assert_eq!(normalize(r"\a\..").unwrap(), r"\");
        assert_eq!(normalize(r"\").unwrap(), r"\");
    }

    #[test]
    fn skips_dots_and_empty_segments() {
        assert_eq!(normalize(r"a\.\b\\c\").unwrap(), r"a\b\c");
        assert_eq!(normalize(".").unwrap(), "");
        assert_eq!(normalize("").unwrap(), "");
    }

    #[test]
    fn rejects_climbing_above_root() {
        assert_eq!(
            normalize(r"\.."),
            Err(PathError::IllFormed {
                path: r"\..".to_string()
            })
        );
        assert!(normalize(r"C:\a\..\..\x").is_err());
    }

    #[test]
    fn keeps_unc_drive() {
        assert_eq!(
            normalize(r"\\server\share\..\x").unwrap(),
            r"\\server\x"
        );
    }

    #[test]
    fn relative_drive_path_stays_relative() {
        assert_eq!(normalize(r"C:a\..\..\b").unwrap(), r"C:..\b");
        assert_eq!(normalize("C:").unwrap(), "C:");
    }

    #[test]
    fn only_first_forward_slash_is_rewritten() {
        assert_eq!(normalize("a/b/c").unwrap(), r"a\b/c");
        assert_eq!(normalize("/a/b").unwrap(), r"\a/b");
    }
}
