//! Join path fragments with the canonical separator.

use crate::constants::{ALT_SEPARATOR, SEPARATOR, SEPARATOR_STR};
use crate::parsers::{get_drive, is_absolute_with};
use crate::types::Absoluteness;

fn trim_separators(path: &str) -> &str {
    path.trim_matches(|c: char| c == SEPARATOR || c == ALT_SEPARATOR)
}

/// Fold `paths` left to right into one path.
///
/// A fragment carrying a drive replaces the root and restarts the
/// components; an absolute fragment without a drive restarts the components
/// but keeps the root; anything else is appended. Each fragment loses its
/// leading and trailing separators, interior ones are left alone.
pub fn join_paths<I, S>(paths: I, absoluteness: Absoluteness) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut components: Vec<String> = Vec::new();
    let mut root: Option<String> = None;
    let mut absolute = false;

    for subpath in paths {
        let subpath = subpath.as_ref();
        if let Some(drive) = get_drive(subpath) {
            let rest = trim_separators(&subpath[drive.len()..]);
            components = if rest.is_empty() {
                Vec::new()
            } else {
                vec![rest.to_string()]
            };
            absolute = is_absolute_with(subpath, absoluteness);
            root = Some(drive.to_string());
        } else if is_absolute_with(subpath, absoluteness) {
            components = vec![trim_separators(subpath).to_string()];
            absolute = true;
        } else {
            components.push(trim_separators(subpath).to_string());
        }
    }

    let mut joined = root.unwrap_or_default();
    if absolute {
        joined.push(SEPARATOR);
    }
    joined.push_str(&components.join(SEPARATOR_STR));
    joined
}
