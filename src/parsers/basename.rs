//! Final component of a path.

use crate::constants::{
    rfind_separator, starts_with_double_separator, ALT_SEPARATOR, DRIVE_TERMINATOR, SEPARATOR,
};

/// Return everything after the last separator (or drive colon).
///
/// A bare UNC root such as `\\server` has no final component and yields `""`.
pub fn basename(path: &str) -> &str {
    if starts_with_double_separator(path) {
        return match rfind_separator(path) {
            Some(index) if index > 1 => &path[index + 1..],
            _ => "",
        };
    }
    let last = [
        path.rfind(SEPARATOR),
        path.rfind(ALT_SEPARATOR),
        path.rfind(DRIVE_TERMINATOR),
    ]
    .into_iter()
    .flatten()
    .max();
    match last {
        Some(index) => &path[index + 1..],
        None => path,
    }
}
