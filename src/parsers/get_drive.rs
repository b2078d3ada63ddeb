//! Extract the drive specifier (`X:` or UNC `\\server`) from a path.

use crate::constants::{is_separator, starts_with_double_separator, DRIVE_TERMINATOR};
use crate::types::DriveKind;

/// Return the drive specifier at the start of `path`, if any.
///
/// A path opening with two separators is UNC-style: its drive runs up to the
/// next separator, or is the whole path when there is none. A bare pair of
/// separators has no drive. Any other path has a letter drive ending at its
/// first `:`, unless that colon is missing or at index 0.
pub fn get_drive(path: &str) -> Option<&str> {
    if starts_with_double_separator(path) {
        if path.len() == 2 {
            return None;
        }
        return match path.as_bytes()[2..].iter().position(|b| is_separator(*b)) {
            Some(offset) => Some(&path[..offset + 2]),
            None => Some(path),
        };
    }
    match path.find(DRIVE_TERMINATOR) {
        None | Some(0) => None,
        Some(index) => Some(&path[..=index]),
    }
}

/// Classify a drive returned by [`get_drive`].
pub fn drive_kind(drive: &str) -> DriveKind {
    if starts_with_double_separator(drive) {
        DriveKind::Unc
    } else {
        DriveKind::Letter
    }
}
