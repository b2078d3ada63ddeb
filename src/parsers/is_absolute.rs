//! Absoluteness checks under both policies.

use crate::constants::{is_separator, DRIVE_TERMINATOR};
use crate::parsers::{drive_kind, get_drive};
use crate::types::{Absoluteness, DriveKind};

/// Legacy check: the byte right after the first `:` must be a separator.
/// Without a colon, the first byte must be one.
///
/// This does not consult [`get_drive`], so a UNC path containing a colon is
/// judged by what follows that colon.
pub fn is_absolute(path: &str) -> bool {
    let after_colon = path.find(DRIVE_TERMINATOR).map_or(0, |index| index + 1);
    path.as_bytes()
        .get(after_colon)
        .is_some_and(|b| is_separator(*b))
}

/// Structural check: a UNC root is absolute; otherwise a separator must
/// follow the drive, or open the path when there is no drive.
pub fn is_absolute_structural(path: &str) -> bool {
    let root = match get_drive(path) {
        Some(drive) if drive_kind(drive) == DriveKind::Unc => return true,
        Some(drive) => drive.len(),
        None => 0,
    };
    path.as_bytes().get(root).is_some_and(|b| is_separator(*b))
}

pub fn is_absolute_with(path: &str, absoluteness: Absoluteness) -> bool {
    match absoluteness {
        Absoluteness::LegacyColonBased => is_absolute(path),
        Absoluteness::Structural => is_absolute_structural(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_after_colon_is_absolute() {
        assert!(is_absolute(r"C:\x"));
        assert!(is_absolute("C:/x"));
        assert!(!is_absolute("C:x"));
        assert!(!is_absolute("C:"));
    }

    #[test]
    fn leading_separator_without_colon_is_absolute() {
        assert!(is_absolute(r"\x"));
        assert!(is_absolute(r"\\server\share"));
        assert!(!is_absolute("x"));
        assert!(!is_absolute(""));
    }

    #[test]
    fn legacy_check_misreads_unc_with_colon() {
        assert!(!is_absolute(r"\\host:1\share"));
        assert!(is_absolute_structural(r"\\host:1\share"));
    }

    #[test]
    fn structural_check_uses_the_drive() {
        assert!(is_absolute_structural(r"C:\x"));
        assert!(!is_absolute_structural("C:x"));
        assert!(is_absolute_structural(r"\\server"));
        assert!(is_absolute_structural("/x"));
        assert!(!is_absolute_structural("x/y"));
    }

    #[test]
    fn dispatches_on_policy() {
        let unc = r"\\host:1\share";
        assert!(!is_absolute_with(unc, Absoluteness::LegacyColonBased));
        assert!(is_absolute_with(unc, Absoluteness::Structural));
    }
}
