//! Parent directory of a path.

use crate::constants::{is_separator, ALT_SEPARATOR, CURRENT_DIR, SEPARATOR};
use crate::parsers::get_drive;
use crate::types::DirnameOptions;

/// Return the directory part of `path`.
///
/// The last `\` is used as the boundary; `/` is only searched when the path
/// has no `\` at all. Separator runs right before the boundary are dropped.
/// With `no_drive` the drive specifier is cut from the front of the result.
pub fn dirname(path: &str, options: DirnameOptions) -> &str {
    let Some(last) = path.rfind(SEPARATOR).or_else(|| path.rfind(ALT_SEPARATOR)) else {
        if options.no_drive {
            return CURRENT_DIR;
        }
        return get_drive(path).unwrap_or(CURRENT_DIR);
    };

    let bytes = path.as_bytes();
    if last == 1 && is_separator(bytes[0]) {
        // Bare UNC root.
        return if options.no_drive { CURRENT_DIR } else { path };
    }

    let mut end = last + 1;
    while end > 0 && is_separator(bytes[end - 1]) {
        end -= 1;
    }

    let start = if options.no_drive {
        get_drive(path).map_or(0, str::len)
    } else {
        0
    };
    // The drive can reach past the boundary; nothing is left then.
    if start > end {
        return "";
    }
    &path[start..end]
}
