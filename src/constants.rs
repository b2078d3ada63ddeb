//! Characters that make up the path grammar.

/// Canonical separator written on output.
pub const SEPARATOR: char = '\\';
pub const SEPARATOR_STR: &str = "\\";

/// Alternate separator accepted on input.
pub const ALT_SEPARATOR: char = '/';

/// Terminates a letter-drive specifier (`C:`).
pub const DRIVE_TERMINATOR: char = ':';

pub const CURRENT_DIR: &str = ".";
pub const PARENT_DIR: &str = "..";

/// Name of the per-directory configuration file.
pub const CONFIG_FILE_NAME: &str = ".pathgrammar.json";

/// Whether `byte` is either accepted separator.
pub fn is_separator(byte: u8) -> bool {
    byte == SEPARATOR as u8 || byte == ALT_SEPARATOR as u8
}

/// Whether `path` opens with two separators, in any combination.
pub fn starts_with_double_separator(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && is_separator(bytes[0]) && is_separator(bytes[1])
}

/// Index of the last byte that is either separator.
pub fn rfind_separator(path: &str) -> Option<usize> {
    path.bytes().rposition(is_separator)
}
