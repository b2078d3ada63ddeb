mod basename;
mod dirname;
mod get_drive;
mod is_absolute;
mod split_path;

pub use basename::basename;
pub use dirname::dirname;
pub use get_drive::{drive_kind, get_drive};
pub use is_absolute::{is_absolute, is_absolute_structural, is_absolute_with};
pub use split_path::split_path;
