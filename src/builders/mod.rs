mod join_paths;
mod normalize_path;

pub use join_paths::join_paths;
pub use normalize_path::normalize_path;
