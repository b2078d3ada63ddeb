//! Error type for grammar operations.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// `..` would climb above the root of an absolute path.
    #[error("path {path:?} is ill-formed: `..` climbs above its root")]
    IllFormed { path: String },
}
