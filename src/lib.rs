//! Path grammar - parse, split, join and normalize drive-letter and UNC path strings.

pub mod builders;
pub mod config;
pub mod constants;
pub mod error;
pub mod grammar;
pub mod handlers;
pub mod parsers;
pub mod transformers;
pub mod types;

pub use config::{load_grammar_config, save_grammar_config};
pub use error::PathError;
pub use grammar::{grammar, install_grammar, join, normalize, split, PathGrammar};
pub use handlers::BatchPathHandler;
pub use parsers::{basename, dirname, drive_kind, get_drive, is_absolute, is_absolute_structural};
pub use transformers::{transform_format, transform_output};
pub use types::{
    Absoluteness, BatchEntry, DirnameOptions, DriveKind, GrammarConfig, Operation, OutputFormat,
    SplitPath,
};
