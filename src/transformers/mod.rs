mod get_transformer;
mod transformers;

pub use get_transformer::{transform_format, transform_output};
pub use transformers::{transform_to_json, transform_to_yaml};
