//! Content parsing module.

mod content_parser;
mod line;
mod options;

pub use content_parser::ContentParser;
pub use line::LineKind;
pub use options::{ParseOptions, DEFAULT_BODY_MARKER};
