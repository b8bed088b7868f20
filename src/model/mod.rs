//! Document model for labelled content.
//!
//! This module defines the tree the parser produces and the renderer
//! consumes. A [`Document`] is built fresh for each input text and is not
//! mutated once parsing has finished.

mod document;
mod section;

pub use document::Document;
pub use section::{Faq, Section};
