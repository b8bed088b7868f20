//! Rendering module for converting documents to HTML and JSON.

mod escape;
mod html;
mod json;
mod options;
mod result;

pub use escape::{escape_html, push_escaped};
pub use html::{render_section, to_html, to_html_with_stats, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use result::{RenderResult, RenderStats};
