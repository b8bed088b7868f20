//! # pagewright
//!
//! Build static landing pages from labelled plain-text content.
//!
//! Content documents use one label per line (`H1:`, `H2:`,
//! `Short answer:`, `- ` bullets and so on) after an
//! `ENHANCED BODY CONTENT:` marker. The parser turns that text into a
//! [`Document`] and the renderer turns each [`Section`] into an HTML
//! fragment. Neither step can fail: unknown or misplaced lines are
//! dropped and absent fields stay empty.
//!
//! ## Quick Start
//!
//! ```
//! use pagewright::{parse, render_section};
//!
//! let doc = parse("ENHANCED BODY CONTENT:\nH2: Fees\n- Is this free?\nAnswer: Yes.\n");
//! let html = render_section(&doc.sections[0]);
//! assert_eq!(
//!     html,
//!     "<h2>Fees</h2><div class=\"faq-item\"><h4>Is this free?</h4><p>Yes.</p></div>"
//! );
//! ```
//!
//! ## Features
//!
//! - **Lenient parsing**: a single forward scan, no error paths
//! - **Escaped output**: all content text is HTML-escaped
//! - **Site builds**: fetch over HTTP or read from disk, fill a page
//!   template, write `index.html` files (see [`site`])
//! - **Parallel builds**: pages are built concurrently with Rayon

pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod site;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Document, Faq, Section};
pub use parser::{ContentParser, LineKind, ParseOptions};
pub use render::{
    escape_html, render_section, HtmlRenderer, JsonFormat, RenderOptions, RenderResult,
    RenderStats,
};
pub use site::{BuildReport, PageSpec, SiteBuilder, SiteConfig};

use std::path::Path;

/// Parse labelled text into a document.
///
/// # Example
///
/// ```
/// let doc = pagewright::parse("ENHANCED BODY CONTENT:\nH1: Example Page\n");
/// assert_eq!(doc.h1, "Example Page");
/// ```
pub fn parse(raw: &str) -> Document {
    ContentParser::new().parse(raw)
}

/// Parse labelled text with custom options.
pub fn parse_with_options(raw: &str, options: ParseOptions) -> Document {
    ContentParser::with_options(options).parse(raw)
}

/// Read and parse a content file.
///
/// # Example
///
/// ```no_run
/// let doc = pagewright::parse_file("content/personal-injury.txt")?;
/// println!("{} sections", doc.section_count());
/// # Ok::<(), pagewright::Error>(())
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let raw = std::fs::read_to_string(path)?;
    Ok(parse(&raw))
}

/// Render a document body: intro, sections, then no call to action.
///
/// Use [`render::to_html`] with [`RenderOptions::with_call_to_action`] to
/// append one.
pub fn render_body(doc: &Document) -> String {
    render::to_html(doc, &RenderOptions::default())
}

/// Parse text and render its body in one step.
///
/// # Example
///
/// ```
/// use pagewright::{to_html, RenderOptions};
///
/// let html = to_html("ENHANCED BODY CONTENT:\nIntro: Hi.\n", &RenderOptions::default());
/// assert_eq!(html, "<p class=\"lead-text\">Hi.</p>");
/// ```
pub fn to_html(raw: &str, options: &RenderOptions) -> String {
    render::to_html(&parse(raw), options)
}

/// Parse text and dump the document as JSON.
pub fn to_json(raw: &str, format: JsonFormat) -> Result<String> {
    render::to_json(&parse(raw), format)
}
