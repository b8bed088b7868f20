//! Site assembly: turns a list of content documents into written pages.
//!
//! This layer owns everything around the core parse/render step: where
//! text comes from, the page template, related links and output paths.
//!
//! # Example
//!
//! ```no_run
//! use pagewright::site::{SiteBuilder, SiteConfig};
//!
//! fn main() -> pagewright::Result<()> {
//!     let config = SiteConfig::load_from_path("site.toml")?;
//!     let report = SiteBuilder::new(config)?.build();
//!     println!("{} written, {} skipped", report.written(), report.failed());
//!     Ok(())
//! }
//! ```

mod builder;
mod config;
mod source;
mod template;

pub use builder::{BuildReport, BuiltPage, PageOutcome, SiteBuilder};
pub use config::{PageSpec, SiteConfig, DEFAULT_BRAND, DEFAULT_CALL_TO_ACTION};
#[cfg(feature = "http")]
pub use source::HttpSource;
pub use source::{source_for, ContentSource, DirSource};
pub use template::{related_links, PageContext, PageTemplate};
