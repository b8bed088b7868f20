//! Site build: fetch, parse, render and write every configured page.
//!
//! A page that fails to fetch or write is logged and skipped; the rest of
//! the build carries on.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Document;
use crate::parser::{ContentParser, ParseOptions};
use crate::render::{escape_html, to_html_with_stats, RenderOptions, RenderStats};

use super::source::{source_for, ContentSource};
use super::template::{related_links, PageContext, PageTemplate};
use super::{PageSpec, SiteConfig};

/// A fully assembled page that has not been written yet.
#[derive(Debug, Clone)]
pub struct BuiltPage {
    /// Public path of the page
    pub path: String,
    /// Complete HTML document
    pub html: String,
    /// Statistics from rendering the body
    pub stats: RenderStats,
}

/// What happened to one page during a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PageOutcome {
    /// The page was written to `output`
    Written {
        path: String,
        output: PathBuf,
        stats: RenderStats,
    },
    /// The page was skipped because of `error`
    Skipped { path: String, error: String },
}

impl PageOutcome {
    /// Public path of the page.
    pub fn path(&self) -> &str {
        match self {
            PageOutcome::Written { path, .. } | PageOutcome::Skipped { path, .. } => path,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, PageOutcome::Written { .. })
    }
}

/// Summary of a site build, in page-list order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub pages: Vec<PageOutcome>,
}

impl BuildReport {
    /// Number of pages written.
    pub fn written(&self) -> usize {
        self.pages.iter().filter(|p| p.is_written()).count()
    }

    /// Number of pages skipped.
    pub fn failed(&self) -> usize {
        self.pages.len() - self.written()
    }

    /// Rendering statistics summed over all written pages.
    pub fn total_stats(&self) -> RenderStats {
        let mut total = RenderStats::new();
        for page in &self.pages {
            if let PageOutcome::Written { stats, .. } = page {
                total.merge(stats);
            }
        }
        total
    }
}

/// Builds the pages described by a [`SiteConfig`].
pub struct SiteBuilder {
    config: SiteConfig,
    source: Arc<dyn ContentSource>,
    template: PageTemplate,
    parser: ContentParser,
    render_options: RenderOptions,
}

impl SiteBuilder {
    /// Create a builder using the configured content source and template.
    pub fn new(config: SiteConfig) -> Result<Self> {
        let source = source_for(&config)?;
        let template = PageTemplate::for_site(&config)?;
        Ok(Self::with_source(config, source).with_template(template))
    }

    /// Create a builder reading content from `source`.
    pub fn with_source(config: SiteConfig, source: Arc<dyn ContentSource>) -> Self {
        let render_options = RenderOptions::new().with_call_to_action(&config.call_to_action);
        Self {
            config,
            source,
            template: PageTemplate::default(),
            parser: ContentParser::new(),
            render_options,
        }
    }

    /// Use a different page template.
    pub fn with_template(mut self, template: PageTemplate) -> Self {
        self.template = template;
        self
    }

    /// Use custom parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parser = ContentParser::with_options(options);
        self
    }

    /// Build pages one after another.
    pub fn sequential(mut self) -> Self {
        self.config.parallel = false;
        self
    }

    /// The configuration this builder was created with.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Build every page and write it to the output directory.
    pub fn build(&self) -> BuildReport {
        self.build_with_progress(|_| {})
    }

    /// Build every page, calling `on_page` as each one finishes.
    ///
    /// With parallel builds `on_page` is called from worker threads in
    /// completion order; the report is always in page-list order.
    pub fn build_with_progress<F>(&self, on_page: F) -> BuildReport
    where
        F: Fn(&PageOutcome) + Sync,
    {
        let started_at = Utc::now();
        log::info!(
            "Building {} pages from {} source",
            self.config.pages.len(),
            self.source.name()
        );

        let run = |page: &PageSpec| {
            let outcome = self.build_one(page);
            on_page(&outcome);
            outcome
        };

        let pages: Vec<PageOutcome> = if self.config.parallel {
            self.config.pages.par_iter().map(run).collect()
        } else {
            self.config.pages.iter().map(run).collect()
        };

        BuildReport {
            started_at,
            finished_at: Utc::now(),
            pages,
        }
    }

    fn build_one(&self, page: &PageSpec) -> PageOutcome {
        match self.build_and_write(page) {
            Ok((output, stats)) => {
                log::info!("Wrote {}", output.display());
                PageOutcome::Written {
                    path: page.path.clone(),
                    output,
                    stats,
                }
            }
            Err(e) => {
                log::warn!("Skipping {}: {}", page.path, e);
                PageOutcome::Skipped {
                    path: page.path.clone(),
                    error: e.to_string(),
                }
            }
        }
    }

    fn build_and_write(&self, page: &PageSpec) -> Result<(PathBuf, RenderStats)> {
        let output = page.output_path(&self.config.output_dir)?;

        log::debug!("Fetching {}", self.source.location(&page.file));
        let raw = self.source.fetch(&page.file)?;
        let built = self.render_page(page, &raw);

        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&output, &built.html)?;
        Ok((output, built.stats))
    }

    /// Fetch and assemble one page without writing it.
    pub fn build_page(&self, page: &PageSpec) -> Result<BuiltPage> {
        let raw = self.source.fetch(&page.file)?;
        Ok(self.render_page(page, &raw))
    }

    /// Assemble a full page from raw content text.
    pub fn render_page(&self, page: &PageSpec, raw: &str) -> BuiltPage {
        let doc = self.parser.parse(raw);
        self.assemble(page, &doc)
    }

    fn assemble(&self, page: &PageSpec, doc: &Document) -> BuiltPage {
        let slug = page.slug_title();
        let fallback = if slug.is_empty() {
            self.config.brand.as_str()
        } else {
            slug.as_str()
        };
        let title = doc.title_or(fallback);
        let meta = if doc.meta_description.is_empty() {
            title
        } else {
            doc.meta_description.as_str()
        };

        let body = to_html_with_stats(doc, &self.render_options);
        let ctx = PageContext {
            title: escape_html(title),
            meta: escape_html(meta),
            canonical: escape_html(&self.config.canonical_url(page)),
            h1: escape_html(title),
            brand: escape_html(&self.config.brand),
            body: body.content,
            related: related_links(&self.config, &page.related),
        };

        BuiltPage {
            path: page.path.clone(),
            html: self.template.render(&ctx),
            stats: body.stats,
        }
    }
}
