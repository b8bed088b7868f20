//! Page template with `{{name}}` placeholders.
//!
//! The template is configuration data. Values are inserted verbatim, so
//! callers escape plain text before putting it into a [`PageContext`].

use regex::{Captures, Regex};
use std::path::Path;

use crate::error::{Error, Result};
use crate::render::escape_html;

use super::SiteConfig;

const DEFAULT_TEMPLATE: &str = include_str!("default_template.html");

/// Values substituted into a page template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    /// `{{title}}`, escaped
    pub title: String,
    /// `{{meta}}`, escaped
    pub meta: String,
    /// `{{canonical}}`, escaped
    pub canonical: String,
    /// `{{h1}}`, escaped
    pub h1: String,
    /// `{{brand}}`, escaped
    pub brand: String,
    /// `{{body}}`, HTML
    pub body: String,
    /// `{{related}}`, HTML list items
    pub related: String,
}

impl PageContext {
    fn value(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(&self.title),
            "meta" => Some(&self.meta),
            "canonical" => Some(&self.canonical),
            "h1" => Some(&self.h1),
            "brand" => Some(&self.brand),
            "body" => Some(&self.body),
            "related" => Some(&self.related),
            _ => None,
        }
    }
}

/// A full-page HTML template.
#[derive(Debug, Clone)]
pub struct PageTemplate {
    source: String,
    placeholder: Regex,
}

impl PageTemplate {
    /// Create a template from its source text.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            placeholder: Regex::new(r"\{\{\s*([a-z_]+)\s*\}\}").unwrap(),
        }
    }

    /// Load a template from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read template {}: {}", path.display(), e))
        })?;
        Ok(Self::new(source))
    }

    /// Template configured for a site, or the built-in one.
    pub fn for_site(config: &SiteConfig) -> Result<Self> {
        match config.template {
            Some(ref path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Template source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Fill in placeholders. Unknown placeholders are left untouched.
    pub fn render(&self, ctx: &PageContext) -> String {
        self.placeholder
            .replace_all(&self.source, |caps: &Captures| {
                ctx.value(&caps[1])
                    .map(str::to_string)
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

impl Default for PageTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

/// Related-page list items, labels looked up in the site config.
pub fn related_links(config: &SiteConfig, related: &[String]) -> String {
    related
        .iter()
        .map(|path| {
            format!(
                "<li><a href=\"{}\">{}</a></li>",
                escape_html(path),
                escape_html(config.label_for(path))
            )
        })
        .collect()
}
