//! Site configuration.
//!
//! The page list, link labels and call-to-action are plain data loaded
//! from TOML. None of it reaches the parser or the section renderer.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Brand used when the configuration does not name one.
pub const DEFAULT_BRAND: &str = "Insider Accident Lawyers";

/// Default call to action appended after the last section.
pub const DEFAULT_CALL_TO_ACTION: &str = "<p style=\"margin-top:32px\">\
<a href=\"/#case-evaluation\" class=\"btn-primary\">Get My Free Case Review</a> \
<a href=\"tel:844-467-4335\" class=\"btn-secondary\" data-callrail-phone=\"844-467-4335\">Call 844-467-4335</a></p>";

/// Configuration for a site build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Where content documents come from: an `http(s)://` URL or a directory
    pub content_base: String,

    /// Subdirectory of `content_base` holding the text files
    pub content_dir: String,

    /// Public origin used for canonical links, without trailing slash
    pub site_url: String,

    /// Directory the pages are written to
    pub output_dir: PathBuf,

    /// Brand name shown in titles and the footer
    pub brand: String,

    /// Raw HTML appended to every page body
    pub call_to_action: String,

    /// Optional page template; the built-in one is used when absent
    pub template: Option<PathBuf>,

    /// Build pages in parallel
    pub parallel: bool,

    /// Display labels for related links, keyed by page path
    pub labels: BTreeMap<String, String>,

    /// Pages to build, in order
    pub pages: Vec<PageSpec>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_base: "content".to_string(),
            content_dir: String::new(),
            site_url: String::new(),
            output_dir: PathBuf::from("public"),
            brand: DEFAULT_BRAND.to_string(),
            call_to_action: DEFAULT_CALL_TO_ACTION.to_string(),
            template: None,
            parallel: true,
            labels: BTreeMap::new(),
            pages: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Load and validate a configuration file.
    ///
    /// A relative `template` path is resolved against the config file's
    /// directory.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let mut config = Self::from_toml_str(&content)?;

        if let (Some(template), Some(dir)) = (config.template.as_ref(), path.parent()) {
            if template.is_relative() {
                config.template = Some(dir.join(template));
            }
        }

        Ok(config)
    }

    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check page entries for problems that would break a build.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for page in &self.pages {
            if page.file.trim().is_empty() {
                return Err(Error::Config(format!(
                    "page {} has no content file",
                    page.path
                )));
            }
            page.relative_dir()?;
            if !seen.insert(page.path.as_str()) {
                return Err(Error::Config(format!("duplicate page path {}", page.path)));
            }
        }
        Ok(())
    }

    /// Display label for a page path, falling back to the path itself.
    pub fn label_for<'a>(&'a self, path: &'a str) -> &'a str {
        self.labels.get(path).map(String::as_str).unwrap_or(path)
    }

    /// Canonical URL of a page.
    pub fn canonical_url(&self, page: &PageSpec) -> String {
        format!("{}{}", self.site_url.trim_end_matches('/'), page.path)
    }
}

/// One page of the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    /// Public path, e.g. `/personal-injury/auto-accidents`
    pub path: String,

    /// Content file name under the content location
    pub file: String,

    /// Paths listed under "Related Pages"
    #[serde(default)]
    pub related: Vec<String>,
}

impl PageSpec {
    /// Create a page entry.
    pub fn new(path: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            file: file.into(),
            related: Vec::new(),
        }
    }

    /// Set related page paths.
    pub fn with_related<I, S>(mut self, related: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related = related.into_iter().map(Into::into).collect();
        self
    }

    /// Title derived from the last path segment, dashes as spaces.
    pub fn slug_title(&self) -> String {
        self.path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .replace('-', " ")
    }

    /// Directory of the page relative to the output root.
    ///
    /// Rejects paths that do not start with `/` or that would escape the
    /// output directory.
    pub fn relative_dir(&self) -> Result<PathBuf> {
        let rest = self
            .path
            .strip_prefix('/')
            .ok_or_else(|| Error::InvalidPage(format!("{} must start with '/'", self.path)))?;

        let relative = PathBuf::from(rest);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if escapes {
            return Err(Error::InvalidPage(format!(
                "{} must not contain '..' segments",
                self.path
            )));
        }
        Ok(relative)
    }

    /// Location of the page's `index.html` under `output_dir`.
    pub fn output_path(&self, output_dir: &Path) -> Result<PathBuf> {
        Ok(output_dir.join(self.relative_dir()?).join("index.html"))
    }
}
