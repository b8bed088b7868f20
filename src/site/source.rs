//! Content sources: where raw text documents come from.

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::{Error, Result};

use super::SiteConfig;

/// A place content documents can be read from.
///
/// Implement this trait to pull documents from somewhere other than the
/// built-in HTTP and directory sources.
pub trait ContentSource: Send + Sync {
    /// Short name used in log output.
    fn name(&self) -> &str;

    /// Human-readable location of a file, e.g. a URL or a path.
    fn location(&self, file: &str) -> String;

    /// Retrieve the raw text of a document.
    fn fetch(&self, file: &str) -> Result<String>;
}

/// Pick a source for the configured content base.
///
/// `http://` and `https://` bases are fetched over the network, anything
/// else is treated as a local directory.
pub fn source_for(config: &SiteConfig) -> Result<Arc<dyn ContentSource>> {
    let base = config.content_base.trim();
    if base.is_empty() {
        return Err(Error::Config("content_base is empty".to_string()));
    }

    if base.starts_with("http://") || base.starts_with("https://") {
        http_source(base, &config.content_dir)
    } else {
        let mut root = PathBuf::from(base);
        if !config.content_dir.is_empty() {
            root.push(&config.content_dir);
        }
        Ok(Arc::new(DirSource::new(root)))
    }
}

#[cfg(feature = "http")]
fn http_source(base: &str, content_dir: &str) -> Result<Arc<dyn ContentSource>> {
    Ok(Arc::new(HttpSource::new(base, content_dir)?))
}

#[cfg(not(feature = "http"))]
fn http_source(base: &str, _content_dir: &str) -> Result<Arc<dyn ContentSource>> {
    Err(Error::Config(format!(
        "{} is a URL but pagewright was built without the `http` feature",
        base
    )))
}

/// Reads documents from a local directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    /// Create a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ContentSource for DirSource {
    fn name(&self) -> &str {
        "dir"
    }

    fn location(&self, file: &str) -> String {
        self.root.join(file).display().to_string()
    }

    fn fetch(&self, file: &str) -> Result<String> {
        Ok(std::fs::read_to_string(self.root.join(file))?)
    }
}

/// Fetches documents over HTTP(S) with a blocking client.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl HttpSource {
    /// Create a source for `{base}/{content_dir}/{file}` URLs.
    pub fn new(base: &str, content_dir: &str) -> Result<Self> {
        let mut base_url = base.trim_end_matches('/').to_string();
        let dir = content_dir.trim_matches('/');
        if !dir.is_empty() {
            base_url.push('/');
            base_url.push_str(dir);
        }

        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("pagewright/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self { base_url, client })
    }
}

#[cfg(feature = "http")]
impl ContentSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    fn location(&self, file: &str) -> String {
        format!("{}/{}", self.base_url, file.trim_start_matches('/'))
    }

    fn fetch(&self, file: &str) -> Result<String> {
        let url = self.location(file);
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }
        Ok(response.text()?)
    }
}
