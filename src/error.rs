//! Error types for pagewright.
//!
//! Parsing and rendering never fail; every variant here belongs to the
//! I/O side of a build (fetching content, reading configuration, writing
//! pages).

use std::io;
use thiserror::Error;

/// Result type alias for pagewright operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building pages.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The content request could not be completed.
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// The content server answered with a non-success status.
    #[error("Fetching {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// The site configuration is missing, unreadable or inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error during rendering (HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// A page entry cannot be mapped to an output location.
    #[error("Invalid page: {0}")]
    InvalidPage(String),
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let url = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        match err.status() {
            Some(status) => Error::HttpStatus {
                url,
                status: status.as_u16(),
            },
            None => Error::Fetch {
                url,
                message: err.to_string(),
            },
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::HttpStatus {
            url: "https://example.com/a.txt".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "Fetching https://example.com/a.txt returned HTTP 404"
        );

        let err = Error::Config("no pages defined".to_string());
        assert_eq!(err.to_string(), "Configuration error: no pages defined");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Table>("pages = [").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
