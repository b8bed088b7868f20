//! Parsing options and configuration.

/// Line that switches the parser into body mode.
pub const DEFAULT_BODY_MARKER: &str = "ENHANCED BODY CONTENT:";

/// Options for parsing content documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Sentinel prefix that starts body mode; lines before it are ignored
    pub body_marker: String,

    /// Treat `- ` bullets ending in `?` as FAQ questions
    pub detect_faqs: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the body mode sentinel.
    pub fn with_body_marker(mut self, marker: impl Into<String>) -> Self {
        self.body_marker = marker.into();
        self
    }

    /// Enable or disable FAQ detection on question bullets.
    pub fn with_faq_detection(mut self, detect: bool) -> Self {
        self.detect_faqs = detect;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            body_marker: DEFAULT_BODY_MARKER.to_string(),
            detect_faqs: true,
        }
    }
}
