//! Rendering options and configuration.

/// Options for rendering documents to HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Raw HTML appended after the last section of the body.
    ///
    /// Inserted verbatim; it is trusted configuration, not content.
    pub call_to_action: Option<String>,

    /// Collect rendering statistics
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the call-to-action fragment.
    pub fn with_call_to_action(mut self, html: impl Into<String>) -> Self {
        self.call_to_action = Some(html.into());
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}
