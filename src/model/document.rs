//! Document-level types.

use super::Section;
use serde::{Deserialize, Serialize};

/// A parsed content document.
///
/// Absent fields are empty strings, never errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Page heading
    pub h1: String,

    /// Meta description for the page head
    pub meta_description: String,

    /// Intro paragraph shown above the first section
    pub intro: String,

    /// Sections in source order
    pub sections: Vec<Section>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section to the end of the document.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Number of sections in the document.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of FAQ entries across all sections, answered or not.
    pub fn faq_count(&self) -> usize {
        self.sections.iter().map(|s| s.faqs.len()).sum()
    }

    /// Check if nothing was parsed at all.
    pub fn is_empty(&self) -> bool {
        self.h1.is_empty()
            && self.meta_description.is_empty()
            && self.intro.is_empty()
            && self.sections.is_empty()
    }

    /// The page heading, or `fallback` when the document has none.
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.h1.is_empty() {
            fallback
        } else {
            &self.h1
        }
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        let mut parts = Vec::new();
        if !self.h1.is_empty() {
            parts.push(self.h1.clone());
        }
        if !self.intro.is_empty() {
            parts.push(self.intro.clone());
        }
        parts.extend(self.sections.iter().map(|s| s.plain_text()));
        parts.join("\n\n")
    }
}
