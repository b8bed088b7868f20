//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

/// Result of rendering a document body, including statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered HTML fragment
    pub content: String,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: RenderStats) -> Self {
        Self { content, stats }
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of sections rendered
    pub section_count: u32,

    /// Number of plain list items
    pub bullet_count: u32,

    /// Number of checkmark list items
    pub plus_bullet_count: u32,

    /// Number of insight paragraphs
    pub insight_count: u32,

    /// FAQs emitted with their answer
    pub faq_count: u32,

    /// FAQs left out because they had no answer
    pub skipped_faq_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &RenderStats) {
        self.section_count += other.section_count;
        self.bullet_count += other.bullet_count;
        self.plus_bullet_count += other.plus_bullet_count;
        self.insight_count += other.insight_count;
        self.faq_count += other.faq_count;
        self.skipped_faq_count += other.skipped_faq_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_stats_merge() {
        let mut stats1 = RenderStats {
            section_count: 2,
            faq_count: 1,
            ..Default::default()
        };
        let stats2 = RenderStats {
            section_count: 3,
            skipped_faq_count: 4,
            ..Default::default()
        };

        stats1.merge(&stats2);

        assert_eq!(stats1.section_count, 5);
        assert_eq!(stats1.faq_count, 1);
        assert_eq!(stats1.skipped_faq_count, 4);
    }
}
