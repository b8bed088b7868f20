//! HTML fragment rendering.
//!
//! Output is a fragment, not a full page. Empty fields produce no markup
//! at all, and every piece of content text goes through [`push_escaped`].

use crate::model::{Document, Section};

use super::escape::push_escaped;
use super::{RenderOptions, RenderResult, RenderStats};

/// Render one section to an HTML fragment.
pub fn render_section(section: &Section) -> String {
    let mut output = String::new();
    HtmlRenderer::new(RenderOptions::default()).render_section(&mut output, section);
    output
}

/// Render a document body: intro, every section, then the call to action.
pub fn to_html(doc: &Document, options: &RenderOptions) -> String {
    HtmlRenderer::new(options.clone()).render(doc)
}

/// Render a document body with statistics.
pub fn to_html_with_stats(doc: &Document, options: &RenderOptions) -> RenderResult {
    let mut options = options.clone();
    options.collect_stats = true;
    HtmlRenderer::new(options).render_with_stats(doc)
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
    stats: RenderStats,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: RenderStats::new(),
        }
    }

    /// Render a document body.
    pub fn render(mut self, doc: &Document) -> String {
        self.render_internal(doc)
    }

    /// Render a document body with statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> RenderResult {
        self.options.collect_stats = true;
        let content = self.render_internal(doc);
        RenderResult::new(content, self.stats)
    }

    fn render_internal(&mut self, doc: &Document) -> String {
        let mut output = String::new();

        if !doc.intro.is_empty() {
            push_element(&mut output, "<p class=\"lead-text\">", &doc.intro, "</p>");
        }

        for section in &doc.sections {
            self.render_section(&mut output, section);
        }

        if let Some(ref cta) = self.options.call_to_action {
            output.push_str(cta);
        }

        output
    }

    /// Append one section's markup to `output`.
    pub fn render_section(&mut self, output: &mut String, section: &Section) {
        if self.options.collect_stats {
            self.stats.section_count += 1;
        }

        if !section.heading.is_empty() {
            push_element(output, "<h2>", &section.heading, "</h2>");
        }
        if !section.short_answer.is_empty() {
            push_element(
                output,
                "<p class=\"lead-text\">",
                &section.short_answer,
                "</p>",
            );
        }
        if let Some(quote) = section.quote.as_deref().filter(|q| !q.is_empty()) {
            push_element(
                output,
                "<blockquote class=\"content-quote\">",
                quote,
                "</blockquote>",
            );
        }
        for insight in &section.insights {
            push_element(output, "<p class=\"book-insight\">", insight, "</p>");
        }
        for sub in &section.subheadings {
            push_element(output, "<h3>", sub, "</h3>");
        }

        self.render_list(output, "<ul>", &section.bullets);
        self.render_list(output, "<ul class=\"plus-list\">", &section.plus_bullets);

        for faq in &section.faqs {
            if !faq.is_answered() {
                if self.options.collect_stats {
                    self.stats.skipped_faq_count += 1;
                }
                continue;
            }
            if self.options.collect_stats {
                self.stats.faq_count += 1;
            }
            output.push_str("<div class=\"faq-item\">");
            push_element(output, "<h4>", &faq.question, "</h4>");
            push_element(output, "<p>", &faq.answer, "</p>");
            output.push_str("</div>");
        }

        if self.options.collect_stats {
            self.stats.insight_count += section.insights.len() as u32;
            self.stats.bullet_count += section.bullets.len() as u32;
            self.stats.plus_bullet_count += section.plus_bullets.len() as u32;
        }
    }

    fn render_list(&self, output: &mut String, open: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        output.push_str(open);
        for item in items {
            push_element(output, "<li>", item, "</li>");
        }
        output.push_str("</ul>");
    }
}

fn push_element(output: &mut String, open: &str, text: &str, close: &str) {
    output.push_str(open);
    push_escaped(output, text);
    output.push_str(close);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Faq;

    #[test]
    fn test_heading_only() {
        let section = Section::new("Topic");
        assert_eq!(render_section(&section), "<h2>Topic</h2>");
    }

    #[test]
    fn test_fixed_element_order() {
        let mut section = Section::new("Topic");
        section.faqs.push(Faq {
            question: "Q?".to_string(),
            answer: "A.".to_string(),
        });
        section.plus_bullets.push("Plus".to_string());
        section.bullets.push("Bullet".to_string());
        section.subheadings.push("Sub".to_string());
        section.insights.push("Insight".to_string());
        section.quote = Some("Quote".to_string());
        section.short_answer = "Short".to_string();

        assert_eq!(
            render_section(&section),
            "<h2>Topic</h2>\
             <p class=\"lead-text\">Short</p>\
             <blockquote class=\"content-quote\">Quote</blockquote>\
             <p class=\"book-insight\">Insight</p>\
             <h3>Sub</h3>\
             <ul><li>Bullet</li></ul>\
             <ul class=\"plus-list\"><li>Plus</li></ul>\
             <div class=\"faq-item\"><h4>Q?</h4><p>A.</p></div>"
        );
    }

    #[test]
    fn test_empty_fields_emit_nothing() {
        let mut section = Section::new("");
        section.quote = Some(String::new());
        assert_eq!(render_section(&section), "");
    }

    #[test]
    fn test_unanswered_faq_is_skipped() {
        let mut section = Section::new("Topic");
        section.push_faq("Open?");
        assert_eq!(render_section(&section), "<h2>Topic</h2>");
    }

    #[test]
    fn test_body_with_intro_and_cta() {
        let mut doc = Document::new();
        doc.intro = "Welcome & hello".to_string();
        doc.add_section(Section::new("Topic"));

        let options = RenderOptions::new().with_call_to_action("<a href=\"/\">Call</a>");
        assert_eq!(
            to_html(&doc, &options),
            "<p class=\"lead-text\">Welcome &amp; hello</p><h2>Topic</h2><a href=\"/\">Call</a>"
        );
    }

    #[test]
    fn test_empty_document_renders_only_cta() {
        let doc = Document::new();
        assert_eq!(to_html(&doc, &RenderOptions::default()), "");

        let options = RenderOptions::new().with_call_to_action("<p>cta</p>");
        assert_eq!(to_html(&doc, &options), "<p>cta</p>");
    }

    #[test]
    fn test_stats() {
        let mut doc = Document::new();
        let mut section = Section::new("Topic");
        section.bullets = vec!["a".to_string(), "b".to_string()];
        section.plus_bullets = vec!["c".to_string()];
        section.insights = vec!["d".to_string()];
        let idx = section.push_faq("Answered?");
        section.faqs[idx].answer = "Yes".to_string();
        section.push_faq("Open?");
        doc.add_section(section);
        doc.add_section(Section::new("Second"));

        let result = to_html_with_stats(&doc, &RenderOptions::default());
        assert_eq!(result.stats.section_count, 2);
        assert_eq!(result.stats.bullet_count, 2);
        assert_eq!(result.stats.plus_bullet_count, 1);
        assert_eq!(result.stats.insight_count, 1);
        assert_eq!(result.stats.faq_count, 1);
        assert_eq!(result.stats.skipped_faq_count, 1);
        assert!(result.content.contains("<h2>Second</h2>"));
    }
}
