//! Labelled-text parser.
//!
//! A single forward scan over the input lines. Nothing before the body
//! marker is looked at, and malformed input degrades to empty fields
//! instead of failing.

use crate::model::{Document, Section};

use super::line::LineKind;
use super::options::ParseOptions;

/// Parser for labelled content documents.
#[derive(Debug, Clone, Default)]
pub struct ContentParser {
    options: ParseOptions,
}

impl ContentParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse raw text into a document.
    pub fn parse(&self, raw: &str) -> Document {
        let mut state = ParseState::new(&self.options);
        for line in raw.lines() {
            state.feed(line);
        }
        state.finish()
    }
}

/// Scan state: body mode flag, the open section and its last FAQ.
struct ParseState<'o> {
    options: &'o ParseOptions,
    in_body: bool,
    doc: Document,
    section: Option<Section>,
    /// Index into `section.faqs` that an `Answer:` line attaches to.
    open_faq: Option<usize>,
}

impl<'o> ParseState<'o> {
    fn new(options: &'o ParseOptions) -> Self {
        Self {
            options,
            in_body: options.body_marker.is_empty(),
            doc: Document::new(),
            section: None,
            open_faq: None,
        }
    }

    fn feed(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return;
        }

        let marker = self.options.body_marker.as_str();
        if !marker.is_empty() && trimmed.starts_with(marker) {
            if !self.in_body {
                log::debug!("Entering body mode");
            }
            self.in_body = true;
            return;
        }

        if !self.in_body {
            return;
        }

        self.apply(LineKind::classify(trimmed));
    }

    fn apply(&mut self, kind: LineKind<'_>) {
        if !kind.is_content() {
            log::trace!("Skipping body line: {:?}", kind);
            return;
        }

        match kind {
            LineKind::MetaDescription(text) => self.doc.meta_description = text.to_string(),
            LineKind::H1(text) => self.doc.h1 = text.to_string(),
            LineKind::Intro(text) => self.doc.intro = text.to_string(),
            LineKind::H2(heading) => self.open_section(heading),
            other => self.apply_to_section(other),
        }
    }

    fn apply_to_section(&mut self, kind: LineKind<'_>) {
        let Some(section) = self.section.as_mut() else {
            log::trace!("Dropping section content outside any section: {:?}", kind);
            return;
        };

        match kind {
            LineKind::ShortAnswer(text) => section.short_answer = text.to_string(),
            LineKind::H3(text) => section.subheadings.push(text.to_string()),
            LineKind::Bullet(text) => {
                if self.options.detect_faqs && text.ends_with('?') {
                    self.open_faq = Some(section.push_faq(text));
                } else {
                    section.bullets.push(text.to_string());
                }
            }
            LineKind::PlusBullet(text) => section.plus_bullets.push(text.to_string()),
            LineKind::Quote(text) => section.quote = Some(text.to_string()),
            LineKind::Insight(text) => section.insights.push(text.to_string()),
            LineKind::Answer(text) => {
                let faq = match self.open_faq {
                    Some(i) => section.faqs.get_mut(i),
                    None => None,
                };
                match faq {
                    Some(faq) => faq.answer = text.to_string(),
                    None => log::trace!("Dropping answer with no open question"),
                }
            }
            _ => {}
        }
    }

    fn open_section(&mut self, heading: &str) {
        self.close_section();
        log::debug!("Opening section: {}", heading);
        self.section = Some(Section::new(heading));
    }

    fn close_section(&mut self) {
        if let Some(section) = self.section.take() {
            self.doc.add_section(section);
        }
        self.open_faq = None;
    }

    fn finish(mut self) -> Document {
        self.close_section();
        self.doc
    }
}
