//! Section-level types.

use serde::{Deserialize, Serialize};

/// One `H2`-delimited block of content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading
    pub heading: String,

    /// Lead answer shown under the heading
    pub short_answer: String,

    /// Subheadings in source order
    pub subheadings: Vec<String>,

    /// Plain list items
    pub bullets: Vec<String>,

    /// Checkmark list items
    pub plus_bullets: Vec<String>,

    /// Pull quote
    pub quote: Option<String>,

    /// Book insight paragraphs
    pub insights: Vec<String>,

    /// Question and answer pairs
    pub faqs: Vec<Faq>,
}

impl Section {
    /// Create a new section with the given heading.
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            ..Default::default()
        }
    }

    /// Append an unanswered FAQ and return its index.
    pub fn push_faq(&mut self, question: impl Into<String>) -> usize {
        self.faqs.push(Faq::new(question));
        self.faqs.len() - 1
    }

    /// FAQs that have an answer and will therefore be rendered.
    pub fn answered_faqs(&self) -> impl Iterator<Item = &Faq> {
        self.faqs.iter().filter(|f| f.is_answered())
    }

    /// Check if the section carries nothing but its heading.
    pub fn is_empty(&self) -> bool {
        self.short_answer.is_empty()
            && self.subheadings.is_empty()
            && self.bullets.is_empty()
            && self.plus_bullets.is_empty()
            && self.quote.is_none()
            && self.insights.is_empty()
            && self.faqs.is_empty()
    }

    /// Get plain text content of the section.
    pub fn plain_text(&self) -> String {
        let mut lines = vec![self.heading.clone()];
        if !self.short_answer.is_empty() {
            lines.push(self.short_answer.clone());
        }
        if let Some(ref quote) = self.quote {
            lines.push(quote.clone());
        }
        lines.extend(self.insights.iter().cloned());
        lines.extend(self.subheadings.iter().cloned());
        lines.extend(self.bullets.iter().map(|b| format!("- {}", b)));
        lines.extend(self.plus_bullets.iter().map(|b| format!("+ {}", b)));
        for faq in self.answered_faqs() {
            lines.push(faq.question.clone());
            lines.push(faq.answer.clone());
        }
        lines.retain(|l| !l.is_empty());
        lines.join("\n")
    }
}

/// A question with its (possibly empty) answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    /// Create an unanswered FAQ.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: String::new(),
        }
    }

    pub fn is_answered(&self) -> bool {
        !self.answer.is_empty()
    }
}
