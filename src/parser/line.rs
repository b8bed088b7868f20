//! Line classification.
//!
//! Each body line is turned into a [`LineKind`] exactly once; the parser
//! state machine then dispatches on the tag without looking at prefixes
//! again.

/// A classified body line with its payload.
///
/// Payloads borrow from the input line and are already trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace-only line
    Blank,
    /// `Improved Meta Description:`
    MetaDescription(&'a str),
    /// `H1:`
    H1(&'a str),
    /// `Intro:`
    Intro(&'a str),
    /// `H2:`, opens a new section
    H2(&'a str),
    /// `Short answer:`
    ShortAnswer(&'a str),
    /// `H3:`
    H3(&'a str),
    /// `- ` item
    Bullet(&'a str),
    /// `+ ` item
    PlusBullet(&'a str),
    /// `Quote:` with surrounding quotation marks removed
    Quote(&'a str),
    /// `Book Insight:`
    Insight(&'a str),
    /// `Answer:`
    Answer(&'a str),
    /// `Closing:`, `Related:` or `See also:`
    Discarded,
    /// Anything else
    Unrecognized,
}

#[derive(Debug, Clone, Copy)]
enum Label {
    MetaDescription,
    H1,
    Intro,
    H2,
    ShortAnswer,
    H3,
    Bullet,
    PlusBullet,
    Quote,
    Insight,
    Answer,
    Discarded,
}

/// Prefixes in priority order; the first match wins.
const LABELS: &[(&str, Label)] = &[
    ("Improved Meta Description:", Label::MetaDescription),
    ("H1:", Label::H1),
    ("Intro:", Label::Intro),
    ("H2:", Label::H2),
    ("Short answer:", Label::ShortAnswer),
    ("H3:", Label::H3),
    ("- ", Label::Bullet),
    ("+ ", Label::PlusBullet),
    ("Quote:", Label::Quote),
    ("Book Insight:", Label::Insight),
    ("Answer:", Label::Answer),
    ("Closing:", Label::Discarded),
    ("Related:", Label::Discarded),
    ("See also:", Label::Discarded),
];

impl<'a> LineKind<'a> {
    /// Classify a raw line.
    pub fn classify(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineKind::Blank;
        }

        for (prefix, label) in LABELS {
            if let Some(rest) = trimmed.strip_prefix(prefix) {
                return Self::from_label(*label, rest.trim());
            }
        }

        LineKind::Unrecognized
    }

    fn from_label(label: Label, rest: &'a str) -> Self {
        match label {
            Label::MetaDescription => LineKind::MetaDescription(rest),
            Label::H1 => LineKind::H1(rest),
            Label::Intro => LineKind::Intro(rest),
            Label::H2 => LineKind::H2(rest),
            Label::ShortAnswer => LineKind::ShortAnswer(rest),
            Label::H3 => LineKind::H3(rest),
            Label::Bullet => LineKind::Bullet(rest),
            Label::PlusBullet => LineKind::PlusBullet(rest),
            Label::Quote => LineKind::Quote(strip_quotes(rest)),
            Label::Insight => LineKind::Insight(rest),
            Label::Answer => LineKind::Answer(rest),
            Label::Discarded => LineKind::Discarded,
        }
    }

    /// Check if the line is one of the labels the parser acts on.
    pub fn is_content(&self) -> bool {
        !matches!(
            self,
            LineKind::Blank | LineKind::Discarded | LineKind::Unrecognized
        )
    }
}

/// Remove at most one leading and one trailing `"`.
fn strip_quotes(text: &str) -> &str {
    let text = text.strip_prefix('"').unwrap_or(text);
    let text = text.strip_suffix('"').unwrap_or(text);
    text.trim()
}
