//! Numbered-section splitting.
//!
//! A section marker is a line like `2. Presenting Problem`: leading digits, a
//! dot, optional space, then a non-empty title. Lines before the first marker
//! form the preamble.

use std::sync::LazyLock;

use regex::Regex;

use crate::accumulate::{Block, LineGrammar, LineKind, scan};

static NUMBERED_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.\s*(.+)$").expect("valid numbered line regex"));

/// Match a `N. text` line, returning the digit string and the text.
pub(crate) fn numbered_line(line: &str) -> Option<(&str, &str)> {
    let caps = NUMBERED_LINE_RE.captures(line)?;
    let digits = caps.get(1)?.as_str();
    let text = caps.get(2)?.as_str();
    Some((digits, text))
}

/// One numbered section and the lines under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    /// `None` when the digits do not fit a `u32`.
    pub number: Option<u32>,
    pub title: &'a str,
    /// The marker line exactly as it appeared.
    pub heading: &'a str,
    pub body: Vec<&'a str>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionSplit<'a> {
    pub preamble: Vec<&'a str>,
    pub sections: Vec<Section<'a>>,
}

impl<'a> SectionSplit<'a> {
    /// The original line sequence: preamble, then each heading followed by
    /// its body.
    pub fn lines(&self) -> Vec<&'a str> {
        let mut out = self.preamble.clone();
        for section in &self.sections {
            out.push(section.heading);
            out.extend(section.body.iter().copied());
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Heading<'a> {
    number: Option<u32>,
    title: &'a str,
    line: &'a str,
}

struct SectionGrammar;

impl<'a> LineGrammar<'a> for SectionGrammar {
    type Marker = Heading<'a>;

    fn classify(&self, line: &'a str, _open: Option<&Block<'a, Heading<'a>>>) -> LineKind<Heading<'a>> {
        match numbered_line(line) {
            Some((digits, title)) => LineKind::Marker(Heading {
                number: digits.parse().ok(),
                title,
                line,
            }),
            None => LineKind::Continuation,
        }
    }
}

/// Partition normalized lines into a preamble and numbered sections.
pub fn split_sections<'a>(lines: impl IntoIterator<Item = &'a str>) -> SectionSplit<'a> {
    let mut sections = Vec::new();

    let preamble = scan(&SectionGrammar, lines, |block| {
        sections.push(Section {
            number: block.marker.number,
            title: block.marker.title,
            heading: block.marker.line,
            body: block.body,
        });
    });

    SectionSplit { preamble, sections }
}
