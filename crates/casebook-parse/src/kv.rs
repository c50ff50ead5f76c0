//! Key-value preamble parsing.
//!
//! Intake preambles write attributes two ways, often mixed in one form:
//!
//! ```text
//! Name:
//! Brooke Davis
//! Age: 41
//! ```
//!
//! A bare heading (`Key:`) takes the following line as its value unless that
//! line is itself a heading. `Key: value` splits on the first colon. Lines
//! with no colon contribute nothing.

use casebook_core::ordered_map::OrderedMap;

use crate::accumulate::{Block, LineGrammar, LineKind, scan};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry<'a> {
    /// `Key:` with the value expected on the next line.
    Heading(&'a str),
    /// `Key: value` on one line.
    Inline(&'a str, &'a str),
}

struct KeyValueGrammar;

impl<'a> LineGrammar<'a> for KeyValueGrammar {
    type Marker = Entry<'a>;

    fn classify(&self, line: &'a str, open: Option<&Block<'a, Entry<'a>>>) -> LineKind<Entry<'a>> {
        let is_heading = line.ends_with(':') && line.chars().count() > 1;

        let awaiting_value =
            matches!(open, Some(block) if matches!(block.marker, Entry::Heading(_)) && block.body.is_empty());
        if awaiting_value && !line.ends_with(':') {
            return LineKind::Continuation;
        }

        if is_heading {
            let key = &line[..line.len() - 1];
            LineKind::Marker(Entry::Heading(key.trim()))
        } else if let Some((key, value)) = line.split_once(':') {
            LineKind::Marker(Entry::Inline(key.trim(), value.trim()))
        } else {
            LineKind::Continuation
        }
    }
}

/// Parse preamble lines into attribute name to value. Keys are kept as
/// written; a repeated key keeps its first position and its last value.
pub fn parse_key_values<'a>(lines: impl IntoIterator<Item = &'a str>) -> OrderedMap<String> {
    let mut out = OrderedMap::new();

    scan(&KeyValueGrammar, lines, |block| {
        let (key, value) = match block.marker {
            Entry::Heading(key) => (key, block.body.first().map_or("", |v| v.trim())),
            Entry::Inline(key, value) => (key, value),
        };
        out.insert(key, value.to_string());
    });

    out
}
