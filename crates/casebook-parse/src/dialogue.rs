//! Dialogue transcript structuring.
//!
//! A turn opens on a line of the form `Role: text`, where the role label
//! starts with a letter and contains only letters, spaces, hyphens,
//! underscores and slashes. Lines without such a label continue the previous
//! turn. Roles are free text: `Counselor` and `Client` are typical but any
//! label is kept as written.

use std::sync::LazyLock;

use casebook_core::models::dialogue::{DialogueTurn, UNKNOWN_ROLE};
use regex::Regex;

use crate::accumulate::{Block, LineGrammar, LineKind, scan};
use crate::normalize::{join_fragments, normalize_lines};

static TURN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z \-_/]+):\s*(.*)$").expect("valid turn regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Opening<'a> {
    role: &'a str,
    first: Option<&'a str>,
}

fn turn_opening(line: &str) -> Option<Opening<'_>> {
    let caps = TURN_RE.captures(line)?;
    let role = caps.get(1)?.as_str().trim();
    let first = caps.get(2).map(|m| m.as_str().trim()).filter(|s| !s.is_empty());
    Some(Opening { role, first })
}

struct DialogueGrammar;

impl<'a> LineGrammar<'a> for DialogueGrammar {
    type Marker = Opening<'a>;

    fn classify(&self, line: &'a str, _open: Option<&Block<'a, Opening<'a>>>) -> LineKind<Opening<'a>> {
        match turn_opening(line) {
            Some(opening) => LineKind::Marker(opening),
            None => LineKind::Continuation,
        }
    }

    fn orphan_marker(&self) -> Option<Opening<'a>> {
        Some(Opening {
            role: UNKNOWN_ROLE,
            first: None,
        })
    }
}

/// Split a transcript into turns.
///
/// Text before the first labelled turn is kept under the `Unknown` role. A
/// transcript with no labelled turn at all yields no turns, and a turn whose
/// content is empty is dropped.
pub fn structure_dialogue(text: &str) -> Vec<DialogueTurn> {
    let lines = normalize_lines(text);
    if !lines.iter().any(|line| turn_opening(line).is_some()) {
        return Vec::new();
    }

    let mut turns = Vec::new();
    scan(&DialogueGrammar, lines.iter().map(String::as_str), |block| {
        let fragments = block.marker.first.into_iter().chain(block.body.iter().copied());
        let content = join_fragments(fragments);
        if !content.is_empty() {
            turns.push(DialogueTurn::new(block.marker.role, content));
        }
    });

    turns
}
