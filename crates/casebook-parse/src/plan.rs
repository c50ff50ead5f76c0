//! Counseling plan itemization.
//!
//! Plan text opens with the technique title and usually a `Counseling plan:`
//! header, followed by a numbered list whose items may wrap onto several
//! lines:
//!
//! ```text
//! Decatastrophizing
//!
//! Counseling plan:
//! 1. Identify triggers
//! 2. Practice reframing
//! and track outcomes
//! ```
//!
//! Everything before the first numbered item is skipped. Wrapped lines are
//! appended to the item they follow.

use casebook_core::models::plan::PlanRecord;

use crate::accumulate::{Block, LineGrammar, LineKind, scan};
use crate::normalize::{join_fragments, normalize_lines};
use crate::sections::numbered_line;

const PLAN_HEADERS: [&str; 3] = ["counseling plan:", "counseling plan", "plan:"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Item<'a> {
    key: &'a str,
    first: &'a str,
}

struct PlanGrammar;

impl<'a> LineGrammar<'a> for PlanGrammar {
    type Marker = Item<'a>;

    fn classify(&self, line: &'a str, _open: Option<&Block<'a, Item<'a>>>) -> LineKind<Item<'a>> {
        if let Some((key, first)) = numbered_line(line)
            && is_positive(key)
        {
            return LineKind::Marker(Item { key, first });
        }
        if is_header(line) {
            return LineKind::Skip;
        }
        LineKind::Continuation
    }
}

fn is_positive(digits: &str) -> bool {
    digits.bytes().any(|b| b != b'0')
}

fn is_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    PLAN_HEADERS.contains(&lower.as_str())
}

/// Split plan text into numbered items. Keys are the item numbers as written.
pub fn itemize_plan(text: &str) -> PlanRecord {
    let lines = normalize_lines(text);
    let mut plan = PlanRecord::new();

    // Lines before the first item are the technique title; the preamble is
    // discarded.
    scan(&PlanGrammar, lines.iter().map(String::as_str), |block| {
        let fragments = std::iter::once(block.marker.first).chain(block.body.iter().copied());
        plan.insert(block.marker.key, join_fragments(fragments));
    });

    plan
}
