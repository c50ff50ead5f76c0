//! Intake form structuring.
//!
//! The preamble carries the client's demographics as key-value lines. The
//! numbered sections that follow map by number onto the intake fields:
//!
//! | Section | Field | Shape |
//! |---------|-------|-------|
//! | 2 | `presenting_problem` | one entry per line |
//! | 3 | `reason_for_seeking_counseling` | lines joined |
//! | 4 | `past_history` | one entry per line |
//! | 5 | `academic_occupational_functioning_level` | one entry per line |
//! | 6 | `social_support_system` | lines joined |
//!
//! Any other section number (section 1 usually restates the client info, and
//! a number too large for `u32` has no field at all) is parsed and dropped. A repeated section number overwrites the earlier one.

use casebook_core::models::intake::{Age, ClientInfo, IntakeRecord};
use casebook_core::ordered_map::OrderedMap;
use tracing::debug;

use crate::kv::parse_key_values;
use crate::normalize::{join_fragments, normalize_lines};
use crate::sections::split_sections;

/// Build an [`IntakeRecord`] from raw intake text.
pub fn structure_intake(text: &str) -> IntakeRecord {
    let lines = normalize_lines(text);
    let split = split_sections(lines.iter().map(String::as_str));

    let attributes = parse_key_values(split.preamble.iter().copied());
    let mut record = IntakeRecord {
        client_info: client_info(&attributes),
        ..IntakeRecord::default()
    };

    for section in &split.sections {
        let body = || section.body.iter().map(|line| line.to_string()).collect::<Vec<_>>();
        match section.number {
            Some(2) => record.presenting_problem = body(),
            Some(3) => record.reason_for_seeking_counseling = join_fragments(section.body.iter().copied()),
            Some(4) => record.past_history = body(),
            Some(5) => record.academic_occupational_functioning_level = body(),
            Some(6) => record.social_support_system = join_fragments(section.body.iter().copied()),
            other => debug!(section = ?other, title = section.title, "ignoring intake section"),
        }
    }

    record
}

fn client_info(attributes: &OrderedMap<String>) -> ClientInfo {
    ClientInfo {
        name: attribute(attributes, "Name", "name"),
        age: Age::coerce(attribute(attributes, "Age", "age")),
        gender: attribute(attributes, "Gender", "gender"),
        occupation: attribute(attributes, "Occupation", "occupation"),
        education: attribute(attributes, "Education", "education"),
        marital_status: attribute(attributes, "Marital Status", "marital_status"),
        family_details: attribute(attributes, "Family Details", "family_details"),
    }
}

/// Look up the capitalized spelling first, then the lowercase one.
fn attribute(attributes: &OrderedMap<String>, key: &str, fallback: &str) -> String {
    attributes
        .get(key)
        .or_else(|| attributes.get(fallback))
        .cloned()
        .unwrap_or_default()
}
