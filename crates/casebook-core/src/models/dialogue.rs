use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Role assigned to text that appears before any labelled turn.
pub const UNKNOWN_ROLE: &str = "Unknown";

/// Role label used by the counselor in source transcripts.
pub const COUNSELOR_ROLE: &str = "Counselor";

/// One speaker turn. `role` is free text copied from the transcript label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DialogueTurn {
    pub role: String,
    pub content: String,
}

impl DialogueTurn {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn is_client(&self) -> bool {
        self.role.eq_ignore_ascii_case("client")
    }
}
