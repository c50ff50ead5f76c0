use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use super::ccd::Ccd;
use super::dialogue::DialogueTurn;

/// One generated therapy session as returned by the oracle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Session {
    pub session_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_objective: Option<String>,
    pub dialogue: Vec<DialogueTurn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact: Option<Artifact>,
}

/// Homework or worksheet the counselor hands over at the end of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Artifact {
    #[serde(rename = "type", default)]
    pub artifact_type: Option<String>,
    #[serde(default)]
    pub content: Value,
}

/// A case's baseline dialogue followed by its generated sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionsDocument {
    pub case_id: String,
    #[serde(default)]
    pub s0_dialogue: Vec<DialogueTurn>,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ExtractionStatus {
    Ok,
    Fail,
}

/// CCD extraction outcome for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionCcd {
    pub session_id: String,
    pub stage: Option<String>,
    pub stage_objective: Option<String>,
    pub client_utterances_count: usize,
    pub evidence_utterances_count: usize,
    pub ccd: Option<Ccd>,
    pub status: ExtractionStatus,
    pub error: Option<String>,
}

/// Per-session CCD extraction over a whole sessions document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CcdBySession {
    pub case_id: String,
    pub model_id: String,
    pub use_cumulative: bool,
    pub include_s0: bool,
    pub sessions: Vec<SessionCcd>,
}
