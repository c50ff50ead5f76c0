use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The exact key set a cognitive conceptualization diagram must carry.
pub const CCD_KEYS: [&str; 6] = [
    "Situation",
    "Automatic_Thoughts",
    "Emotions",
    "Behaviors",
    "Intermediate_Beliefs",
    "Core_Beliefs",
];

/// Cognitive conceptualization diagram extracted from client utterances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct Ccd {
    #[serde(rename = "Situation")]
    pub situation: String,
    #[serde(rename = "Automatic_Thoughts")]
    pub automatic_thoughts: Vec<String>,
    #[serde(rename = "Emotions")]
    pub emotions: Vec<String>,
    #[serde(rename = "Behaviors")]
    pub behaviors: Vec<String>,
    /// Rules and assumptions ("if...then...", "must/should...").
    #[serde(rename = "Intermediate_Beliefs")]
    pub intermediate_beliefs: Vec<String>,
    /// Global beliefs about self, others, or the world.
    #[serde(rename = "Core_Beliefs")]
    pub core_beliefs: Vec<String>,
}
