use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Demographic block from the top of an intake form.
///
/// Every key is always present; a value the form did not state is an empty
/// string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ClientInfo {
    pub name: String,
    pub age: Age,
    pub gender: String,
    pub occupation: String,
    pub education: String,
    pub marital_status: String,
    pub family_details: String,
}

/// Client age: a number when the form wrote one, otherwise the text as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Age {
    Years(i32),
    Text(String),
}

impl Age {
    /// Parse `raw` as an integer, keeping the original text when it is not one.
    ///
    /// Only plain digits (with an optional sign) in `i32` range become
    /// [`Age::Years`]; out-of-range values and forms like `4_1` stay text.
    pub fn coerce(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        match raw.parse::<i32>() {
            Ok(years) => Age::Years(years),
            Err(_) => Age::Text(raw),
        }
    }

    pub fn years(&self) -> Option<i32> {
        match self {
            Age::Years(y) => Some(*y),
            Age::Text(_) => None,
        }
    }
}

impl Default for Age {
    fn default() -> Self {
        Age::Text(String::new())
    }
}

/// Structured intake form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct IntakeRecord {
    pub client_info: ClientInfo,
    pub presenting_problem: Vec<String>,
    pub reason_for_seeking_counseling: String,
    pub past_history: Vec<String>,
    pub academic_occupational_functioning_level: Vec<String>,
    pub social_support_system: String,
}
