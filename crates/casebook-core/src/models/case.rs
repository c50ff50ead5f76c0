use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use super::dialogue::DialogueTurn;
use super::intake::IntakeRecord;
use super::plan::PlanRecord;

/// One exported case before structuring.
///
/// `intake_form`, `cbt_plan` and `dialogue` are normally free text but may
/// already hold structured values from an earlier run, so they are kept as
/// raw JSON until the transformer inspects them. The remaining fields pass
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCase {
    #[serde(default = "empty_text")]
    pub thought: Value,
    #[serde(default = "empty_list")]
    pub patterns: Value,
    #[serde(default)]
    pub intake_form: Value,
    #[serde(default = "empty_text")]
    pub cbt_technique: Value,
    #[serde(default)]
    pub cbt_plan: Value,
    #[serde(default = "empty_text")]
    pub attitude: Value,
    #[serde(default)]
    pub dialogue: Value,
}

impl Default for RawCase {
    fn default() -> Self {
        Self {
            thought: empty_text(),
            patterns: empty_list(),
            intake_form: Value::Null,
            cbt_technique: empty_text(),
            cbt_plan: Value::Null,
            attitude: empty_text(),
            dialogue: Value::Null,
        }
    }
}

fn empty_text() -> Value {
    Value::String(String::new())
}

fn empty_list() -> Value {
    Value::Array(Vec::new())
}

/// Fully structured case. Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CaseRecord {
    pub thought: Value,
    pub patterns: Value,
    pub intake_form: IntakeRecord,
    pub cbt_technique: Value,
    #[ts(type = "Record<string, string>")]
    pub cbt_plan: PlanRecord,
    pub attitude: Value,
    pub dialogue: Vec<DialogueTurn>,
}
