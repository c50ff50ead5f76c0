//! Raw case to structured case.
//!
//! Each of the three text fields is routed to its structurer when it holds
//! free text, or deserialized as-is when an earlier run already structured
//! it. `null` counts as empty text. Anything else is a caller error.

use casebook_core::models::case::{CaseRecord, RawCase};
use casebook_core::models::dialogue::DialogueTurn;
use casebook_core::models::intake::IntakeRecord;
use casebook_core::models::plan::PlanRecord;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::dialogue::structure_dialogue;
use crate::error::ParseError;
use crate::intake::structure_intake;
use crate::plan::itemize_plan;

/// Structure one raw case.
pub fn transform_case(raw: &RawCase) -> Result<CaseRecord, ParseError> {
    let intake_form = structured_or_parsed::<IntakeRecord>(
        "intake_form",
        "intake text or intake object",
        &raw.intake_form,
        Value::is_object,
        structure_intake,
    )?;
    let cbt_plan = structured_or_parsed::<PlanRecord>(
        "cbt_plan",
        "plan text or object of item strings",
        &raw.cbt_plan,
        Value::is_object,
        itemize_plan,
    )?;
    let dialogue = structured_or_parsed::<Vec<DialogueTurn>>(
        "dialogue",
        "dialogue text or array of turns",
        &raw.dialogue,
        Value::is_array,
        structure_dialogue,
    )?;

    Ok(CaseRecord {
        thought: raw.thought.clone(),
        patterns: raw.patterns.clone(),
        intake_form,
        cbt_technique: raw.cbt_technique.clone(),
        cbt_plan,
        attitude: raw.attitude.clone(),
        dialogue,
    })
}

fn structured_or_parsed<T: DeserializeOwned>(
    field: &'static str,
    expected: &'static str,
    value: &Value,
    has_structured_shape: fn(&Value) -> bool,
    parse: fn(&str) -> T,
) -> Result<T, ParseError> {
    match value {
        Value::Null => Ok(parse("")),
        Value::String(text) => Ok(parse(text)),
        structured if has_structured_shape(structured) => {
            T::deserialize(structured).map_err(|e| ParseError::InvalidInputType {
                field,
                expected,
                found: format!("{} of the wrong shape ({e})", json_kind(structured)),
            })
        }
        other => Err(ParseError::InvalidInputType {
            field,
            expected,
            found: json_kind(other).to_string(),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
