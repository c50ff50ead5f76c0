//! Six-stage therapy session generation.
//!
//! Starting from a structured case and its baseline (S0) dialogue, the oracle
//! writes sessions S1 through S6 one at a time. Each prompt carries the case
//! context, the S0 transcript and a summary of every session generated so
//! far, so the course of therapy stays continuous.

use casebook_core::models::case::CaseRecord;
use casebook_core::models::dialogue::{COUNSELOR_ROLE, DialogueTurn};
use casebook_core::models::session::{Session, SessionsDocument};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::OracleError;
use crate::oracle::Oracle;
use crate::strict::parse_json_object;

/// A fixed stage of the six-session course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    pub session_id: &'static str,
    pub name: &'static str,
    pub objective: &'static str,
    pub artifact_type: &'static str,
    pub artifact_requirements: &'static str,
}

pub const STAGES: [Stage; 6] = [
    Stage {
        session_id: "S1",
        name: "Build Trust & Assessment",
        objective: "Build rapport, clarify goals, assess the problem, and agree on a simple tracking task.",
        artifact_type: "Trigger/Thought Log",
        artifact_requirements: "Provide a simple log template and include exactly 2 example entries based on this case.",
    },
    Stage {
        session_id: "S2",
        name: "Identifying Negative Cognitions",
        objective: "Review the log and map situation→thought→emotion→body→behavior to identify automatic thoughts.",
        artifact_type: "CBT Map",
        artifact_requirements: "Provide one worked CBT map example: situation, automatic thought, emotions (0-10), body sensations, behaviors.",
    },
    Stage {
        session_id: "S3",
        name: "Challenging False Beliefs",
        objective: "Reality-test distorted thoughts and generate a more balanced alternative thought.",
        artifact_type: "Reality Test Table",
        artifact_requirements: "Provide a table-like text with: Thought, Evidence For, Evidence Against, Balanced Thought.",
    },
    Stage {
        session_id: "S4",
        name: "Restructuring Cognitive Patterns",
        objective: "Create adaptive replacement scripts and an If–Then plan for predictable triggers.",
        artifact_type: "Replacement Script + If–Then Plan",
        artifact_requirements: "Provide a compassionate replacement script (3–5 sentences) and 2 If–Then plans tailored to this case.",
    },
    Stage {
        session_id: "S5",
        name: "Behavioral Skill Building",
        objective: "Practice coping skills and design a concrete plan for high-risk moments.",
        artifact_type: "Skills Plan + Crisis Plan",
        artifact_requirements: "List 3 coping skills with when/how to use them, and a 3-step crisis plan.",
    },
    Stage {
        session_id: "S6",
        name: "Consolidation & Termination",
        objective: "Review gains and formalize a long-term maintenance plan and setback prevention.",
        artifact_type: "Maintenance + Setback Prevention Plan",
        artifact_requirements: "Provide a maintenance plan (weekly goals for next 2–4 weeks) and a setback prevention checklist.",
    },
];

/// Render turns as `Role: content` lines, one turn per line.
pub fn render_dialogue(dialogue: &[DialogueTurn]) -> String {
    dialogue
        .iter()
        .map(|turn| format!("{}: {}", turn.role, turn.content.replace('\n', " ").trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
struct PriorSummary<'a> {
    session_id: &'a str,
    stage: Option<&'a str>,
    artifact_type: Option<&'a str>,
    artifact_content: Option<&'a Value>,
}

fn prior_summaries(prior: &[Session]) -> Vec<PriorSummary<'_>> {
    prior
        .iter()
        .map(|s| PriorSummary {
            session_id: &s.session_id,
            stage: s.stage.as_deref(),
            artifact_type: s.artifact.as_ref().and_then(|a| a.artifact_type.as_deref()),
            artifact_content: s.artifact.as_ref().map(|a| &a.content),
        })
        .collect()
}

/// Build the user prompt for one stage.
pub fn build_session_prompt(
    case: &CaseRecord,
    s0_text: &str,
    prior: &[Session],
    stage: &Stage,
) -> Result<String, OracleError> {
    let client_info = serde_json::to_string(&case.intake_form.client_info)?;
    let patterns = serde_json::to_string(&case.patterns)?;
    let presenting_problem = serde_json::to_string(&case.intake_form.presenting_problem)?;
    let plan = serde_json::to_string(&case.cbt_plan)?;
    let prior_json = serde_json::to_string_pretty(&prior_summaries(prior))?;

    Ok(format!(
        "You will generate {session_id}.

TARGET STAGE:
- session_id: {session_id}
- stage: {stage_name}
- stage_objective: {objective}
- required_artifact_type: {artifact_type}
- artifact_requirements: {requirements}

CASE (CACTUS) CONTEXT:
- client_info: {client_info}
- core_thought: {thought}
- cognitive_distortion_patterns: {patterns}
- presenting_problem_bullets: {presenting_problem}
- cbt_technique: {technique}
- attitude: {attitude}
- original_cbt_plan: {plan}

SESSION 0 (S0) TRANSCRIPT (given, do not rewrite; use as history):
{s0_text}

PRIOR GENERATED SESSIONS (if any):
{prior_json}

INSTRUCTIONS:
- Continue the therapy naturally from S0 and prior sessions.
- Ensure the dialogue meets the formatting + turn constraints.
- End the session with the Counselor summarizing and clearly stating the artifact content.
- Output JSON ONLY matching the required schema.
",
        session_id = stage.session_id,
        stage_name = stage.name,
        objective = stage.objective,
        artifact_type = stage.artifact_type,
        requirements = stage.artifact_requirements,
        thought = plain_text(&case.thought),
        technique = plain_text(&case.cbt_technique),
        attitude = plain_text(&case.attitude),
    ))
}

/// Strings render bare, anything else as JSON.
fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parse and validate one generated session against its stage.
pub fn parse_session(response: &str, stage: &Stage) -> Result<Session, OracleError> {
    let object = parse_json_object(response)?;
    let invalid = |reason: &str| OracleError::SessionInvalid {
        session_id: stage.session_id.to_string(),
        reason: reason.to_string(),
    };

    match object.get("session_id") {
        Some(Value::String(id)) if id == stage.session_id => {}
        Some(other) => return Err(invalid(&format!("unexpected session_id {other}"))),
        None => return Err(invalid("missing session_id")),
    }
    if !object.get("dialogue").is_some_and(Value::is_array) {
        return Err(invalid("dialogue is not an array"));
    }

    let session: Session = serde_json::from_value(Value::Object(object))
        .map_err(|e| OracleError::SchemaViolation(format!("failed to parse session: {e}")))?;

    let (Some(first), Some(last)) = (session.dialogue.first(), session.dialogue.last()) else {
        return Err(invalid("dialogue is empty"));
    };
    if first.role != COUNSELOR_ROLE {
        return Err(invalid(&format!("first turn is by {}, expected {COUNSELOR_ROLE}", first.role)));
    }
    if last.role != COUNSELOR_ROLE {
        return Err(invalid(&format!("last turn is by {}, expected {COUNSELOR_ROLE}", last.role)));
    }

    Ok(session)
}

/// Generate sessions S1 through S6 for one case.
///
/// Stops at the first invalid session; sessions are built on each other, so a
/// gap would leave the following prompts without their history.
pub async fn generate_sessions<O: Oracle>(
    oracle: &O,
    case: &CaseRecord,
    case_id: &str,
    system_prompt: &str,
) -> Result<SessionsDocument, OracleError> {
    let s0_text = render_dialogue(&case.dialogue);
    let mut sessions: Vec<Session> = Vec::with_capacity(STAGES.len());

    info!(case_id, model = oracle.model_id(), "starting session generation");

    for stage in &STAGES {
        let user_prompt = build_session_prompt(case, &s0_text, &sessions, stage)?;
        debug!(case_id, session_id = stage.session_id, prompt_len = user_prompt.len(), "generating session");

        let response = oracle.generate(system_prompt, &user_prompt).await?;
        let session = parse_session(&response, stage)?;

        info!(case_id, session_id = stage.session_id, turns = session.dialogue.len(), "session generated");
        sessions.push(session);
    }

    Ok(SessionsDocument {
        case_id: case_id.to_string(),
        s0_dialogue: case.dialogue.clone(),
        sessions,
    })
}
