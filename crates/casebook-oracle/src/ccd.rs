//! Cognitive conceptualization diagram (CCD) extraction.
//!
//! The oracle is asked for a JSON object with exactly the six [`CCD_KEYS`].
//! A response with any other key set, or with values of the wrong type, is
//! rejected. [`extract_ccd_from_text`] retries a rejected response with a
//! corrective prompt; [`extract_ccd_by_session`] runs it once per generated
//! session and records failures instead of stopping.

use casebook_core::models::case::CaseRecord;
use casebook_core::models::ccd::{CCD_KEYS, Ccd};
use casebook_core::models::dialogue::DialogueTurn;
use casebook_core::models::session::{CcdBySession, ExtractionStatus, SessionCcd, SessionsDocument};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::OracleError;
use crate::oracle::Oracle;
use crate::strict::{parse_json_object, require_exact_keys};

const CASE_SYSTEM_PROMPT: &str = "\
You are an expert CBT case formulator.
Build a DiaCBT-style Cognitive Conceptualization Diagram (CCD) for the case with EXACTLY these 6 keys:
- Situation (string)
- Automatic_Thoughts (list of strings)
- Emotions (list of strings)
- Behaviors (list of strings)
- Intermediate_Beliefs (list of strings; \"if...then...\" and \"must/should...\" rules)
- Core_Beliefs (list of strings; deep global beliefs about self, others, or the world)

Rules:
- Use only information supported by the case. Infer conservatively when uncertain.
- Output VALID JSON ONLY. No markdown, no extra keys, no comments.";

const UTTERANCE_SYSTEM_PROMPT: &str = "\
You are an expert CBT case formulator.
Build a DiaCBT-style Cognitive Conceptualization Diagram (CCD) from the CLIENT utterances only.

Return EXACTLY these 6 JSON keys (no extra keys, no markdown, no commentary):
- Situation: string
- Automatic_Thoughts: array of strings
- Emotions: array of strings
- Behaviors: array of strings
- Intermediate_Beliefs: array of strings (rules and assumptions: \"if...then...\", \"must/should...\")
- Core_Beliefs: array of strings (deep global beliefs about self, others, or the world)

Rules:
- Use only information supported by the client utterances.
- Infer conservatively when uncertain; avoid over-specific claims.
- The output MUST be valid JSON with exactly the 6 keys above.";

const NO_UTTERANCES: &str = "- (no client utterances found)";

/// How many extra attempts to make after a rejected response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub retries: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { retries: 2 }
    }
}

/// Parse a raw response into a [`Ccd`], enforcing the exact key set.
pub fn parse_ccd(response: &str) -> Result<Ccd, OracleError> {
    let object = parse_json_object(response)?;
    require_exact_keys(&object, &CCD_KEYS)?;
    serde_json::from_value(serde_json::Value::Object(object))
        .map_err(|e| OracleError::SchemaViolation(format!("failed to parse CCD: {e}")))
}

/// Extract a CCD from a whole structured case in a single call.
pub async fn extract_ccd<O: Oracle>(oracle: &O, case: &CaseRecord) -> Result<Ccd, OracleError> {
    let transaction_id = Uuid::new_v4();
    info!(transaction_id = %transaction_id, model = oracle.model_id(), "starting case CCD extraction");

    let user_prompt = format!(
        "Convert this CACTUS case into a DiaCBT-style CCD.\n\nCACTUS_CASE_JSON:\n{}",
        serde_json::to_string(case)?
    );
    let response = oracle.generate(CASE_SYSTEM_PROMPT, &user_prompt).await?;
    let ccd = parse_ccd(&response)?;

    info!(transaction_id = %transaction_id, "case CCD extraction complete");
    Ok(ccd)
}

/// Extract a CCD from rendered client utterances, retrying rejected responses
/// with a corrective prompt.
///
/// `system_prompt_prefix`, when non-empty, is placed ahead of the extraction
/// instructions.
pub async fn extract_ccd_from_text<O: Oracle>(
    oracle: &O,
    client_text: &str,
    system_prompt_prefix: Option<&str>,
    policy: RetryPolicy,
) -> Result<Ccd, OracleError> {
    let system_prompt = match system_prompt_prefix.map(str::trim).filter(|p| !p.is_empty()) {
        Some(prefix) => format!("{prefix}\n\n{UTTERANCE_SYSTEM_PROMPT}"),
        None => UTTERANCE_SYSTEM_PROMPT.to_string(),
    };

    let mut user_prompt = format!(
        "Extract the CCD from these CLIENT utterances.\nCLIENT_UTTERANCES:\n{client_text}\n"
    );

    let attempts = policy.retries.saturating_add(1);
    let mut last_error = None;

    for attempt in 1..=attempts {
        let outcome = match oracle.generate(&system_prompt, &user_prompt).await {
            Ok(response) => parse_ccd(&response),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(ccd) => return Ok(ccd),
            Err(e) => {
                warn!(attempt, attempts, error = %e, "CCD response rejected");
                last_error = Some(e);
                user_prompt = corrective_prompt(client_text);
            }
        }
    }

    Err(OracleError::RetriesExhausted {
        attempts,
        last: Box::new(last_error.unwrap_or_else(|| OracleError::Invocation("no attempts made".to_string()))),
    })
}

fn corrective_prompt(client_text: &str) -> String {
    format!(
        "Your previous output was invalid.\n\
         Return ONLY valid JSON with EXACTLY these keys:\n\
         {}.\n\
         No extra keys. No markdown.\n\n\
         CLIENT_UTTERANCES:\n{client_text}\n",
        CCD_KEYS.join(", ")
    )
}

/// Non-empty, trimmed content of every turn whose role is `client`
/// (case-insensitive), in order.
pub fn collect_client_utterances(dialogue: &[DialogueTurn]) -> Vec<String> {
    dialogue
        .iter()
        .filter(|turn| turn.is_client())
        .map(|turn| turn.content.trim())
        .filter(|content| !content.is_empty())
        .map(str::to_string)
        .collect()
}

/// Render utterances as a `- ` bulleted block for the prompt.
pub fn render_evidence(utterances: &[String]) -> String {
    if utterances.is_empty() {
        return NO_UTTERANCES.to_string();
    }
    utterances
        .iter()
        .map(|u| format!("- {u}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Default)]
pub struct CcdSessionOptions {
    /// Use every client utterance up to and including the session, not just
    /// the session's own.
    pub use_cumulative: bool,
    /// Seed the evidence with client utterances from the baseline dialogue.
    pub include_s0: bool,
    pub system_prompt_prefix: Option<String>,
    pub retry: RetryPolicy,
}

/// Extract one CCD per session. A session whose extraction fails is recorded
/// with `status: fail` and the run moves on.
pub async fn extract_ccd_by_session<O: Oracle>(
    oracle: &O,
    document: &SessionsDocument,
    options: &CcdSessionOptions,
) -> CcdBySession {
    let mut cumulative = if options.include_s0 {
        collect_client_utterances(&document.s0_dialogue)
    } else {
        Vec::new()
    };

    let mut results = Vec::with_capacity(document.sessions.len());

    for session in &document.sessions {
        let client_utterances = collect_client_utterances(&session.dialogue);

        let evidence: Vec<String> = if options.use_cumulative {
            cumulative.iter().chain(&client_utterances).cloned().collect()
        } else {
            client_utterances.clone()
        };

        let outcome = extract_ccd_from_text(
            oracle,
            &render_evidence(&evidence),
            options.system_prompt_prefix.as_deref(),
            options.retry,
        )
        .await;

        let (ccd, status, error) = match outcome {
            Ok(ccd) => (Some(ccd), ExtractionStatus::Ok, None),
            Err(e) => {
                warn!(case_id = %document.case_id, session_id = %session.session_id, error = %e, "session CCD extraction failed");
                (None, ExtractionStatus::Fail, Some(e.to_string()))
            }
        };

        results.push(SessionCcd {
            session_id: session.session_id.clone(),
            stage: session.stage.clone(),
            stage_objective: session.stage_objective.clone(),
            client_utterances_count: client_utterances.len(),
            evidence_utterances_count: evidence.len(),
            ccd,
            status,
            error,
        });

        cumulative.extend(client_utterances);
    }

    let failed = results.iter().filter(|r| r.status == ExtractionStatus::Fail).count();
    info!(case_id = %document.case_id, sessions = results.len(), failed, "session CCD extraction complete");

    CcdBySession {
        case_id: document.case_id.clone(),
        model_id: oracle.model_id().to_string(),
        use_cumulative: options.use_cumulative,
        include_s0: options.include_s0,
        sessions: results,
    }
}
