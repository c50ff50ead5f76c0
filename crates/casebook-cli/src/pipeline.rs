//! File drivers for the oracle stages.
//!
//! Each driver reads one JSON document, runs a stage against the supplied
//! [`Oracle`], and writes the result under `output_dir` using the case file
//! naming conventions.

use std::path::{Path, PathBuf};

use casebook_core::case_files::{ccd_by_session_file_name, sessions_file_name};
use casebook_core::models::case::CaseRecord;
use casebook_core::models::session::SessionsDocument;
use casebook_oracle::ccd::{CcdSessionOptions, extract_ccd_by_session};
use casebook_oracle::oracle::Oracle;
use casebook_oracle::sessions::generate_sessions;
use serde::de::DeserializeOwned;

use crate::files::write_json;

fn read_json<T: DeserializeOwned>(path: &Path) -> eyre::Result<T> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&contents).map_err(|e| eyre::eyre!("failed to parse {}: {e}", path.display()))
}

/// Generate sessions S1-S6 for the case at `case_path`.
///
/// The case id is the file stem (`case_00001` for `case_00001.json`) and the
/// output is `{case_id}_sessions_1_6.json`.
pub async fn generate_sessions_file<O: Oracle>(
    oracle: &O,
    case_path: &Path,
    output_dir: &Path,
    system_prompt: &str,
) -> eyre::Result<PathBuf> {
    let case_id = case_path
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| eyre::eyre!("cannot derive a case id from {}", case_path.display()))?;
    let case: CaseRecord = read_json(case_path)?;

    let document = generate_sessions(oracle, &case, case_id, system_prompt).await?;

    std::fs::create_dir_all(output_dir)?;
    let out_path = output_dir.join(sessions_file_name(case_id));
    write_json(&out_path, &document)?;

    tracing::info!(case_id, path = %out_path.display(), sessions = document.sessions.len(), "sessions written");
    Ok(out_path)
}

/// Extract one CCD per session from the sessions document at `sessions_path`
/// and write `{case_id}_ccd_by_session.json`.
pub async fn extract_ccd_by_session_file<O: Oracle>(
    oracle: &O,
    sessions_path: &Path,
    output_dir: &Path,
    options: &CcdSessionOptions,
) -> eyre::Result<PathBuf> {
    let document: SessionsDocument = read_json(sessions_path)?;

    let result = extract_ccd_by_session(oracle, &document, options).await;

    std::fs::create_dir_all(output_dir)?;
    let out_path = output_dir.join(ccd_by_session_file_name(&document.case_id));
    write_json(&out_path, &result)?;

    tracing::info!(case_id = %document.case_id, path = %out_path.display(), "session CCDs written");
    Ok(out_path)
}
