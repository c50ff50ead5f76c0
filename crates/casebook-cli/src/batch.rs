//! Batch conversion of a raw case export into numbered case files.
//!
//! Every non-blank input line is one raw case. A line that fails to decode
//! or transform is logged, recorded in the failures file, and skipped; the
//! rest of the batch still runs. Case numbers count successful records only,
//! so the output has no gaps.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use casebook_core::case_files::case_file_name;
use casebook_core::models::case::{CaseRecord, RawCase};
use casebook_parse::transform_case;
use serde::Serialize;

use crate::config::{self, ConvertConfig};
use crate::files::{write_atomic, write_json};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub written: u64,
    pub failed: u64,
    pub output_dir: PathBuf,
}

/// One line of the failures file.
#[derive(Debug, Serialize)]
struct FailedRecord {
    line_no: usize,
    error: String,
}

/// Convert the configured input file.
pub fn convert_file(config: &ConvertConfig) -> eyre::Result<BatchSummary> {
    let file = File::open(&config.input)
        .map_err(|e| eyre::eyre!("failed to open input {}: {e}", config.input.display()))?;
    tracing::info!(input = %config.input.display(), "converting cases");
    convert(BufReader::new(file), config)
}

/// Convert every raw case read from `reader`.
pub fn convert<R: BufRead>(mut reader: R, config: &ConvertConfig) -> eyre::Result<BatchSummary> {
    config::validate(config)?;
    std::fs::create_dir_all(&config.output_dir)?;

    let mut written: u64 = 0;
    let mut failures = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| eyre::eyre!("failed to read input after line {line_no}: {e}"))?;
        if read == 0 {
            break;
        }
        line_no += 1;

        // Invalid UTF-8 fails only its own record.
        let case = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => convert_line(line),
            Err(e) => Err(eyre::eyre!("line is not valid UTF-8: {e}")),
        };
        let case = match case {
            Ok(case) => case,
            Err(e) => {
                tracing::warn!(line_no, error = %e, "skipping record");
                failures.push(FailedRecord {
                    line_no,
                    error: e.to_string(),
                });
                continue;
            }
        };

        let case_number = config
            .start_index
            .checked_add(written)
            .ok_or_else(|| eyre::eyre!("case number overflow at line {line_no}"))?;
        let path = config
            .output_dir
            .join(case_file_name(case_number, config.zero_pad)?);
        write_json(&path, &case)?;
        tracing::debug!(line_no, case_number, path = %path.display(), "case written");
        written += 1;
    }

    write_failures(&config.failures_path(), &failures)?;

    Ok(BatchSummary {
        written,
        failed: failures.len() as u64,
        output_dir: config.output_dir.clone(),
    })
}

fn convert_line(line: &str) -> eyre::Result<CaseRecord> {
    let raw: RawCase = serde_json::from_str(line)?;
    Ok(transform_case(&raw)?)
}

/// Write the failures file, or remove a stale one when nothing failed.
fn write_failures(path: &Path, failures: &[FailedRecord]) -> eyre::Result<()> {
    if failures.is_empty() {
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        return Ok(());
    }

    let mut contents = String::new();
    for failure in failures {
        contents.push_str(&serde_json::to_string(failure)?);
        contents.push('\n');
    }
    write_atomic(path, contents.as_bytes())?;

    tracing::info!(path = %path.display(), failed = failures.len(), "failures recorded");
    Ok(())
}
