//! Case file naming conventions.
//!
//! Pure string functions. These define the canonical layout of the files the
//! batch tools read and write.

use crate::error::CoreError;

/// Widest zero padding accepted for case numbers.
pub const MAX_ZERO_PAD: usize = 12;

/// File name for a converted case, e.g. `case_00001.json` for `(1, 5)`.
pub fn case_file_name(case_number: u64, zero_pad: usize) -> Result<String, CoreError> {
    Ok(format!("{}.json", case_stem(case_number, zero_pad)?))
}

/// Stem shared by every artifact derived from one case, e.g. `case_00001`.
pub fn case_stem(case_number: u64, zero_pad: usize) -> Result<String, CoreError> {
    if zero_pad == 0 || zero_pad > MAX_ZERO_PAD {
        return Err(CoreError::InvalidZeroPad(zero_pad));
    }
    Ok(format!("case_{case_number:0zero_pad$}"))
}

pub fn sessions_file_name(case_stem: &str) -> String {
    format!("{case_stem}_sessions_1_6.json")
}

pub fn ccd_by_session_file_name(case_stem: &str) -> String {
    format!("{case_stem}_ccd_by_session.json")
}

pub const FAILURES_SUFFIX: &str = ".fail.jsonl";
