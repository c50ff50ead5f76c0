//! casebook-core
//!
//! Pure domain types for structured counseling cases and the file naming
//! conventions shared by the batch tools. No parsing and no I/O: this is the
//! shared vocabulary of the casebook system.

pub mod case_files;
pub mod error;
pub mod models;
pub mod ordered_map;
