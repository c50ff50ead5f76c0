//! casebook-oracle
//!
//! Generation and extraction stages that run on top of structured cases by
//! calling a text-completion oracle: strict JSON response handling, CCD
//! extraction, and six-session generation. The oracle itself is supplied by
//! the caller through the [`oracle::Oracle`] trait.

pub mod ccd;
pub mod error;
pub mod oracle;
pub mod sessions;
pub mod strict;
