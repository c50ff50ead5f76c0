//! casebook-parse
//!
//! Deterministic structuring of free-text counseling records. Every function
//! here is pure: no I/O, no shared state, identical output for identical
//! input. Malformed lines are folded into the nearest open block or dropped,
//! never reported as errors.

pub mod accumulate;
pub mod dialogue;
pub mod error;
pub mod intake;
pub mod kv;
pub mod normalize;
pub mod plan;
pub mod sections;
pub mod transform;

pub use dialogue::structure_dialogue;
pub use intake::structure_intake;
pub use plan::itemize_plan;
pub use transform::transform_case;
