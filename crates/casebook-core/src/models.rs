pub mod case;
pub mod ccd;
pub mod dialogue;
pub mod intake;
pub mod plan;
pub mod session;
