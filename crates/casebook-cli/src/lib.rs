pub mod batch;
pub mod config;
pub mod files;
pub mod pipeline;
