//! CLI library components for the SEO response validator.

pub mod commands;
pub mod logging;
pub mod types;
