//! CLI command implementations

pub mod drop;
pub mod exec;
pub mod show;
