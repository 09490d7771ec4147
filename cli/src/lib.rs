//! Simple Migrations CLI
//!
//! A small operator tool around the schema service, driven by the same
//! `simple-migrations-config.json` the library reads.
//!
//! # Commands
//!
//! - `simple-migrations show` - Print the resolved table defaults and connection target
//! - `simple-migrations drop <TABLE>` - Drop a table
//! - `simple-migrations exec <SQL> [--param VALUE]...` - Run one statement and print the result
//!
//! Logging goes through `tracing`; set `--log-level` or `RUST_LOG`, and turn
//! on `logQueries` in the configuration to see every statement under the
//! `query-debug` target.

pub mod commands;
pub mod error;
pub mod output;

pub use error::CliError;
