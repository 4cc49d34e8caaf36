//! pgen-console: compose, suggest and submit pgen-rs commands
//!
//! Builds `pgen-rs query` / `pgen-rs filter` command lines from two optional
//! predicate clauses, fetches AI suggestions for those clauses, and submits the
//! assembled command to an execution backend.

pub mod cli;
pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod pfile;
pub mod view;
