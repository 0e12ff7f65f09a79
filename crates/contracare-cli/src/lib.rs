//! contracare-cli library root.
//!
//! Exposes the command-line surface, config handling and command execution
//! so integration tests can drive them without spawning the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
