//! Command implementations for the CLI.
//!
//! Each command is implemented in its own module.

pub mod catalog;
pub mod estimate;
pub mod init;
