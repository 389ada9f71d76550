//! Terminal input handling and process exit codes.

pub mod exit_code;
pub mod input;

pub use exit_code::ExitCode;
pub use input::InputReader;
