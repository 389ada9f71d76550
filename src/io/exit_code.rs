//! Process exit codes.

use crate::error::{InputError, PaintError};

/// Exit status of the `paintcalc` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    ConfigError = 2,
    /// Input ended before the session finished.
    InputClosed = 3,
    /// Measurements too large to count in cans.
    VolumeOutOfRange = 4,
}

impl ExitCode {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<&PaintError> for ExitCode {
    fn from(error: &PaintError) -> Self {
        match error {
            PaintError::Input(InputError::Closed) => ExitCode::InputClosed,
            PaintError::Input(InputError::Io(_)) => ExitCode::GeneralError,
            PaintError::Packing(_) => ExitCode::VolumeOutOfRange,
            PaintError::Catalog(_) | PaintError::Config(_) => ExitCode::ConfigError,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.code())
    }
}
