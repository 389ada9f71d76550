//! Error types for the paint calculator.
//!
//! Malformed user input never shows up here: the input reader recovers from it
//! by re-prompting. What remains are the failures a session cannot continue
//! past.

use thiserror::Error;

use crate::catalog::CanSize;

/// Failures reading from the interactive input stream.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input stream closed before an answer was given")]
    Closed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A configured paint catalog that cannot be used for an estimate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Paint catalog is empty")]
    Empty,

    #[error("Paint product has no name")]
    UnnamedProduct,

    #[error("Paint '{product}' has no can sizes")]
    NoSizes { product: String },

    #[error("Paint '{product}' has invalid coverage {coverage} (must be a positive number of m² per litre)")]
    InvalidCoverage { product: String, coverage: f64 },

    #[error("Paint '{product}' lists the {size}L can more than once")]
    DuplicateSize { product: String, size: CanSize },
}

/// A paint volume that cannot be turned into a whole number of cans.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PackingError {
    #[error("Cannot count cans for {litres:.2} litres of paint: the volume is out of range")]
    VolumeOutOfRange { litres: f64 },
}

/// Top-level error for a calculator run.
#[derive(Error, Debug)]
pub enum PaintError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Packing(#[from] PackingError),

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

pub type InputResult<T> = Result<T, InputError>;
pub type PackingResult<T> = Result<T, PackingError>;
pub type PaintResult<T> = Result<T, PaintError>;
