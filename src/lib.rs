//! Paint calculator.
//!
//! Works out how much paint a set of walls needs once windows, doors and
//! other obstructions are taken away, and which cans of a chosen product
//! to buy.

pub mod area;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod logging;
pub mod packing;
pub mod report;
pub mod session;

pub use catalog::{CanSize, Catalog, PaintProduct};
pub use config::Settings;
pub use error::{CatalogError, InputError, PackingError, PaintError, PaintResult};
pub use geometry::{Shape, ShapeKind};
pub use io::{ExitCode, InputReader};
pub use packing::{CanBreakdown, CanSelection, pack_cans};
pub use report::{Estimate, format_can_list};
pub use session::{EstimateOptions, run_estimate};
