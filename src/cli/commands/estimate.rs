//! Estimate command - the interactive calculator session.

use std::io::{BufRead, Write};

use crate::catalog::Catalog;
use crate::error::PaintResult;
use crate::io::InputReader;
use crate::session::{EstimateOptions, run_estimate};

/// Run a session against `input`, then print the estimate to the same output.
pub fn run_estimate_with<R: BufRead, W: Write>(
    input: &mut InputReader<R, W>,
    catalog: &Catalog,
    options: &EstimateOptions,
) -> PaintResult<()> {
    let estimate = run_estimate(input, catalog, options)?;
    input.say("")?;
    input.say(estimate.to_string())?;
    Ok(())
}

/// Run estimate command on the terminal.
pub fn run(catalog: &Catalog, options: &EstimateOptions) -> PaintResult<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut input = InputReader::new(stdin.lock(), stdout.lock());
    run_estimate_with(&mut input, catalog, options)
}
