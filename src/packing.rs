//! Turning a paint volume into a set of cans.
//!
//! All arithmetic runs on whole millilitres. The required volume is converted
//! once, rounding up with a small tolerance so a value like `2.0000000001`
//! litres does not cost an extra can.

use std::fmt;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::catalog::{CanSize, PaintProduct};
use crate::error::{PackingError, PackingResult};

/// Slack allowed when converting litres to millilitres before rounding up.
const REQUIRED_EPSILON: f64 = 1e-6;

/// Largest volume, in millilitres, that can be packed.
///
/// Beyond 2^53 an `f64` no longer resolves single millilitres, and every can
/// total up to here stays far below `u64::MAX`.
pub const MAX_REQUIRED_MILLILITRES: u64 = 1 << 53;

/// Which can size the user wants to buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanSelection {
    /// Only cans of this size.
    Fixed(CanSize),
    /// Whatever mix of the product's sizes needs the fewest cans.
    Auto,
}

impl fmt::Display for CanSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanSelection::Fixed(size) => write!(f, "{size}L"),
            CanSelection::Auto => f.write_str("auto"),
        }
    }
}

/// Cans to buy, largest size first. Every count is at least one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanBreakdown {
    cans: IndexMap<CanSize, u64>,
}

impl CanBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` cans of `size`. Zero counts are ignored.
    pub fn add(&mut self, size: CanSize, count: u64) {
        if count == 0 {
            return;
        }
        *self.cans.entry(size).or_insert(0) += count;
    }

    pub fn count(&self, size: CanSize) -> u64 {
        self.cans.get(&size).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CanSize, u64)> + '_ {
        self.cans.iter().map(|(size, count)| (*size, *count))
    }

    /// Number of distinct sizes.
    pub fn len(&self) -> usize {
        self.cans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cans.is_empty()
    }

    pub fn total_cans(&self) -> u64 {
        self.cans.values().sum()
    }

    pub fn total_millilitres(&self) -> u64 {
        self.iter()
            .map(|(size, count)| u64::from(size.millilitres()) * count)
            .sum()
    }

    pub fn total_litres(&self) -> f64 {
        self.total_millilitres() as f64 / 1000.0
    }
}

impl FromIterator<(CanSize, u64)> for CanBreakdown {
    fn from_iter<T: IntoIterator<Item = (CanSize, u64)>>(iter: T) -> Self {
        let mut breakdown = Self::new();
        for (size, count) in iter {
            breakdown.add(size, count);
        }
        breakdown
    }
}

/// Whole millilitres needed to hold `litres`, rounded up. Non-positive volumes give zero.
///
/// NaN, infinite and anything above [`MAX_REQUIRED_MILLILITRES`] are refused.
pub fn required_millilitres(litres: f64) -> PackingResult<u64> {
    if litres.is_nan() {
        return Err(PackingError::VolumeOutOfRange { litres });
    }
    if litres <= 0.0 {
        return Ok(0);
    }
    let scaled = (litres * 1000.0 - REQUIRED_EPSILON).ceil();
    if !scaled.is_finite() || scaled > MAX_REQUIRED_MILLILITRES as f64 {
        return Err(PackingError::VolumeOutOfRange { litres });
    }
    Ok(if scaled <= 0.0 { 0 } else { scaled as u64 })
}

/// Work out the cans of `product` needed for `litres_required`.
pub fn pack_cans(
    product: &PaintProduct,
    litres_required: f64,
    selection: CanSelection,
) -> PackingResult<CanBreakdown> {
    let required = required_millilitres(litres_required)?;
    if required == 0 {
        debug!("nothing to pack for {litres_required:.3}L");
        return Ok(CanBreakdown::new());
    }

    let breakdown = match selection {
        CanSelection::Fixed(size) => Some(pack_fixed(required, size)),
        CanSelection::Auto => pack_auto(product, required),
    };
    breakdown.ok_or(PackingError::VolumeOutOfRange {
        litres: litres_required,
    })
}

fn pack_fixed(required: u64, size: CanSize) -> CanBreakdown {
    let count = required.div_ceil(u64::from(size.millilitres()));
    debug!("fixed {size}L cans: {count} for {required}ml");
    std::iter::once((size, count)).collect()
}

fn pack_auto(product: &PaintProduct, required: u64) -> Option<CanBreakdown> {
    let Some(smallest) = product.smallest_size() else {
        warn!("paint '{}' has no can sizes to pack", product.name);
        return Some(CanBreakdown::new());
    };
    let smallest_ml = u64::from(smallest.millilitres());

    // Align to the smallest can first so the greedy pass ends on a can boundary
    let mut remaining = required.div_ceil(smallest_ml).checked_mul(smallest_ml)?;

    let mut sizes = product.sizes.clone();
    sizes.sort_unstable_by(|a, b| b.cmp(a));

    let mut breakdown = CanBreakdown::new();
    for size in sizes {
        let size_ml = u64::from(size.millilitres());
        let count = remaining / size_ml;
        if count == 0 {
            continue;
        }
        debug!("auto {size}L cans: {count}");
        breakdown.add(size, count);
        remaining %= size_ml;
    }

    // Only reachable when some size is not a multiple of the smallest
    if remaining > 0 {
        warn!(
            "{remaining}ml left after packing '{}', adding one {smallest}L can",
            product.name
        );
        breakdown.add(smallest, 1);
    }

    Some(breakdown)
}
