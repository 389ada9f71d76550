//! Paint products and the catalog they are chosen from.
//!
//! Can sizes are held as whole millilitres so that membership checks and the
//! packing arithmetic never compare binary floating point litre values.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

const MILLILITRES_PER_LITRE: f64 = 1000.0;

/// Tolerance when deciding that a litre value sits on a millilitre boundary.
const MILLILITRE_EPSILON: f64 = 1e-6;

/// Size of a single paint can, stored in millilitres.
///
/// Displays in litres. The default precision is one decimal place (`5.0`), and
/// an explicit precision in the format string overrides it (`{:.2}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct CanSize(NonZeroU32);

impl CanSize {
    pub fn from_millilitres(millilitres: u32) -> Option<Self> {
        NonZeroU32::new(millilitres).map(Self)
    }

    /// Convert a litre value, rejecting anything finer than a millilitre.
    pub fn from_litres(litres: f64) -> Option<Self> {
        if !litres.is_finite() || litres <= 0.0 {
            return None;
        }
        let scaled = litres * MILLILITRES_PER_LITRE;
        let rounded = scaled.round();
        if (scaled - rounded).abs() > MILLILITRE_EPSILON || rounded > f64::from(u32::MAX) {
            return None;
        }
        Self::from_millilitres(rounded as u32)
    }

    pub fn millilitres(self) -> u32 {
        self.0.get()
    }

    pub fn litres(self) -> f64 {
        f64::from(self.0.get()) / MILLILITRES_PER_LITRE
    }
}

impl TryFrom<f64> for CanSize {
    type Error = String;

    fn try_from(litres: f64) -> Result<Self, Self::Error> {
        Self::from_litres(litres).ok_or_else(|| {
            format!("invalid can size {litres}: expected a positive number of litres with at most millilitre precision")
        })
    }
}

impl From<CanSize> for f64 {
    fn from(size: CanSize) -> Self {
        size.litres()
    }
}

impl fmt::Display for CanSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(1);
        write!(f, "{:.*}", precision, self.litres())
    }
}

/// A named paint with its coverage rate and the can sizes it is sold in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintProduct {
    pub name: String,

    /// Square metres covered by one litre.
    pub coverage: f64,

    /// Available can sizes. Ascending once the product is part of a [`Catalog`].
    pub sizes: Vec<CanSize>,
}

impl PaintProduct {
    pub fn new(name: impl Into<String>, coverage: f64, sizes: Vec<CanSize>) -> Self {
        Self {
            name: name.into(),
            coverage,
            sizes,
        }
    }

    /// Build a product from litre sizes. Sizes that are not valid litre values are dropped.
    pub fn with_litre_sizes(name: impl Into<String>, coverage: f64, litres: &[f64]) -> Self {
        Self::new(
            name,
            coverage,
            litres.iter().copied().filter_map(CanSize::from_litres).collect(),
        )
    }

    pub fn smallest_size(&self) -> Option<CanSize> {
        self.sizes.iter().copied().min()
    }

    pub fn has_size(&self, size: CanSize) -> bool {
        self.sizes.contains(&size)
    }

    /// Litres of this paint needed to cover `area` square metres.
    pub fn litres_for(&self, area: f64) -> f64 {
        area / self.coverage
    }

    /// Sizes formatted the way the selection prompt lists them: `[0.5, 1.0, 2.5]`.
    pub fn size_list(&self) -> String {
        let sizes: Vec<String> = self.sizes.iter().map(ToString::to_string).collect();
        format!("[{}]", sizes.join(", "))
    }

    fn validate(mut self) -> Result<Self, CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::UnnamedProduct);
        }
        if !self.coverage.is_finite() || self.coverage <= 0.0 {
            return Err(CatalogError::InvalidCoverage {
                product: self.name,
                coverage: self.coverage,
            });
        }
        if self.sizes.is_empty() {
            return Err(CatalogError::NoSizes { product: self.name });
        }

        self.sizes.sort_unstable();
        if let Some(pair) = self.sizes.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(CatalogError::DuplicateSize {
                size: pair[0],
                product: self.name,
            });
        }
        Ok(self)
    }
}

/// The products offered for selection, in display order.
///
/// Built once at startup from configuration and passed to whoever needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<PaintProduct>,
}

impl Catalog {
    /// Validate `products` and sort each product's sizes ascending.
    pub fn new(products: Vec<PaintProduct>) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }
        let products = products
            .into_iter()
            .map(PaintProduct::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { products })
    }

    pub fn products(&self) -> &[PaintProduct] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by its 1-based menu index.
    pub fn by_index(&self, index: usize) -> Option<&PaintProduct> {
        index.checked_sub(1).and_then(|i| self.products.get(i))
    }
}

/// The products shipped with the calculator.
pub fn default_products() -> Vec<PaintProduct> {
    vec![
        PaintProduct::with_litre_sizes("Foo Green", 6.0, &[0.5, 1.0, 2.5, 5.0]),
        PaintProduct::with_litre_sizes("Bar Blue", 6.75, &[1.0, 2.5, 5.0, 10.0]),
        PaintProduct::with_litre_sizes("Baz Beige", 5.5, &[5.0, 10.0, 20.0]),
    ]
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            products: default_products(),
        }
    }
}
