//! One interactive estimate, from wall measurements to can list.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::area::{net_area, total_obstruction_area, total_wall_area};
use crate::catalog::{CanSize, Catalog, PaintProduct};
use crate::error::{InputResult, PaintResult};
use crate::io::InputReader;
use crate::io::input::parse_positive_double;
use crate::packing::{CanSelection, pack_cans};
use crate::report::Estimate;

const AUTO_TOKEN: &str = "auto";

/// Answers supplied up front, plus how to treat the computed area.
#[derive(Debug, Clone, Default)]
pub struct EstimateOptions {
    /// Clamp a negative net area to zero before working out litres.
    pub clamp_negative_area: bool,
    /// 1-based catalog index to use instead of asking.
    pub paint: Option<usize>,
    /// Can size answer (`"auto"` or litres) to use instead of asking.
    pub size: Option<String>,
}

/// Interpret a normalised can size answer for `product`.
///
/// Accepts `auto` or any spelling of a listed size (`5`, `5.0`, `5.00`).
pub fn parse_size_selection(product: &PaintProduct, line: &str) -> Option<CanSelection> {
    if line == AUTO_TOKEN {
        return Some(CanSelection::Auto);
    }
    parse_positive_double(line)
        .and_then(CanSize::from_litres)
        .filter(|size| product.has_size(*size))
        .map(CanSelection::Fixed)
}

/// List the catalog and ask for a product by number.
pub fn choose_paint<'a, R: BufRead, W: Write>(
    input: &mut InputReader<R, W>,
    catalog: &'a Catalog,
    preset: Option<usize>,
) -> InputResult<&'a PaintProduct> {
    let product = match preset.and_then(|index| catalog.by_index(index)) {
        Some(product) => product,
        None => {
            if let Some(index) = preset {
                warn!("paint #{index} is not in the catalog, asking instead");
            }
            input.say("\nPlease select a paint:")?;
            for (i, product) in catalog.products().iter().enumerate() {
                input.say(format!("{} - {}", i + 1, product.name))?;
            }
            loop {
                let selection = input.read_positive_integer("Selection: ")?;
                if let Some(product) = catalog.by_index(selection as usize) {
                    break product;
                }
            }
        }
    };

    input.say(format!("You have selected '{}'.", product.name))?;
    Ok(product)
}

/// Ask for one of the product's can sizes, or `auto`.
pub fn choose_can_size<R: BufRead, W: Write>(
    input: &mut InputReader<R, W>,
    product: &PaintProduct,
    preset: Option<&str>,
) -> InputResult<CanSelection> {
    let preset_selection = preset.and_then(|answer| {
        let selection = parse_size_selection(product, &answer.trim().to_lowercase());
        if selection.is_none() {
            warn!("can size '{answer}' is not offered for '{}', asking instead", product.name);
        }
        selection
    });

    let selection = match preset_selection {
        Some(selection) => selection,
        None => {
            input.say("\nPlease select a paint can size (litres).")?;
            input.say("Enter 'auto' to minimise the number of paint cans needed.")?;
            let prompt = format!("Selection {} or 'auto': ", product.size_list());
            input.read_valid(
                &prompt,
                "Invalid input. Please enter a listed size, or 'auto'.",
                |line| parse_size_selection(product, line),
            )?
        }
    };

    if let CanSelection::Fixed(size) = selection {
        input.say(format!("You have selected a {size}L can."))?;
    }
    Ok(selection)
}

/// Run a full session: measure, choose, pack.
///
/// Fails if input ends early or the measurements give a volume too large to
/// count in cans.
pub fn run_estimate<R: BufRead, W: Write>(
    input: &mut InputReader<R, W>,
    catalog: &Catalog,
    options: &EstimateOptions,
) -> PaintResult<Estimate> {
    let wall_area = total_wall_area(input)?;
    let obstruction_area = total_obstruction_area(input)?;
    let mut area = net_area(wall_area, obstruction_area);
    if area < 0.0 {
        warn!("obstructions ({obstruction_area:.2}m²) exceed wall area ({wall_area:.2}m²)");
        if options.clamp_negative_area {
            area = 0.0;
        }
    }

    let product = choose_paint(input, catalog, options.paint)?;
    let selection = choose_can_size(input, product, options.size.as_deref())?;

    let litres_required = product.litres_for(area);
    let cans = pack_cans(product, litres_required, selection)?;
    info!(
        "{area:.2}m² of '{}' needs {litres_required:.2}L: {} cans holding {:.2}L ({selection})",
        product.name,
        cans.total_cans(),
        cans.total_litres()
    );

    Ok(Estimate {
        net_area: area,
        litres_required,
        cans,
    })
}
