//! Rendering an estimate for the user.

use std::fmt;

use crate::catalog::CanSize;
use crate::packing::CanBreakdown;

fn format_cans(count: u64, size: CanSize) -> String {
    let noun = if count == 1 { "can" } else { "cans" };
    format!("{count}×{size}L {noun}")
}

/// List the cans in a breakdown as an English list: `"A, B and C"`.
///
/// Sizes are shown to one decimal place. An empty breakdown gives an empty string.
pub fn format_can_list(breakdown: &CanBreakdown) -> String {
    let items: Vec<String> = breakdown
        .iter()
        .map(|(size, count)| format_cans(count, size))
        .collect();

    match items.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

/// Result of one calculator run.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    /// Area to paint, in square metres.
    pub net_area: f64,
    pub litres_required: f64,
    pub cans: CanBreakdown,
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "To cover {:.2} square meters of wall, you will require {:.2} litres of paint.",
            self.net_area, self.litres_required
        )?;
        if self.cans.is_empty() {
            write!(f, "You will need no cans.")
        } else {
            write!(f, "You will need {}.", format_can_list(&self.cans))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(entries: &[(f64, u64)]) -> CanBreakdown {
        entries
            .iter()
            .map(|(litres, count)| (CanSize::from_litres(*litres).unwrap(), *count))
            .collect()
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_can_list(&CanBreakdown::new()), "");
    }

    #[test]
    fn test_single_entry() {
        assert_eq!(format_can_list(&breakdown(&[(5.0, 2)])), "2×5.0L cans");
        assert_eq!(format_can_list(&breakdown(&[(5.0, 1)])), "1×5.0L can");
    }

    #[test]
    fn test_two_entries() {
        assert_eq!(
            format_can_list(&breakdown(&[(5.0, 2), (1.0, 1)])),
            "2×5.0L cans and 1×1.0L can"
        );
    }

    #[test]
    fn test_three_and_four_entries() {
        assert_eq!(
            format_can_list(&breakdown(&[(5.0, 1), (2.5, 1), (0.5, 3)])),
            "1×5.0L can, 1×2.5L can and 3×0.5L cans"
        );
        assert_eq!(
            format_can_list(&breakdown(&[(5.0, 1), (2.5, 1), (1.0, 1), (0.5, 1)])),
            "1×5.0L can, 1×2.5L can, 1×1.0L can and 1×0.5L can"
        );
    }

    #[test]
    fn test_formatting_is_repeatable() {
        let cans = breakdown(&[(10.0, 3), (5.0, 1)]);
        assert_eq!(format_can_list(&cans), format_can_list(&cans));
    }

    #[test]
    fn test_estimate_display() {
        let estimate = Estimate {
            net_area: 12.0,
            litres_required: 2.0,
            cans: breakdown(&[(1.0, 2)]),
        };
        assert_eq!(
            estimate.to_string(),
            "To cover 12.00 square meters of wall, you will require 2.00 litres of paint.\n\
             You will need 2×1.0L cans."
        );
    }

    #[test]
    fn test_estimate_display_without_cans() {
        let estimate = Estimate {
            net_area: -3.5,
            litres_required: -0.583_333,
            cans: CanBreakdown::new(),
        };
        assert_eq!(
            estimate.to_string(),
            "To cover -3.50 square meters of wall, you will require -0.58 litres of paint.\n\
             You will need no cans."
        );
    }
}
