//! Catalog command - list the paints on offer.

use console::style;

use crate::catalog::Catalog;

/// Render the catalog as a numbered table.
pub fn render(catalog: &Catalog) -> String {
    let name_width = catalog
        .products()
        .iter()
        .map(|product| product.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Paint".len());

    let mut lines = vec![format!(
        "{:>3}  {:<name_width$}  {:>13}  Can sizes (L)",
        "#", "Paint", "Coverage"
    )];
    for (i, product) in catalog.products().iter().enumerate() {
        lines.push(format!(
            "{:>3}  {:<name_width$}  {:>8.2} m²/L  {}",
            i + 1,
            product.name,
            product.coverage,
            product.size_list()
        ));
    }
    lines.join("\n")
}

/// Run catalog command - print the configured paints.
pub fn run(catalog: &Catalog) {
    println!("{}", style("Available paints:").cyan().bold());
    println!("{}", render(catalog));
}
