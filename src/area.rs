//! Collecting wall and obstruction areas from the user.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::InputResult;
use crate::geometry::{Shape, ShapeKind};
use crate::io::InputReader;

/// Prompt for a rectangle's height and width.
pub fn read_rectangle<R: BufRead, W: Write>(input: &mut InputReader<R, W>) -> InputResult<Shape> {
    let height = input.read_positive_double("Height (m): ")?;
    let width = input.read_positive_double("Width (m): ")?;
    Ok(Shape::Rectangle { height, width })
}

/// Prompt for the dimensions a shape of `kind` needs.
pub fn read_shape<R: BufRead, W: Write>(
    input: &mut InputReader<R, W>,
    kind: ShapeKind,
) -> InputResult<Shape> {
    match kind {
        ShapeKind::Rect => read_rectangle(input),
        ShapeKind::Circle => {
            let diameter = input.read_positive_double("Diameter (m): ")?;
            Ok(Shape::Circle { diameter })
        }
        ShapeKind::Ellipse => {
            let axis_a = input.read_positive_double("Height (m): ")?;
            let axis_b = input.read_positive_double("Width (m): ")?;
            Ok(Shape::Ellipse { axis_a, axis_b })
        }
    }
}

/// Ask which shape an obstruction is.
pub fn read_shape_kind<R: BufRead, W: Write>(
    input: &mut InputReader<R, W>,
) -> InputResult<ShapeKind> {
    let tokens = ShapeKind::tokens();
    let prompt = format!("Shape [{}]: ", tokens.join(", "));
    let token = input.read_choice(&prompt, &tokens)?;
    // The choice was checked against the same tokens
    Ok(token
        .parse()
        .unwrap_or_else(|e| unreachable!("validated shape choice failed to parse: {e}")))
}

/// Sum the areas of one or more walls. Always asks for at least one.
pub fn total_wall_area<R: BufRead, W: Write>(input: &mut InputReader<R, W>) -> InputResult<f64> {
    let mut total = 0.0;
    let mut wall = 1;
    loop {
        input.say(format!("How large is wall #{wall}?"))?;
        let area = read_rectangle(input)?.area();
        debug!("wall #{wall}: {area:.3}m²");
        total += area;
        wall += 1;

        if !input.read_yes_no("Are there any more walls?", false)? {
            break;
        }
    }
    Ok(total)
}

/// Sum the areas of windows, doors and the like. Zero if the user has none.
pub fn total_obstruction_area<R: BufRead, W: Write>(
    input: &mut InputReader<R, W>,
) -> InputResult<f64> {
    input.say("")?;
    if !input.read_yes_no("Are there any obstructions (windows, doors, sockets, etc.)?", false)? {
        return Ok(0.0);
    }

    let mut total = 0.0;
    loop {
        input.say("What shape is the obstruction?")?;
        let kind = read_shape_kind(input)?;

        input.say("How large is the obstruction?")?;
        let area = read_shape(input, kind)?.area();
        debug!("obstruction ({kind}): {area:.3}m²");
        total += area;

        if !input.read_yes_no("Are there any more obstructions?", false)? {
            break;
        }
    }
    Ok(total)
}

/// Wall area less obstruction area. Not clamped: can be negative.
pub fn net_area(wall_area: f64, obstruction_area: f64) -> f64 {
    wall_area - obstruction_area
}
