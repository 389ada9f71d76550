//! Validated, line-oriented reads from an interactive session.
//!
//! Every read prints its prompt, takes one line, and normalises it (trimmed,
//! lowercased). Numeric and choice reads keep asking until the answer is
//! acceptable; there is no retry limit. Yes/no reads fall back to a default
//! instead of asking again.
//!
//! The only error a read can return is a failure of the stream itself, most
//! commonly [`InputError::Closed`] when the input ends mid-session.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{InputError, InputResult};

const INVALID_DECIMAL: &str = "Invalid input. Please enter a decimal value greater than zero.";
const INVALID_WHOLE_NUMBER: &str = "Invalid input. Please enter a whole number greater than zero.";

const AFFIRMATIVE: [&str; 4] = ["y", "yes", "yeah", "yep"];
const NEGATIVE: [&str; 4] = ["n", "no", "nah", "nope"];

/// Parse a strictly positive, finite decimal.
pub fn parse_positive_double(line: &str) -> Option<f64> {
    line.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

/// Parse a strictly positive whole number.
pub fn parse_positive_integer(line: &str) -> Option<u32> {
    line.parse::<u32>().ok().filter(|value| *value > 0)
}

/// Interpret a normalised yes/no answer. `None` for anything unrecognised.
pub fn parse_yes_no(line: &str) -> Option<bool> {
    if AFFIRMATIVE.contains(&line) {
        Some(true)
    } else if NEGATIVE.contains(&line) {
        Some(false)
    } else {
        None
    }
}

/// Prompts on `W`, answers from `R`.
///
/// Owns both ends for the length of a session. Use `std::io::stdin().lock()`
/// and `std::io::stdout().lock()` for a terminal, or a `Cursor` and a
/// `Vec<u8>` to script a session.
pub struct InputReader<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> InputReader<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Write a full line of output.
    pub fn say(&mut self, message: impl AsRef<str>) -> InputResult<()> {
        writeln!(self.writer, "{}", message.as_ref())?;
        Ok(())
    }

    /// Write `text` without a newline and flush so it shows before the read blocks.
    pub fn prompt(&mut self, text: &str) -> InputResult<()> {
        write!(self.writer, "{text}")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Read one normalised line.
    pub fn take_line(&mut self) -> InputResult<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(line.trim().to_lowercase())
    }

    /// Prompt until `parse` accepts the answer, printing `error` after each rejection.
    pub fn read_valid<T>(
        &mut self,
        prompt: &str,
        error: &str,
        mut parse: impl FnMut(&str) -> Option<T>,
    ) -> InputResult<T> {
        loop {
            self.prompt(prompt)?;
            let line = self.take_line()?;
            if let Some(value) = parse(&line) {
                return Ok(value);
            }
            debug!("rejected answer {line:?} to {prompt:?}");
            self.say(error)?;
        }
    }

    pub fn read_positive_double(&mut self, prompt: &str) -> InputResult<f64> {
        self.read_valid(prompt, INVALID_DECIMAL, parse_positive_double)
    }

    pub fn read_positive_integer(&mut self, prompt: &str) -> InputResult<u32> {
        self.read_valid(prompt, INVALID_WHOLE_NUMBER, parse_positive_integer)
    }

    /// Ask a yes/no question. Unrecognised or empty answers give `default`.
    pub fn read_yes_no(&mut self, prompt: &str, default: bool) -> InputResult<bool> {
        let hint = if default { "(Y/n)" } else { "(y/N)" };
        self.prompt(&format!("{prompt} {hint} "))?;
        let line = self.take_line()?;
        Ok(parse_yes_no(&line).unwrap_or(default))
    }

    /// Prompt until the answer is one of `allowed`, and return it.
    pub fn read_choice(&mut self, prompt: &str, allowed: &[&str]) -> InputResult<String> {
        let error = format!("Invalid input. Please enter one of [{}].", allowed.join(", "));
        self.read_valid(prompt, &error, |line| allowed.contains(&line).then_some(line.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &str) -> InputReader<Cursor<Vec<u8>>, Vec<u8>> {
        InputReader::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(input: InputReader<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(input.into_parts().1).unwrap()
    }

    #[test]
    fn test_parse_positive_double() {
        assert_eq!(parse_positive_double("2.5"), Some(2.5));
        assert_eq!(parse_positive_double("3"), Some(3.0));
        assert_eq!(parse_positive_double("0"), None);
        assert_eq!(parse_positive_double("-1"), None);
        assert_eq!(parse_positive_double("abc"), None);
        assert_eq!(parse_positive_double(""), None);
        assert_eq!(parse_positive_double("inf"), None);
        assert_eq!(parse_positive_double("nan"), None);
    }

    #[test]
    fn test_parse_positive_integer() {
        assert_eq!(parse_positive_integer("2"), Some(2));
        assert_eq!(parse_positive_integer("0"), None);
        assert_eq!(parse_positive_integer("-2"), None);
        assert_eq!(parse_positive_integer("1.5"), None);
    }

    #[test]
    fn test_take_line_normalises() {
        let mut input = reader("  AuTo \r\n");
        assert_eq!(input.take_line().unwrap(), "auto");
    }

    #[test]
    fn test_take_line_reports_closed_stream() {
        let mut input = reader("");
        assert!(matches!(input.take_line(), Err(InputError::Closed)));
    }

    #[test]
    fn test_read_positive_double_reprompts() {
        let mut input = reader("abc\n-2\n0\n3.5\n");
        assert_eq!(input.read_positive_double("Height (m): ").unwrap(), 3.5);

        let out = output(input);
        assert_eq!(out.matches("Height (m): ").count(), 4);
        assert_eq!(out.matches(INVALID_DECIMAL).count(), 3);
    }

    #[test]
    fn test_read_positive_integer_reprompts() {
        let mut input = reader("one\n1.5\n2\n");
        assert_eq!(input.read_positive_integer("Selection: ").unwrap(), 2);
        assert_eq!(output(input).matches(INVALID_WHOLE_NUMBER).count(), 2);
    }

    #[test]
    fn test_read_positive_double_closed_mid_retry() {
        let mut input = reader("nope\n");
        assert!(matches!(
            input.read_positive_double("Width (m): "),
            Err(InputError::Closed)
        ));
    }

    #[test]
    fn test_read_yes_no() {
        for answer in ["y", "YES", "yeah", " yep "] {
            let mut input = reader(&format!("{answer}\n"));
            assert!(input.read_yes_no("More?", false).unwrap(), "{answer}");
        }
        for answer in ["n", "No", "nah", "nope"] {
            let mut input = reader(&format!("{answer}\n"));
            assert!(!input.read_yes_no("More?", true).unwrap(), "{answer}");
        }
    }

    #[test]
    fn test_read_yes_no_falls_back_silently() {
        let mut input = reader("\nmaybe\n");
        assert!(!input.read_yes_no("More?", false).unwrap());
        assert!(input.read_yes_no("More?", true).unwrap());
        assert_eq!(output(input), "More? (y/N) More? (Y/n) ");
    }

    #[test]
    fn test_read_choice() {
        let mut input = reader("square\nCIRCLE\n");
        let allowed = ["rect", "ellipse", "circle"];
        assert_eq!(input.read_choice("Shape: ", &allowed).unwrap(), "circle");
        assert!(output(input).contains("Invalid input. Please enter one of [rect, ellipse, circle]."));
    }
}
