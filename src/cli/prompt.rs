//! Interactive numeric prompting.
//!
//! The reader and writer are injected so command code can run against
//! stdin/stdout while tests drive the prompt from a buffer. A value that
//! fails to parse is reported to the operator and treated as a skip; it
//! never fails the run.

use std::io::{BufRead, Write};

/// Prompt for one float. Returns `None` on EOF, blank input, or input
/// that does not parse as a number.
pub fn prompt_float(
    label: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> std::io::Result<Option<f64>> {
    write!(output, "  - {label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    match line.parse::<f64>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            writeln!(output, "Invalid input, skipping...")?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> (Option<f64>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let value = prompt_float("alice", &mut reader, &mut output).unwrap();
        (value, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parses_numeric_input() {
        let (value, output) = prompt("160\n");
        assert_eq!(value, Some(160.0));
        assert!(output.contains("alice"));
    }

    #[test]
    fn non_numeric_input_is_reported_and_skipped() {
        let (value, output) = prompt("lots\n");
        assert_eq!(value, None);
        assert!(output.contains("Invalid input, skipping..."));
    }

    #[test]
    fn blank_and_eof_are_skips() {
        assert_eq!(prompt("\n").0, None);
        assert_eq!(prompt("").0, None);
    }
}
