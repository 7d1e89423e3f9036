//! Coefficient and evaluation-point parsing with locale-neutral decimal handling.

use log::debug;

use crate::error::{PolyError, Result};

/// Splits one input line into floating-point coefficients.
///
/// Fragments are separated by `;` and empty fragments are discarded, so
/// `"1;;2"` and `"2;3;"` parse the same as their compact forms. Each fragment
/// has decimal commas rewritten to decimal points before a culture-invariant
/// parse, letting `"1,5;2,0"` and `"1.5;2.0"` mean the same polynomial.
/// `line_number` is the 1-based position of the line in the input file and is
/// carried into any parse error.
pub fn parse_coefficients(line: &str, line_number: usize) -> Result<Vec<f64>> {
    let mut coefficients = Vec::new();
    for fragment in line.split(';').filter(|fragment| !fragment.is_empty()) {
        let normalized = fragment.trim().replace(',', ".");
        let value = normalized
            .parse::<f64>()
            .map_err(|_| PolyError::invalid_coefficient(line_number, fragment))?;
        coefficients.push(value);
    }
    Ok(coefficients)
}

/// Converts every input line into its coefficient sequence, in input order.
///
/// The first line that fails to parse aborts the whole conversion; nothing is
/// evaluated from a file that contains a malformed coefficient.
pub fn parse_lines(lines: &[String]) -> Result<Vec<Vec<f64>>> {
    debug!("converting {} input lines into coefficient sequences", lines.len());
    let mut sequences = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        sequences.push(parse_coefficients(line, index + 1)?);
    }
    debug!("coefficient conversion finished");
    Ok(sequences)
}

/// Parses the evaluation point read from standard input.
///
/// Unlike coefficient parsing, decimal commas are not normalized here; the
/// point must use a decimal point.
pub fn parse_point(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    trimmed.parse::<f64>().map_err(|_| PolyError::InvalidPoint {
        input: trimmed.to_string(),
    })
}
