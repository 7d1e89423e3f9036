//! End-to-end orchestration: read, parse, evaluate, format, write.

use std::path::PathBuf;

use log::{info, warn};

use crate::error::{PolyError, Result};
use crate::export::RecordSink;
use crate::io;
use crate::parse;
use crate::polynomial::Polynomial;

/// Result line substituted when a coefficient sequence has no matching variant.
pub const INVALID_ARGUMENT_COUNT_LINE: &str = "function has an invalid argument count";

/// File locations for a single evaluation run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Input file holding one semicolon-separated coefficient line per polynomial.
    pub input: PathBuf,
    /// Output file receiving one formatted result per input line.
    pub output: PathBuf,
}

impl RunConfig {
    /// Builds a configuration from the two file paths.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Counters describing a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Result lines written, equal to the number of input lines.
    pub lines: usize,
    /// Polynomial records handed to the sink.
    pub exported: usize,
    /// Input lines replaced by the invalid-argument-count diagnostic.
    pub rejected: usize,
}

/// Evaluates every polynomial in the input file at `x` and writes the
/// formatted results to the output file, in input order.
///
/// Each successfully constructed polynomial is offered to `sink` before
/// evaluation when one is supplied. A coefficient sequence with no matching
/// variant is recovered per line by substituting
/// [`INVALID_ARGUMENT_COUNT_LINE`]; every other failure aborts the run before
/// the output file is touched.
pub fn run(
    config: &RunConfig,
    x: f64,
    mut sink: Option<&mut dyn RecordSink>,
) -> Result<RunSummary> {
    let lines = io::read_lines(&config.input)?;
    let sequences = parse::parse_lines(&lines)?;

    let mut results = Vec::with_capacity(sequences.len());
    let mut exported = 0usize;
    let mut rejected = 0usize;

    for (index, coefficients) in sequences.iter().enumerate() {
        match Polynomial::from_coefficients(coefficients) {
            Ok(polynomial) => {
                if let Some(exporter) = sink.as_deref_mut() {
                    exporter.record(&polynomial)?;
                    exported += 1;
                }
                results.push(format_result(&polynomial, x));
            }
            Err(PolyError::UnsupportedCoefficientCount { count }) => {
                warn!(
                    "input line {} has {} coefficients, which matches no polynomial",
                    index + 1,
                    count
                );
                results.push(INVALID_ARGUMENT_COUNT_LINE.to_string());
                rejected += 1;
            }
            Err(err) => return Err(err),
        }
    }

    io::write_lines(&config.output, &results)?;

    let summary = RunSummary {
        lines: results.len(),
        exported,
        rejected,
    };
    info!(
        "evaluated {} of {} input lines at x = {x}",
        summary.lines - summary.rejected,
        summary.lines
    );
    Ok(summary)
}

/// Formats one human-readable result line for a polynomial evaluated at `x`.
fn format_result(polynomial: &Polynomial, x: f64) -> String {
    let value = polynomial.evaluate(x);
    match *polynomial {
        Polynomial::Constant { .. } => format!("value of y(x) = {value} at x = {x}"),
        Polynomial::Linear { a, b } => {
            format!("value of y(x) = {a} * x + {b} = {value} at x = {x}")
        }
        Polynomial::Quadratic { a, b, c } => {
            format!("value of y(x) = {a} * x^2 + {b} * x + {c} = {value} at x = {x}")
        }
        Polynomial::Cubic { a, b, c, d } => {
            format!("value of y(x) = {a} * x^3 + {b} * x^2 + {c} * x + {d} = {value} at x = {x}")
        }
    }
}
