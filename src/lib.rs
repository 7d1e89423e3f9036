//! Evaluate polynomials of degree 0 through 3 read from a coefficient file.
//!
//! Each line of the input file is one polynomial: 1 to 4 coefficients ordered
//! from the highest power down, separated by `;`, with either `.` or `,` as
//! the decimal separator. Every polynomial is evaluated at a single point and
//! a formatted description of each result is written to the output file, one
//! line per input line, in input order. Constructed polynomials can also be
//! persisted as tagged records through an injectable sink (`export` module).
//!
//! # Quick start
//!
//! ```no_run
//! use polyeval::export::JsonLinesExporter;
//! use polyeval::pipeline::{self, RunConfig};
//!
//! # fn main() -> polyeval::Result<()> {
//! let config = RunConfig::new("input.txt", "output.txt");
//! let mut exporter = JsonLinesExporter::create("functions.json")?;
//!
//! let summary = pipeline::run(&config, 4.0, Some(&mut exporter))?;
//! println!("wrote {} result lines", summary.lines);
//! # Ok(())
//! # }
//! ```
//!
//! The accompanying binary wires this pipeline to a command-line interface
//! that prompts for the evaluation point on standard input.

pub mod error;
pub mod export;
pub mod io;
pub mod parse;
pub mod pipeline;
pub mod polynomial;

pub use error::{PolyError, Result};
pub use pipeline::{RunConfig, RunSummary};
pub use polynomial::Polynomial;
