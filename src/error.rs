use std::path::{Path, PathBuf};

use thiserror::Error;

/// Unified error type for `polyeval` operations.
#[derive(Debug, Error)]
pub enum PolyError {
    /// Raised when the evaluation point read from standard input is not a number.
    #[error("invalid evaluation point `{input}`")]
    InvalidPoint {
        /// The rejected input, trimmed of surrounding whitespace.
        input: String,
    },

    /// Raised when a file operation fails.
    #[error("failed to {context} `{}`", .path.display())]
    Io {
        /// Human-readable description of the attempted operation.
        context: &'static str,
        /// Path the operation was applied to.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Raised when the evaluation point cannot be read from standard input.
    #[error("failed to read the evaluation point from standard input")]
    Stdin(#[source] std::io::Error),

    /// Raised when an input line is blank or carries no content to parse.
    #[error("input line {line_number} is blank or contains no coefficients")]
    InvalidLine { line_number: usize },

    /// Raised when the input file holds no lines at all.
    #[error("input file is empty; there is nothing to evaluate")]
    EmptyInput,

    /// Raised when a coefficient token is not a valid number.
    #[error("invalid coefficient `{token}` on input line {line_number}")]
    InvalidCoefficient {
        /// 1-based line number in the input file.
        line_number: usize,
        /// The offending fragment, exactly as it appeared between separators.
        token: String,
    },

    /// Raised when a coefficient sequence has no matching polynomial variant.
    #[error("unsupported coefficient count {count}; a polynomial takes 1 to 4")]
    UnsupportedCoefficientCount { count: usize },

    /// Raised when a polynomial record cannot be serialized.
    #[error("failed to serialize polynomial record")]
    Serialize(#[from] serde_json::Error),
}

impl PolyError {
    /// Helper to wrap an I/O failure with the operation and path it belongs to.
    pub fn io(context: &'static str, path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            context,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Helper to reject a coefficient token, keeping the 1-based line number.
    pub fn invalid_coefficient(line_number: usize, token: &str) -> Self {
        Self::InvalidCoefficient {
            line_number,
            token: token.to_string(),
        }
    }
}

/// Type alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, PolyError>;
