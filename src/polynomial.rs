//! The closed family of evaluable polynomials, degree zero through three.

use serde::{Deserialize, Serialize};

use crate::error::{PolyError, Result};

/// A polynomial of fixed degree, tagged by variant.
///
/// One variant exists per supported degree, each holding its own coefficients.
/// The serde representation is internally tagged, so a serialized record names
/// the variant alongside its coefficients:
///
/// ```
/// use polyeval::Polynomial;
///
/// let line = Polynomial::Linear { a: 2.0, b: 3.0 };
/// let record = serde_json::to_string(&line).unwrap();
/// assert_eq!(record, r#"{"type":"Linear","a":2.0,"b":3.0}"#);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Polynomial {
    /// f(x) = a
    Constant { a: f64 },
    /// f(x) = a·x + b
    Linear { a: f64, b: f64 },
    /// f(x) = a·x² + b·x + c
    Quadratic { a: f64, b: f64, c: f64 },
    /// f(x) = a·x³ + b·x² + c·x + d
    Cubic { a: f64, b: f64, c: f64, d: f64 },
}

impl Polynomial {
    /// Builds the variant matching the length of a coefficient sequence.
    ///
    /// Coefficients are ordered from the highest power down, as they appear in
    /// the input file. Sequences of zero or more than four coefficients have
    /// no matching variant and are rejected with
    /// [`UnsupportedCoefficientCount`](PolyError::UnsupportedCoefficientCount).
    pub fn from_coefficients(coefficients: &[f64]) -> Result<Self> {
        match *coefficients {
            [a] => Ok(Self::Constant { a }),
            [a, b] => Ok(Self::Linear { a, b }),
            [a, b, c] => Ok(Self::Quadratic { a, b, c }),
            [a, b, c, d] => Ok(Self::Cubic { a, b, c, d }),
            _ => Err(PolyError::UnsupportedCoefficientCount {
                count: coefficients.len(),
            }),
        }
    }

    /// Evaluates the polynomial at `x` using the closed form for its degree.
    ///
    /// Pure and deterministic; IEEE overflow and NaN propagate through the
    /// arithmetic unchanged.
    pub fn evaluate(&self, x: f64) -> f64 {
        match *self {
            Self::Constant { a } => a,
            Self::Linear { a, b } => a * x + b,
            Self::Quadratic { a, b, c } => (a * x + b) * x + c,
            Self::Cubic { a, b, c, d } => ((a * x + b) * x + c) * x + d,
        }
    }

    /// Degree of the polynomial, 0 through 3.
    pub fn degree(&self) -> usize {
        match self {
            Self::Constant { .. } => 0,
            Self::Linear { .. } => 1,
            Self::Quadratic { .. } => 2,
            Self::Cubic { .. } => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn each_variant_matches_its_closed_form() {
        let x = 2.5;

        let constant = Polynomial::from_coefficients(&[4.0]).unwrap();
        assert_relative_eq!(constant.evaluate(x), 4.0);

        let linear = Polynomial::from_coefficients(&[2.0, 3.0]).unwrap();
        assert_relative_eq!(linear.evaluate(x), 2.0 * x + 3.0);

        let quadratic = Polynomial::from_coefficients(&[1.0, -2.0, 0.5]).unwrap();
        assert_relative_eq!(quadratic.evaluate(x), x * x - 2.0 * x + 0.5);

        let cubic = Polynomial::from_coefficients(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_relative_eq!(cubic.evaluate(x), x * x * x + 2.0 * x * x + 3.0 * x + 4.0);
    }

    #[test]
    fn worked_examples_hold() {
        let linear = Polynomial::Linear { a: 2.0, b: 3.0 };
        assert_relative_eq!(linear.evaluate(4.0), 11.0);

        let cubic = Polynomial::Cubic {
            a: 1.0,
            b: 2.0,
            c: 3.0,
            d: 4.0,
        };
        assert_relative_eq!(cubic.evaluate(1.0), 10.0);
    }

    #[test]
    fn unsupported_lengths_are_rejected() {
        let empty = Polynomial::from_coefficients(&[]);
        assert!(matches!(
            empty,
            Err(PolyError::UnsupportedCoefficientCount { count: 0 })
        ));

        let five = Polynomial::from_coefficients(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(matches!(
            five,
            Err(PolyError::UnsupportedCoefficientCount { count: 5 })
        ));
    }

    #[test]
    fn degree_follows_the_variant() {
        assert_eq!(Polynomial::Constant { a: 1.0 }.degree(), 0);
        assert_eq!(Polynomial::Linear { a: 1.0, b: 0.0 }.degree(), 1);
        assert_eq!(
            Polynomial::Cubic {
                a: 1.0,
                b: 0.0,
                c: 0.0,
                d: 0.0
            }
            .degree(),
            3
        );
    }

    #[test]
    fn serialized_records_are_tagged_by_variant() {
        let quadratic = Polynomial::Quadratic {
            a: 1.0,
            b: 2.0,
            c: 3.0,
        };
        let record = serde_json::to_string(&quadratic).unwrap();
        assert_eq!(record, r#"{"type":"Quadratic","a":1.0,"b":2.0,"c":3.0}"#);

        let restored: Polynomial = serde_json::from_str(&record).unwrap();
        assert_eq!(restored, quadratic);
    }
}
