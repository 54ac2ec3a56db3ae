//! Errors reported by polynomial construction and access.

use std::error::Error;
use std::fmt;

/// An error arising from constructing or querying a
/// [`Polynomial`](crate::Polynomial).
///
/// All failures are reported synchronously at the offending call; none are
/// downgraded to a default value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolynomialError {
    /// A coefficient sequence was required but absent.
    MissingCoefficients,
    /// A coefficient sequence was present but had no elements.
    EmptyCoefficients,
    /// A requested degree was negative.
    InvalidDegree(isize),
    /// A coefficient index fell outside `0..=degree`.
    IndexOutOfRange { index: usize, degree: usize },
    /// An arithmetic operand was required but absent. Carries the name of
    /// the missing side.
    MissingOperand(&'static str),
}

impl fmt::Display for PolynomialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCoefficients => {
                write!(f, "a coefficient sequence is required but was not provided")
            }
            Self::EmptyCoefficients => {
                write!(f, "a coefficient sequence can not be empty")
            }
            Self::InvalidDegree(degree) => {
                write!(f, "degree can not be negative (got {})", degree)
            }
            Self::IndexOutOfRange { index, degree } => write!(
                f,
                "index {} is out of range for a polynomial of degree {}",
                index, degree,
            ),
            Self::MissingOperand(side) => {
                write!(f, "the {} operand is required but was not provided", side)
            }
        }
    }
}

impl Error for PolynomialError {}
