//! libpoly provides an immutable univariate polynomial value type with
//! tolerance-based normalization, comparison, and rendering.
//!
//! Coefficients are `f64`s indexed by power. Every constructed value is
//! canonical: trailing coefficients smaller in magnitude than the value's
//! tolerance are trimmed away, so two numerically-equal polynomials built
//! from raw lists of different lengths end up with the same degree,
//! rendering, and hash.

mod errors;
pub use errors::PolynomialError;

mod poly;
pub use poly::Polynomial;

mod precision;
pub use precision::{process_precision, DEFAULT_PRECISION, PRECISION_ENV_VAR};

mod proptests;
