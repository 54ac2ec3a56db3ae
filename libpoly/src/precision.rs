//! The process-wide default comparison tolerance.
//!
//! Constructors that do not take an explicit tolerance use a single value
//! fixed for the lifetime of the process: the `POLY_PRECISION` environment
//! variable if it holds a usable number, and [`DEFAULT_PRECISION`]
//! otherwise. The variable is read exactly once, on first use.

use lazy_static::lazy_static;

/// The tolerance used when none is configured: `1e-7`.
pub const DEFAULT_PRECISION: f64 = 1e-7;

/// Name of the environment variable supplying the process-wide tolerance.
pub const PRECISION_ENV_VAR: &str = "POLY_PRECISION";

lazy_static! {
    static ref PROCESS_PRECISION: f64 =
        parse_precision(std::env::var(PRECISION_ENV_VAR).ok());
}

/// Returns the tolerance configured for this process.
///
/// Fixed after the first call; later changes to the environment have no
/// effect.
pub fn process_precision() -> f64 {
    *PROCESS_PRECISION
}

/// Interprets a raw tolerance setting, falling back to [`DEFAULT_PRECISION`]
/// when the setting is absent, unparseable, non-finite, or negative.
fn parse_precision(raw: Option<String>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|p| p.is_finite() && *p >= 0.0)
        .unwrap_or(DEFAULT_PRECISION)
}
