//! An immutable univariate polynomial over `f64` coefficients.

use crate::errors::PolynomialError;
use crate::precision::process_precision;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops;

/// Seed mixed into every polynomial hash.
const HASH_SEED: u64 = 397;

/// An immutable polynomial in one variable with real coefficients.
///
/// `coefficients[i]` is the coefficient of `x^i`. Every instance is kept in
/// canonical form: trailing coefficients whose magnitude is below the
/// instance's tolerance are trimmed at construction, scanning from the
/// highest power downward and never past index 0. A polynomial therefore
/// always holds at least one coefficient, and two values built from raw
/// lists that differ only in a near-zero tail are indistinguishable.
///
/// Instances never change after construction; arithmetic always allocates a
/// freshly normalized result and leaves both operands untouched.
///
/// # Examples
///
/// ```
/// use libpoly::Polynomial;
///
/// let p = Polynomial::new(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(p.degree(), 3);
/// assert_eq!(p.to_string(), "x^0 + 2x^1 + 3x^2 + 4x^3");
/// ```
#[derive(Clone, Debug)]
pub struct Polynomial {
    /// Coefficients in ascending order of power, canonical per `precision`.
    coefficients: Vec<f64>,
    /// Tolerance governing trimming, comparison, and rendering for this
    /// instance.
    precision: f64,
}

/// Creates a polynomial from a literal coefficient list, using the
/// process-wide tolerance.
///
/// # Examples
///
/// ```
/// use libpoly::poly;
///
/// let p = poly![1.0, 2.0, -4.0]; // 1 + 2x - 4x^2
/// assert_eq!(p.degree(), 2);
/// ```
#[macro_export]
macro_rules! poly {
    ($($x:expr),+ $(,)?) => (
        // The macro shape guarantees at least one coefficient, so
        // construction can not fail.
        $crate::Polynomial::new(&[$($x as f64),+]).unwrap()
    );
}

impl Polynomial {
    /// Constructs a polynomial from coefficients ordered by ascending power,
    /// using the process-wide tolerance.
    ///
    /// Trailing coefficients with magnitude below the tolerance are trimmed;
    /// the coefficient at index 0 always survives.
    ///
    /// Fails with [`PolynomialError::EmptyCoefficients`] if `coefficients`
    /// has no elements.
    pub fn new(coefficients: &[f64]) -> Result<Self, PolynomialError> {
        Self::with_precision(coefficients, process_precision())
    }

    /// Like [`Polynomial::new`], but with an explicit tolerance that the
    /// instance carries for all later trimming, comparison, and rendering
    /// decisions.
    pub fn with_precision(
        coefficients: &[f64],
        precision: f64,
    ) -> Result<Self, PolynomialError> {
        if coefficients.is_empty() {
            return Err(PolynomialError::EmptyCoefficients);
        }
        Ok(Self::normalized(coefficients.to_vec(), precision))
    }

    /// Constructs a polynomial from a coefficient sequence that may be
    /// absent, distinguishing the absent case
    /// ([`PolynomialError::MissingCoefficients`]) from the empty one
    /// ([`PolynomialError::EmptyCoefficients`]).
    pub fn from_optional(coefficients: Option<&[f64]>) -> Result<Self, PolynomialError> {
        match coefficients {
            Some(coefficients) => Self::new(coefficients),
            None => Err(PolynomialError::MissingCoefficients),
        }
    }

    /// Constructs the polynomial of the given degree whose `degree + 1`
    /// coefficients are all `1.0`.
    ///
    /// This is a convenience constructor, not a zero polynomial; callers
    /// wanting an all-zero polynomial of a given degree must build it from
    /// an explicit list.
    ///
    /// Fails with [`PolynomialError::InvalidDegree`] if `degree` is
    /// negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use libpoly::Polynomial;
    ///
    /// let p = Polynomial::of_degree(5).unwrap();
    /// assert_eq!(p.to_string(), "x^0 + x^1 + x^2 + x^3 + x^4 + x^5");
    /// ```
    pub fn of_degree(degree: isize) -> Result<Self, PolynomialError> {
        Self::of_degree_with_precision(degree, process_precision())
    }

    /// Like [`Polynomial::of_degree`], but with an explicit tolerance.
    pub fn of_degree_with_precision(
        degree: isize,
        precision: f64,
    ) -> Result<Self, PolynomialError> {
        if degree < 0 {
            return Err(PolynomialError::InvalidDegree(degree));
        }
        Ok(Self {
            coefficients: vec![1.0; degree as usize + 1],
            precision,
        })
    }

    /// Trims the near-zero tail of a non-empty coefficient list, stopping at
    /// the first coefficient (from the top) with magnitude at or above the
    /// tolerance, or at index 0.
    fn normalized(mut coefficients: Vec<f64>, precision: f64) -> Self {
        debug_assert!(!coefficients.is_empty());
        let mut len = coefficients.len();
        while len > 1 && coefficients[len - 1].abs() < precision {
            len -= 1;
        }
        coefficients.truncate(len);
        Self {
            coefficients,
            precision,
        }
    }

    /// Gets the degree of the polynomial.
    #[inline]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Gets the tolerance this instance was constructed with.
    #[inline]
    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// Returns the coefficient of `x^index`.
    ///
    /// Fails with [`PolynomialError::IndexOutOfRange`] if `index` exceeds
    /// the degree.
    pub fn coefficient(&self, index: usize) -> Result<f64, PolynomialError> {
        if index > self.degree() {
            return Err(PolynomialError::IndexOutOfRange {
                index,
                degree: self.degree(),
            });
        }
        Ok(self.coefficients[index])
    }

    /// Returns an independent copy of the full coefficient sequence, length
    /// `degree + 1`. Mutating the copy never affects this instance.
    pub fn coefficients(&self) -> Vec<f64> {
        self.coefficients.clone()
    }

    /// Whether this is the zero polynomial: degree 0 with a near-zero sole
    /// coefficient.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.degree() == 0 && self.coefficients[0].abs() < self.precision
    }

    /// Evaluates the polynomial at `x` by Horner's rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use libpoly::poly;
    ///
    /// // (x^2 - 4)(1) -> -3
    /// assert_eq!(poly![-4.0, 0.0, 1.0].eval(1.0), -3.0);
    /// ```
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }

    /// Adds `other` to `self`, yielding a freshly normalized polynomial
    /// carrying `self`'s tolerance.
    pub fn add(&self, other: &Self) -> Self {
        self.combine(other, |base, c| base + c)
    }

    /// Subtracts `other` from `self`, yielding a freshly normalized
    /// polynomial carrying `self`'s tolerance.
    ///
    /// Not commutative. The result buffer is seeded from `self`'s
    /// coefficients zero-extended to `max(degree, other.degree) + 1`, and
    /// `other`'s coefficients are then subtracted over `other`'s own index
    /// range only. When `other` has the higher degree its top coefficients
    /// are subtracted from zero padding; this base-selection asymmetry is
    /// intentional.
    pub fn sub(&self, other: &Self) -> Self {
        self.combine(other, |base, c| base - c)
    }

    /// Multiplies `self` by `other` via discrete convolution, yielding a
    /// freshly normalized polynomial carrying `self`'s tolerance.
    pub fn mul(&self, other: &Self) -> Self {
        // One slot wider than the true product needs; normalization trims
        // the guaranteed-zero top slot, bottoming out at length 1 when both
        // operands are zero.
        let mut result = vec![0.0; self.degree() + other.degree() + 2];
        for (i, a) in self.coefficients.iter().enumerate() {
            for (j, b) in other.coefficients.iter().enumerate() {
                result[i + j] += a * b;
            }
        }
        Self::normalized(result, self.precision)
    }

    /// Fallible addition over possibly-absent operands.
    ///
    /// Fails with [`PolynomialError::MissingOperand`] naming the side that
    /// was `None`.
    pub fn try_add(lhs: Option<&Self>, rhs: Option<&Self>) -> Result<Self, PolynomialError> {
        let (lhs, rhs) = Self::required(lhs, rhs)?;
        Ok(lhs.add(rhs))
    }

    /// Fallible subtraction over possibly-absent operands.
    pub fn try_sub(lhs: Option<&Self>, rhs: Option<&Self>) -> Result<Self, PolynomialError> {
        let (lhs, rhs) = Self::required(lhs, rhs)?;
        Ok(lhs.sub(rhs))
    }

    /// Fallible multiplication over possibly-absent operands.
    pub fn try_mul(lhs: Option<&Self>, rhs: Option<&Self>) -> Result<Self, PolynomialError> {
        let (lhs, rhs) = Self::required(lhs, rhs)?;
        Ok(lhs.mul(rhs))
    }

    fn required<'a>(
        lhs: Option<&'a Self>,
        rhs: Option<&'a Self>,
    ) -> Result<(&'a Self, &'a Self), PolynomialError> {
        let lhs = lhs.ok_or(PolynomialError::MissingOperand("lhs"))?;
        let rhs = rhs.ok_or(PolynomialError::MissingOperand("rhs"))?;
        Ok((lhs, rhs))
    }

    /// Shared shape of addition and subtraction: seed the result from
    /// `self`'s coefficients zero-extended to the longer length, then apply
    /// `other`'s coefficients over `other`'s own index range.
    fn combine(&self, other: &Self, apply: impl Fn(f64, f64) -> f64) -> Self {
        let len = self.coefficients.len().max(other.coefficients.len());
        let mut result = vec![0.0; len];
        result[..self.coefficients.len()].copy_from_slice(&self.coefficients);
        for (i, &c) in other.coefficients.iter().enumerate() {
            result[i] = apply(result[i], c);
        }
        Self::normalized(result, self.precision)
    }
}

/// Tolerance equality: degrees must match exactly, and every pair of
/// coefficients must differ by at most the receiver's tolerance.
///
/// This relation is reflexive and symmetric but intentionally not
/// transitive (`a ≈ b` and `b ≈ c` do not imply `a ≈ c`), which is why
/// `Polynomial` does not implement `Eq`.
impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        if self.degree() != other.degree() {
            return false;
        }
        self.coefficients
            .iter()
            .zip(other.coefficients.iter())
            .all(|(a, b)| (a - b).abs() <= self.precision)
    }
}

/// Hashes a fixed seed, the bit pattern of every coefficient, and the
/// degree.
///
/// Two separately constructed polynomials hash equally whenever their
/// normalized coefficients are bit-for-bit identical. Tolerance-equal
/// values that are not bit-identical may hash apart; that gap is part of
/// the documented contract.
impl Hash for Polynomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        HASH_SEED.hash(state);
        for c in &self.coefficients {
            c.to_bits().hash(state);
        }
        self.degree().hash(state);
    }
}

/// Renders the polynomial as `" + "`-joined terms in ascending power.
///
/// Near-zero coefficients are omitted; coefficients within tolerance of
/// `1.0` render as a bare `x^i`. The zero polynomial renders as `"0"`.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let mut first = true;
        for (i, &c) in self.coefficients.iter().enumerate() {
            if c.abs() < self.precision {
                continue;
            }
            if !first {
                f.write_str(" + ")?;
            }
            if (c - 1.0).abs() < self.precision {
                write!(f, "x^{}", i)?;
            } else {
                write!(f, "{}x^{}", c, i)?;
            }
            first = false;
        }
        Ok(())
    }
}

impl ops::Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Polynomial {
        Polynomial::add(self, rhs)
    }
}

impl ops::Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Polynomial {
        Polynomial::add(&self, &rhs)
    }
}

impl ops::Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Self) -> Polynomial {
        Polynomial::sub(self, rhs)
    }
}

impl ops::Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Self) -> Polynomial {
        Polynomial::sub(&self, &rhs)
    }
}

impl ops::Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Polynomial {
        Polynomial::mul(self, rhs)
    }
}

impl ops::Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Polynomial {
        Polynomial::mul(&self, &rhs)
    }
}
