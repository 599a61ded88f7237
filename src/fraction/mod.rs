use serde::{Deserialize, Serialize};

use crate::fraction::error::Error;

mod arith;
mod cmp;
pub mod error;
mod fmt;

pub type Integer = i64;

/// Exact rational number `numerator / denominator`.
///
/// Values are stored as given: construction never reduces to lowest terms and
/// never moves the sign onto the numerator. Arithmetic results are simplified,
/// inverses are not.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawFraction")]
pub struct Fraction {
    numerator: Integer,
    denominator: Integer,
}

#[derive(Deserialize)]
struct RawFraction {
    numerator: Integer,
    denominator: Integer,
}

impl TryFrom<RawFraction> for Fraction {
    type Error = Error;

    fn try_from(raw: RawFraction) -> Result<Self, Self::Error> {
        Fraction::new(raw.numerator, raw.denominator)
    }
}

impl Fraction {
    /// Accepts any integer type; values outside the `i64` range are rejected
    /// with the error of the offending field.
    pub fn new<N, D>(numerator: N, denominator: D) -> Result<Self, Error>
    where
        N: TryInto<Integer>,
        D: TryInto<Integer>,
    {
        let Ok(numerator) = TryInto::<Integer>::try_into(numerator) else {
            log::debug!("Rejected fraction: numerator out of range");
            return Err(Error::InvalidNumerator);
        };
        let Ok(denominator) = TryInto::<Integer>::try_into(denominator) else {
            log::debug!("Rejected fraction {numerator}/?: denominator out of range");
            return Err(Error::InvalidDenominator);
        };
        Self::from_parts(numerator, denominator)
    }

    pub fn from_integer(value: Integer) -> Self {
        Fraction {
            numerator: value,
            denominator: 1,
        }
    }

    fn from_parts(numerator: Integer, denominator: Integer) -> Result<Self, Error> {
        if denominator == 0 {
            log::debug!("Rejected fraction {numerator}/0");
            return Err(Error::InvalidDenominator);
        }
        Ok(Fraction {
            numerator,
            denominator,
        })
    }

    // narrows a wide intermediate result, reducing it first
    fn from_wide(numerator: i128, denominator: i128) -> Result<Self, Error> {
        let (numerator, denominator) = reduce(numerator, denominator);
        match (
            Integer::try_from(numerator),
            Integer::try_from(denominator),
        ) {
            (Ok(numerator), Ok(denominator)) => Self::from_parts(numerator, denominator),
            _ => {
                log::debug!("Fraction overflow: {numerator}/{denominator}");
                Err(Error::Overflow)
            }
        }
    }

    pub fn numerator(&self) -> Integer {
        self.numerator
    }

    pub fn denominator(&self) -> Integer {
        self.denominator
    }

    /// Divides both fields by their greatest common divisor.
    ///
    /// The divisor is non-negative and the division truncates, so the sign of
    /// each field is kept: `1/-2` stays `1/-2`.
    pub fn simplify(&self) -> Fraction {
        let (numerator, denominator) = reduce(self.numerator.into(), self.denominator.into());
        // dividing by a positive gcd never grows either magnitude
        Fraction {
            numerator: numerator as Integer,
            denominator: denominator as Integer,
        }
    }

    pub fn additive_inverse(&self) -> Result<Fraction, Error> {
        let numerator = self.numerator.checked_neg().ok_or(Error::Overflow)?;
        Self::from_parts(numerator, self.denominator)
    }

    /// Fails with [`Error::InvalidDenominator`] for a zero numerator.
    pub fn multiplicative_inverse(&self) -> Result<Fraction, Error> {
        Self::from_parts(self.denominator, self.numerator)
    }

    pub fn to_float(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    // same value with the sign carried by the numerator, in lowest terms
    fn canonical(&self) -> (i128, i128) {
        let (numerator, denominator) = reduce(self.numerator.into(), self.denominator.into());
        if denominator < 0 {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        }
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::from_integer(0)
    }
}

impl From<Integer> for Fraction {
    fn from(value: Integer) -> Self {
        Fraction::from_integer(value)
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn reduce(numerator: i128, denominator: i128) -> (i128, i128) {
    let divisor = gcd(numerator.unsigned_abs(), denominator.unsigned_abs());
    if divisor == 0 {
        return (numerator, denominator);
    }
    // callers never pass i128::MIN, so the divisor fits
    let divisor = divisor as i128;
    (numerator / divisor, denominator / divisor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(numerator: Integer, denominator: Integer) -> Fraction {
        Fraction::new(numerator, denominator).unwrap()
    }

    #[test]
    fn test_new_keeps_fields_verbatim() {
        let f = frac(4, -8);
        assert_eq!(f.numerator(), 4);
        assert_eq!(f.denominator(), -8);
    }

    #[test]
    fn test_new_rejects_zero_denominator() {
        assert_eq!(Fraction::new(1, 0).unwrap_err(), Error::InvalidDenominator);
        assert_eq!(Fraction::new(0, 0).unwrap_err(), Error::InvalidDenominator);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            Fraction::new(u64::MAX, 1).unwrap_err(),
            Error::InvalidNumerator
        );
        assert_eq!(
            Fraction::new(1, i128::MIN).unwrap_err(),
            Error::InvalidDenominator
        );
        // numerator is checked first
        assert_eq!(
            Fraction::new(u64::MAX, 0).unwrap_err(),
            Error::InvalidNumerator
        );
    }

    #[test]
    fn test_simplify() {
        let s = frac(4, 8).simplify();
        assert_eq!((s.numerator(), s.denominator()), (1, 2));
        let s = frac(-4, -8).simplify();
        assert_eq!((s.numerator(), s.denominator()), (-1, -2));
        let s = frac(3, -6).simplify();
        assert_eq!((s.numerator(), s.denominator()), (1, -2));
        let s = frac(0, 7).simplify();
        assert_eq!((s.numerator(), s.denominator()), (0, 1));
    }

    #[test]
    fn test_simplify_extremes() {
        // gcd is 2^63, each field keeps its sign
        let s = frac(Integer::MIN, Integer::MIN).simplify();
        assert_eq!((s.numerator(), s.denominator()), (-1, -1));
        let s = frac(Integer::MIN, 2).simplify();
        assert_eq!((s.numerator(), s.denominator()), (Integer::MIN / 2, 1));
        let s = frac(Integer::MIN, 3).simplify();
        assert_eq!((s.numerator(), s.denominator()), (Integer::MIN, 3));
    }

    #[test]
    fn test_inverses_do_not_simplify() {
        let f = frac(2, 4).additive_inverse().unwrap();
        assert_eq!((f.numerator(), f.denominator()), (-2, 4));
        let f = frac(2, 4).multiplicative_inverse().unwrap();
        assert_eq!((f.numerator(), f.denominator()), (4, 2));
    }

    #[test]
    fn test_inverse_failures() {
        assert_eq!(
            frac(0, 3).multiplicative_inverse().unwrap_err(),
            Error::InvalidDenominator
        );
        assert_eq!(
            frac(Integer::MIN, 1).additive_inverse().unwrap_err(),
            Error::Overflow
        );
    }

    #[test]
    fn test_to_float() {
        assert_eq!(frac(1, 2).to_float(), 0.5);
        assert_eq!(frac(1, -4).to_float(), -0.25);
        assert_eq!(frac(7, 1).to_float(), 7.0);
    }

    #[test]
    fn test_from_wide_overflow() {
        assert_eq!(
            Fraction::from_wide(i128::from(Integer::MAX) + 1, 1).unwrap_err(),
            Error::Overflow
        );
        // reduced before narrowing
        let f = Fraction::from_wide(i128::from(Integer::MAX) * 2, 2).unwrap();
        assert_eq!((f.numerator(), f.denominator()), (Integer::MAX, 1));
    }

    #[test]
    fn test_default() {
        let f = Fraction::default();
        assert_eq!((f.numerator(), f.denominator()), (0, 1));
    }
}
