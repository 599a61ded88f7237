use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::fraction::{Fraction, error::Error, gcd};

// by value, `frac.add(other)` must resolve here and not to `Add::add`
#[allow(clippy::should_implement_trait)]
impl Fraction {
    pub fn add(self, other: Fraction) -> Result<Fraction, Error> {
        let (a, b) = (i128::from(self.numerator), i128::from(self.denominator));
        let (c, d) = (i128::from(other.numerator), i128::from(other.denominator));
        // dividing out gcd(b, d) keeps the cross sum inside i128
        let g = gcd(b.unsigned_abs(), d.unsigned_abs()) as i128;
        let numerator = a * (d / g) + c * (b / g);
        Fraction::from_wide(numerator, b * (d / g))
    }

    pub fn subtract(self, other: Fraction) -> Result<Fraction, Error> {
        self.add(other.additive_inverse()?)
    }

    pub fn multiply(self, other: Fraction) -> Result<Fraction, Error> {
        let numerator = i128::from(self.numerator) * i128::from(other.numerator);
        let denominator = i128::from(self.denominator) * i128::from(other.denominator);
        Fraction::from_wide(numerator, denominator)
    }

    /// Fails with [`Error::InvalidDenominator`] when `other` is zero.
    pub fn divide(self, other: Fraction) -> Result<Fraction, Error> {
        self.multiply(other.multiplicative_inverse()?)
    }
}

// operator forms panic where the named methods return an error,
// the same way integer division by zero does
macro_rules! impl_op {
    ($($trait:ident $fn:ident, $assign_trait:ident $assign_fn:ident => $call:ident;)*) => {
        $(impl $trait for Fraction {
            type Output = Fraction;

            fn $fn(self, other: Fraction) -> Fraction {
                match Fraction::$call(self, other) {
                    Ok(result) => result,
                    Err(err) => panic!("{:?} {} {:?}: {}", self, stringify!($fn), other, err),
                }
            }
        }

        impl $assign_trait for Fraction {
            fn $assign_fn(&mut self, other: Fraction) {
                *self = $trait::$fn(*self, other);
            }
        })*
    };
}

impl_op! {
    Add add, AddAssign add_assign => add;
    Sub sub, SubAssign sub_assign => subtract;
    Mul mul, MulAssign mul_assign => multiply;
    Div div, DivAssign div_assign => divide;
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        match self.additive_inverse() {
            Ok(result) => result,
            Err(err) => panic!("neg {:?}: {}", self, err),
        }
    }
}
