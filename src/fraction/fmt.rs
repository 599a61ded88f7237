use std::fmt;

use crate::fraction::Fraction;

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}, {})", self.numerator, self.denominator)
    }
}

// only an exact denominator of 1 drops the slash, `4/2` and `3/-1` print as is
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Fraction::new(1, 2).unwrap().to_string(), "1/2");
        assert_eq!(Fraction::new(4, 1).unwrap().to_string(), "4");
        assert_eq!(Fraction::new(4, 2).unwrap().to_string(), "4/2");
        assert_eq!(Fraction::new(3, -1).unwrap().to_string(), "3/-1");
        assert_eq!(Fraction::new(-7, 1).unwrap().to_string(), "-7");
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Fraction::new(1, 2).unwrap()), "Fraction(1, 2)");
        assert_eq!(format!("{:?}", Fraction::new(4, -8).unwrap()), "Fraction(4, -8)");
    }
}
