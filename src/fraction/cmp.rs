use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::fraction::Fraction;

impl Fraction {
    // compares a·d with c·b, reversed when exactly one denominator is negative
    fn compare(&self, other: &Fraction) -> Ordering {
        let left = i128::from(self.numerator) * i128::from(other.denominator);
        let right = i128::from(other.numerator) * i128::from(self.denominator);
        let ordering = left.cmp(&right);
        if (self.denominator < 0) != (other.denominator < 0) {
            ordering.reverse()
        } else {
            ordering
        }
    }

    pub fn equals(&self, other: &Fraction) -> bool {
        self.compare(other).is_eq()
    }

    pub fn not_equals(&self, other: &Fraction) -> bool {
        !self.equals(other)
    }

    pub fn less_than(&self, other: &Fraction) -> bool {
        self.compare(other).is_lt()
    }

    pub fn less_or_equal(&self, other: &Fraction) -> bool {
        self.compare(other).is_le()
    }

    pub fn greater_than(&self, other: &Fraction) -> bool {
        self.compare(other).is_gt()
    }

    pub fn greater_or_equal(&self, other: &Fraction) -> bool {
        self.compare(other).is_ge()
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}
