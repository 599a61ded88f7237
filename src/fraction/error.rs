#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("The numerator must be an integer.")]
    InvalidNumerator,
    #[error("The denominator must be a non-zero integer.")]
    InvalidDenominator,
    #[error("The result does not fit the integer range.")]
    Overflow,
}
