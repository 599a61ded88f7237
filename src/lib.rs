pub mod calc;
pub mod config;
pub mod fraction;

pub use fraction::{Fraction, Integer, error::Error};
