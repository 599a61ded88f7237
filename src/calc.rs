use std::{fmt, str::FromStr};

use crate::{config::Config, fraction::Fraction};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    FractionError(#[from] crate::fraction::error::Error),
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
    #[error("Missing operand for {0}")]
    MissingOperand(Operation),
    #[error("Unexpected operand after {0}")]
    UnexpectedOperand(Operation),
    #[error("Invalid integer operand: {0}")]
    InvalidOperand(String),
    #[error("Usage: fraction <numerator> <denominator> <operation> [<numerator> <denominator>]")]
    Usage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equals,
    NotEquals,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
    AdditiveInverse,
    MultiplicativeInverse,
    Simplify,
    Float,
}

impl Operation {
    pub fn is_unary(&self) -> bool {
        matches!(
            self,
            Operation::AdditiveInverse
                | Operation::MultiplicativeInverse
                | Operation::Simplify
                | Operation::Float
        )
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s {
            "+" | "add" => Operation::Add,
            "-" | "sub" => Operation::Subtract,
            "*" | "x" | "mul" => Operation::Multiply,
            "/" | "div" => Operation::Divide,
            "==" | "eq" => Operation::Equals,
            "!=" | "ne" => Operation::NotEquals,
            "<" | "lt" => Operation::LessThan,
            "<=" | "le" => Operation::LessOrEqual,
            ">" | "gt" => Operation::GreaterThan,
            ">=" | "ge" => Operation::GreaterOrEqual,
            "neg" => Operation::AdditiveInverse,
            "inv" => Operation::MultiplicativeInverse,
            "simplify" => Operation::Simplify,
            "float" => Operation::Float,
            other => return Err(Error::UnknownOperation(other.to_string())),
        };
        Ok(op)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Equals => "==",
            Operation::NotEquals => "!=",
            Operation::LessThan => "<",
            Operation::LessOrEqual => "<=",
            Operation::GreaterThan => ">",
            Operation::GreaterOrEqual => ">=",
            Operation::AdditiveInverse => "neg",
            Operation::MultiplicativeInverse => "inv",
            Operation::Simplify => "simplify",
            Operation::Float => "float",
        };
        write!(f, "{symbol}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Value(Fraction),
    Truth(bool),
    Float(f64),
}

impl Outcome {
    pub fn render(&self, config: &Config) -> String {
        match self {
            Outcome::Value(value) if config.show_float => format!(
                "{value} ≈ {:.precision$}",
                value.to_float(),
                precision = config.precision
            ),
            Outcome::Value(value) => value.to_string(),
            Outcome::Truth(truth) => truth.to_string(),
            Outcome::Float(float) => format!("{float:.precision$}", precision = config.precision),
        }
    }
}

pub fn evaluate(
    left: Fraction,
    operation: Operation,
    right: Option<Fraction>,
) -> Result<Outcome, Error> {
    let outcome = match (operation, right) {
        (Operation::AdditiveInverse, None) => Outcome::Value(left.additive_inverse()?),
        (Operation::MultiplicativeInverse, None) => Outcome::Value(left.multiplicative_inverse()?),
        (Operation::Simplify, None) => Outcome::Value(left.simplify()),
        (Operation::Float, None) => Outcome::Float(left.to_float()),
        (op, Some(_)) if op.is_unary() => return Err(Error::UnexpectedOperand(op)),
        (op, None) => return Err(Error::MissingOperand(op)),
        (Operation::Add, Some(right)) => Outcome::Value(left.add(right)?),
        (Operation::Subtract, Some(right)) => Outcome::Value(left.subtract(right)?),
        (Operation::Multiply, Some(right)) => Outcome::Value(left.multiply(right)?),
        (Operation::Divide, Some(right)) => Outcome::Value(left.divide(right)?),
        (Operation::Equals, Some(right)) => Outcome::Truth(left.equals(&right)),
        (Operation::NotEquals, Some(right)) => Outcome::Truth(left.not_equals(&right)),
        (Operation::LessThan, Some(right)) => Outcome::Truth(left.less_than(&right)),
        (Operation::LessOrEqual, Some(right)) => Outcome::Truth(left.less_or_equal(&right)),
        (Operation::GreaterThan, Some(right)) => Outcome::Truth(left.greater_than(&right)),
        (Operation::GreaterOrEqual, Some(right)) => {
            Outcome::Truth(left.greater_or_equal(&right))
        }
        // unary operations with an operand are rejected above
        (_, Some(_)) => return Err(Error::UnexpectedOperand(operation)),
    };
    log::info!(
        "{left} {operation}{} = {outcome:?}",
        right.map(|r| format!(" {r}")).unwrap_or_default()
    );
    Ok(outcome)
}

fn parse_fraction(numerator: &str, denominator: &str) -> Result<Fraction, Error> {
    let numerator = parse_integer(numerator)?;
    let denominator = parse_integer(denominator)?;
    Ok(Fraction::new(numerator, denominator)?)
}

fn parse_integer(arg: &str) -> Result<i128, Error> {
    arg.trim()
        .parse::<i128>()
        .map_err(|_| Error::InvalidOperand(arg.to_string()))
}

/// Evaluates command line arguments of the form
/// `<numerator> <denominator> <operation> [<numerator> <denominator>]`.
pub fn run<S: AsRef<str>>(args: &[S], config: &Config) -> Result<String, Error> {
    let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
    let (left, operation, right) = match args.as_slice() {
        [n, d, op] => (parse_fraction(n, d)?, op.parse::<Operation>()?, None),
        [n1, d1, op, n2, d2] => (
            parse_fraction(n1, d1)?,
            op.parse::<Operation>()?,
            Some(parse_fraction(n2, d2)?),
        ),
        _ => return Err(Error::Usage),
    };
    Ok(evaluate(left, operation, right)?.render(config))
}
