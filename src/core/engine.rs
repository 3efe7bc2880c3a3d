//! Arithmetic engine: two operands and an operator symbol in, a number out.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised by the arithmetic engine.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unknown operator '{0}'")]
    UnknownOperator(char),
}

/// The four supported binary operators.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The symbol this operator is selected with.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Apply the operator with IEEE-754 semantics.
    ///
    /// Division by zero is not an error: it yields `inf`, `-inf` or `NaN`.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = EngineError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == symbol)
            .ok_or(EngineError::UnknownOperator(symbol))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Apply the operator named by `symbol` to `a` and `b`.
///
/// # Example
///
/// ```rust
/// use mvi_calc::core::{apply, EngineError};
///
/// assert_eq!(apply(6.0, 3.0, '/'), Ok(2.0));
/// assert_eq!(apply(1.0, 0.0, '/'), Ok(f64::INFINITY));
/// assert_eq!(apply(1.0, 2.0, 'x'), Err(EngineError::UnknownOperator('x')));
/// ```
pub fn apply(a: f64, b: f64, symbol: char) -> Result<f64, EngineError> {
    Operator::try_from(symbol).map(|op| op.apply(a, b))
}

pub fn add(a: f64, b: f64) -> f64 {
    Operator::Add.apply(a, b)
}

pub fn subtract(a: f64, b: f64) -> f64 {
    Operator::Subtract.apply(a, b)
}

pub fn multiply(a: f64, b: f64) -> f64 {
    Operator::Multiply.apply(a, b)
}

pub fn divide(a: f64, b: f64) -> f64 {
    Operator::Divide.apply(a, b)
}
