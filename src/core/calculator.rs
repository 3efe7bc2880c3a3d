//! Calculator snapshot and intent types.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable snapshot of the calculator.
///
/// A fresh snapshot shows `"0"`, holds no operand or operator, and expects
/// the next digit to start a new number.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Text of the number being entered or the last computed result.
    pub display_value: String,
    /// Localized message from the last failed parse or compute.
    pub error: Option<String>,
    /// Operand captured when an operator was selected.
    pub first_number: Option<f64>,
    /// Pending operator symbol.
    pub operation: Option<char>,
    /// When set, the next digit replaces the display instead of appending.
    pub new_number: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display_value: "0".to_string(),
            error: None,
            first_number: None,
            operation: None,
            new_number: true,
        }
    }
}

/// Coarse position of a snapshot in the entry cycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Entering,
    Pending,
    Error,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Entering => "Entering",
            Self::Pending => "Pending",
            Self::Error => "Error",
        }
    }
}

impl CalculatorState {
    pub fn phase(&self) -> Phase {
        if self.error.is_some() {
            Phase::Error
        } else if !self.new_number {
            Phase::Entering
        } else if self.operation.is_some() {
            Phase::Pending
        } else {
            Phase::Idle
        }
    }

    /// Whether both halves of a pending binary operation are held.
    pub fn has_pending_operation(&self) -> bool {
        self.first_number.is_some() && self.operation.is_some()
    }
}

impl State for CalculatorState {
    fn name(&self) -> &str {
        self.phase().as_str()
    }

    fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// A discrete user event consumed by the transition function.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Intent {
    /// A digit key, `0..=9`.
    ///
    /// Values above 9 are not rejected: their decimal text is appended to
    /// the display as is, so `25` then `255` shows `"25255"`.
    NumberEntered(u8),
    /// An operator key. Unsupported symbols are accepted here and rejected
    /// when the operation is computed.
    OperatorSelected(char),
    EqualsPressed,
    Cleared,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NumberEntered(_) => "NumberEntered",
            Self::OperatorSelected(_) => "OperatorSelected",
            Self::EqualsPressed => "EqualsPressed",
            Self::Cleared => "Cleared",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumberEntered(digit) => write!(f, "{digit}"),
            Self::OperatorSelected(symbol) => write!(f, "{symbol}"),
            Self::EqualsPressed => write!(f, "="),
            Self::Cleared => write!(f, "C"),
        }
    }
}
