//! The calculator transition function.
//!
//! `transition` is total: parse and compute failures are folded into the
//! `error` field of the returned snapshot and never escape as `Err` or panic.

use super::calculator::{CalculatorState, Intent};
use super::engine::{self, EngineError};
use super::state::Reducer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The two error kinds surfaced to the presentation layer.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidInput,
    Calculation,
}

/// Failures raised while applying an intent.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalcError {
    #[error("'{0}' is not a number")]
    InvalidInput(String),

    #[error("second operand '{0}' is not a number")]
    InvalidOperand(String),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::InvalidOperand(_) | Self::Engine(_) => ErrorKind::Calculation,
        }
    }
}

/// Localized error messages written into `CalculatorState::error`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Messages {
    pub invalid_input: String,
    pub calculation_error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            invalid_input: "invalid input".to_string(),
            calculation_error: "calculation error".to_string(),
        }
    }
}

impl Messages {
    pub fn russian() -> Self {
        Self {
            invalid_input: "Неверный ввод".to_string(),
            calculation_error: "Ошибка вычисления".to_string(),
        }
    }

    pub fn message(&self, kind: ErrorKind) -> &str {
        match kind {
            ErrorKind::InvalidInput => &self.invalid_input,
            ErrorKind::Calculation => &self.calculation_error,
        }
    }
}

/// Parse display text as an operand.
pub fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok()
}

/// Render a computed value for the display.
///
/// Uses the `Debug` rendering of `f64`, which keeps a fractional part on
/// integral values (`8.0`) and prints `inf`, `-inf` and `NaN` as is.
pub fn format_number(value: f64) -> String {
    format!("{value:?}")
}

/// Apply `intent` to `state` using the default English messages.
///
/// # Example
///
/// ```rust
/// use mvi_calc::core::{transition, CalculatorState, Intent};
///
/// let state = [
///     Intent::NumberEntered(5),
///     Intent::OperatorSelected('+'),
///     Intent::NumberEntered(3),
///     Intent::EqualsPressed,
/// ]
/// .iter()
/// .fold(CalculatorState::default(), |state, intent| transition(&state, intent));
///
/// assert_eq!(state.display_value, "8.0");
/// assert!(state.error.is_none());
/// ```
pub fn transition(state: &CalculatorState, intent: &Intent) -> CalculatorState {
    transition_with(&Messages::default(), state, intent)
}

/// Apply `intent` to `state`, writing failures with `messages`.
pub fn transition_with(
    messages: &Messages,
    state: &CalculatorState,
    intent: &Intent,
) -> CalculatorState {
    let outcome = match *intent {
        Intent::NumberEntered(digit) => Ok(enter_digit(state, digit)),
        Intent::OperatorSelected(symbol) => select_operator(state, symbol),
        Intent::EqualsPressed => evaluate(state),
        Intent::Cleared => Ok(CalculatorState::default()),
    };

    outcome.unwrap_or_else(|err| CalculatorState {
        error: Some(messages.message(err.kind()).to_string()),
        ..state.clone()
    })
}

fn enter_digit(state: &CalculatorState, digit: u8) -> CalculatorState {
    // No decimal-point or length checks: digits are plain text concatenation.
    let display_value = if state.new_number || state.display_value == "0" {
        digit.to_string()
    } else {
        format!("{}{}", state.display_value, digit)
    };

    CalculatorState {
        display_value,
        new_number: false,
        error: None,
        ..state.clone()
    }
}

fn select_operator(state: &CalculatorState, symbol: char) -> Result<CalculatorState, CalcError> {
    let first = parse_number(&state.display_value)
        .ok_or_else(|| CalcError::InvalidInput(state.display_value.clone()))?;

    Ok(CalculatorState {
        first_number: Some(first),
        operation: Some(symbol),
        new_number: true,
        error: None,
        ..state.clone()
    })
}

fn evaluate(state: &CalculatorState) -> Result<CalculatorState, CalcError> {
    let (Some(first), Some(symbol)) = (state.first_number, state.operation) else {
        return Ok(state.clone());
    };

    let second = parse_number(&state.display_value)
        .ok_or_else(|| CalcError::InvalidOperand(state.display_value.clone()))?;
    let result = engine::apply(first, second, symbol)?;

    // Operand and operator stay in place, so a repeated `=` reapplies them.
    Ok(CalculatorState {
        display_value: format_number(result),
        new_number: true,
        error: None,
        ..state.clone()
    })
}

/// [`Reducer`] over [`CalculatorState`] with configurable messages.
#[derive(Clone, Debug, Default)]
pub struct CalculatorReducer {
    messages: Messages,
}

impl CalculatorReducer {
    pub fn new(messages: Messages) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }
}

impl Reducer for CalculatorReducer {
    type State = CalculatorState;
    type Intent = Intent;

    fn initial(&self) -> CalculatorState {
        CalculatorState::default()
    }

    fn reduce(&self, state: &CalculatorState, intent: &Intent) -> CalculatorState {
        transition_with(&self.messages, state, intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(intents: &[Intent]) -> CalculatorState {
        intents
            .iter()
            .fold(CalculatorState::default(), |state, intent| {
                transition(&state, intent)
            })
    }

    fn garbage() -> CalculatorState {
        CalculatorState {
            display_value: "abc".to_string(),
            new_number: false,
            ..CalculatorState::default()
        }
    }

    #[test]
    fn first_digit_replaces_zero() {
        let state = run(&[Intent::NumberEntered(7)]);
        assert_eq!(state.display_value, "7");
        assert!(!state.new_number);
    }

    #[test]
    fn digits_concatenate() {
        let state = run(&[
            Intent::NumberEntered(1),
            Intent::NumberEntered(0),
            Intent::NumberEntered(2),
        ]);
        assert_eq!(state.display_value, "102");
    }

    #[test]
    fn out_of_range_digits_are_appended_as_text() {
        let state = run(&[Intent::NumberEntered(25), Intent::NumberEntered(255)]);
        assert_eq!(state.display_value, "25255");
        assert!(state.error.is_none());
    }

    #[test]
    fn leading_zero_is_replaced_even_mid_entry() {
        let state = run(&[Intent::NumberEntered(0), Intent::NumberEntered(4)]);
        assert_eq!(state.display_value, "4");
    }

    #[test]
    fn digit_clears_error() {
        let failed = transition(&garbage(), &Intent::OperatorSelected('+'));
        assert!(failed.error.is_some());
        let recovered = transition(&failed, &Intent::NumberEntered(3));
        assert!(recovered.error.is_none());
        assert_eq!(recovered.display_value, "abc3");
    }

    #[test]
    fn operator_captures_first_number() {
        let state = run(&[
            Intent::NumberEntered(1),
            Intent::NumberEntered(2),
            Intent::OperatorSelected('*'),
        ]);
        assert_eq!(state.first_number, Some(12.0));
        assert_eq!(state.operation, Some('*'));
        assert!(state.new_number);
        assert_eq!(state.display_value, "12");
    }

    #[test]
    fn operator_on_unparsable_display_reports_invalid_input() {
        let before = garbage();
        let after = transition(&before, &Intent::OperatorSelected('+'));
        assert_eq!(after.error.as_deref(), Some("invalid input"));
        assert_eq!(
            CalculatorState {
                error: None,
                ..after
            },
            before
        );
    }

    #[test]
    fn equals_without_pending_operation_is_noop() {
        let state = run(&[Intent::NumberEntered(9)]);
        assert_eq!(transition(&state, &Intent::EqualsPressed), state);
    }

    #[test]
    fn equals_computes_and_keeps_operation() {
        let state = run(&[
            Intent::NumberEntered(5),
            Intent::OperatorSelected('-'),
            Intent::NumberEntered(3),
            Intent::EqualsPressed,
        ]);
        assert_eq!(state.display_value, "2.0");
        assert_eq!(state.first_number, Some(5.0));
        assert_eq!(state.operation, Some('-'));
        assert!(state.new_number);
    }

    #[test]
    fn repeated_equals_reuses_stale_operand() {
        let state = run(&[
            Intent::NumberEntered(5),
            Intent::OperatorSelected('-'),
            Intent::NumberEntered(3),
            Intent::EqualsPressed,
            Intent::EqualsPressed,
        ]);
        // 5 - 2.0
        assert_eq!(state.display_value, "3.0");
    }

    #[test]
    fn unknown_operator_fails_at_equals() {
        let selected = run(&[Intent::NumberEntered(1), Intent::OperatorSelected('x')]);
        assert!(selected.error.is_none());
        let state = transition(&selected, &Intent::EqualsPressed);
        assert_eq!(state.error.as_deref(), Some("calculation error"));
        assert_eq!(state.display_value, selected.display_value);
    }

    #[test]
    fn unparsable_second_operand_is_calculation_error() {
        let state = CalculatorState {
            first_number: Some(1.0),
            operation: Some('+'),
            ..garbage()
        };
        let after = transition(&state, &Intent::EqualsPressed);
        assert_eq!(after.error.as_deref(), Some("calculation error"));
    }

    #[test]
    fn divide_by_zero_renders_infinity() {
        let state = run(&[
            Intent::NumberEntered(5),
            Intent::OperatorSelected('/'),
            Intent::NumberEntered(0),
            Intent::EqualsPressed,
        ]);
        assert_eq!(state.display_value, "inf");
        assert!(state.error.is_none());
    }

    #[test]
    fn zero_by_zero_renders_nan() {
        let state = run(&[Intent::OperatorSelected('/'), Intent::EqualsPressed]);
        assert_eq!(state.display_value, "NaN");
    }

    #[test]
    fn digit_after_result_starts_new_number() {
        let state = run(&[
            Intent::NumberEntered(2),
            Intent::OperatorSelected('+'),
            Intent::NumberEntered(2),
            Intent::EqualsPressed,
            Intent::NumberEntered(7),
        ]);
        assert_eq!(state.display_value, "7");
    }

    #[test]
    fn clear_resets_everything() {
        let failed = transition(&garbage(), &Intent::OperatorSelected('+'));
        assert_eq!(
            transition(&failed, &Intent::Cleared),
            CalculatorState::default()
        );
    }

    #[test]
    fn localized_messages_are_used() {
        let messages = Messages::russian();
        let state = transition_with(&messages, &garbage(), &Intent::OperatorSelected('+'));
        assert_eq!(state.error.as_deref(), Some("Неверный ввод"));
    }

    #[test]
    fn error_kinds_collapse_to_two() {
        assert_eq!(
            CalcError::InvalidInput("a".into()).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            CalcError::InvalidOperand("a".into()).kind(),
            ErrorKind::Calculation
        );
        assert_eq!(
            CalcError::from(EngineError::UnknownOperator('x')).kind(),
            ErrorKind::Calculation
        );
    }

    #[test]
    fn format_number_uses_float_debug() {
        assert_eq!(format_number(8.0), "8.0");
        assert_eq!(format_number(-0.5), "-0.5");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn reducer_uses_its_messages() {
        let reducer = CalculatorReducer::new(Messages::russian());
        let after = reducer.reduce(&garbage(), &Intent::OperatorSelected('+'));
        assert_eq!(after.error.as_deref(), Some("Неверный ввод"));
        assert_eq!(reducer.initial(), CalculatorState::default());
    }
}
