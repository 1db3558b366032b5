//! Input transitions for the calculator.
//!
//! Each operation borrows the current state and returns the next one.
//! Nothing here fails: arithmetic faults become the error token.

use super::numeral::{number_to_display, parse_numeral};
use super::state::{CalculatorState, Digit, MAX_INPUT_LEN, Operator, Phase};
use crate::keymap::Action;

/// Apply a binary operator. Division by zero yields NaN.
pub fn apply(previous: f64, current: f64, operator: Operator) -> f64 {
    match operator {
        Operator::Add => previous + current,
        Operator::Subtract => previous - current,
        Operator::Multiply => previous * current,
        Operator::Divide => {
            if current != 0.0 {
                previous / current
            } else {
                f64::NAN
            }
        }
    }
}

/// Evaluate and keep only finite results.
fn evaluate(previous: f64, current: f64, operator: Operator) -> Option<f64> {
    let result = apply(previous, current, operator);
    if result.is_finite() {
        Some(result)
    } else {
        tracing::warn!(previous, current, %operator, "arithmetic fault");
        None
    }
}

impl CalculatorState {
    /// Numeric value of the display. The error token reads as zero.
    pub fn numeric_value(&self) -> f64 {
        parse_numeral(&self.display).unwrap_or(0.0)
    }

    /// Dispatch a single action.
    pub fn apply(&self, action: Action) -> Self {
        match action {
            Action::Digit(d) => self.digit(d),
            Action::Decimal => self.decimal(),
            Action::Operator(op) => self.operator_pressed(op),
            Action::Equals => self.equals(),
            Action::Clear => self.clear(),
            Action::ToggleSign => self.toggle_sign(),
            Action::Percent => self.percent(),
        }
    }

    /// Type a digit.
    pub fn digit(&self, d: Digit) -> Self {
        let typed = d.as_char().to_string();
        match self.phase {
            Phase::Error { .. } => self.clone(),
            Phase::Pending { previous, operator } => {
                Self::with(typed, Phase::OperandEntered { previous, operator })
            }
            Phase::ResultShown => Self::with(typed, Phase::Idle),
            Phase::Idle | Phase::OperandEntered { .. } => {
                if self.display.len() >= MAX_INPUT_LEN {
                    self.clone()
                } else if self.display == "0" {
                    Self::with(typed, self.phase)
                } else {
                    Self::with(format!("{}{}", self.display, typed), self.phase)
                }
            }
        }
    }

    /// Type a decimal point.
    pub fn decimal(&self) -> Self {
        match self.phase {
            Phase::Error { .. } => self.clone(),
            Phase::Pending { previous, operator } => {
                Self::with("0.", Phase::OperandEntered { previous, operator })
            }
            Phase::ResultShown => Self::with("0.", Phase::Idle),
            Phase::Idle | Phase::OperandEntered { .. } => {
                // a point after an exponent would no longer parse
                if self.display.contains(['.', 'e', 'E']) {
                    self.clone()
                } else {
                    Self::with(format!("{}.", self.display), self.phase)
                }
            }
        }
    }

    /// Press an operator key.
    ///
    /// The first press queues the display as the left operand. Pressing an
    /// operator after typing a right operand folds the pending operation
    /// into a running total (strict left-to-right). Pressing operators back
    /// to back only replaces the pending operator.
    pub fn operator_pressed(&self, op: Operator) -> Self {
        match self.phase {
            Phase::Error { .. } => self.clone(),
            Phase::Idle | Phase::ResultShown => Self::with(
                self.display.clone(),
                Phase::Pending {
                    previous: self.numeric_value(),
                    operator: op,
                },
            ),
            Phase::OperandEntered { previous, operator } => {
                match evaluate(previous, self.numeric_value(), operator) {
                    Some(result) => Self::with(
                        number_to_display(result),
                        Phase::Pending {
                            previous: result,
                            operator: op,
                        },
                    ),
                    None => Self::error(Some(op)),
                }
            }
            Phase::Pending { previous, .. } => Self::with(
                self.display.clone(),
                Phase::Pending {
                    previous,
                    operator: op,
                },
            ),
        }
    }

    /// Press `=`. Without a pending operation this does nothing.
    pub fn equals(&self) -> Self {
        match self.phase {
            Phase::Pending { previous, operator } | Phase::OperandEntered { previous, operator } => {
                match evaluate(previous, self.numeric_value(), operator) {
                    Some(result) => Self::with(number_to_display(result), Phase::ResultShown),
                    None => Self::error(None),
                }
            }
            Phase::Idle | Phase::ResultShown | Phase::Error { .. } => self.clone(),
        }
    }

    /// Reset to the startup state.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// Negate the displayed value.
    pub fn toggle_sign(&self) -> Self {
        if self.is_error() {
            return self.clone();
        }
        Self::with(number_to_display(self.numeric_value() * -1.0), self.phase)
    }

    /// Divide the displayed value by 100.
    pub fn percent(&self) -> Self {
        if self.is_error() {
            return self.clone();
        }
        Self::with(number_to_display(self.numeric_value() / 100.0), self.phase)
    }
}
