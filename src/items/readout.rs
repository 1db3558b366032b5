//! Readout item representing what the display shows.

use crate::calculator::{CalculatorState, Operator, format_display};
use serde::Serialize;

/// Display text longer than this switches to the compact text size.
const COMPACT_THRESHOLD: usize = 7;

/// The display area derived from a calculator state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Readout {
    /// The formatted text shown on screen.
    pub text: String,
    /// Whether the text should use the smaller size.
    pub compact: bool,
    /// Whether the text is the error token.
    pub is_error: bool,
    /// Label for the clear key: "AC" or "C".
    pub clear_label: &'static str,
    /// Operator key to highlight while waiting for the right operand.
    pub active_operator: Option<Operator>,
}

impl Readout {
    /// Derive the readout from the current state.
    pub fn from_state(state: &CalculatorState) -> Self {
        Self {
            text: format_display(state.display()),
            compact: state.display().len() > COMPACT_THRESHOLD,
            is_error: state.is_error(),
            clear_label: clear_label(state),
            active_operator: state.operator().filter(|_| state.waiting_for_next()),
        }
    }
}

/// "AC" when nothing worth keeping is on screen, "C" otherwise.
pub fn clear_label(state: &CalculatorState) -> &'static str {
    let has_operand = state.previous_value().is_some_and(|v| v != 0.0);
    if state.display() == "0" && !has_operand {
        "AC"
    } else {
        "C"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::parse_keys;

    fn state_after(keys: &str) -> CalculatorState {
        parse_keys(keys)
            .unwrap()
            .into_iter()
            .fold(CalculatorState::new(), |state, action| state.apply(action))
    }

    #[test]
    fn test_initial_readout() {
        let readout = Readout::from_state(&CalculatorState::new());
        assert_eq!(readout.text, "0");
        assert_eq!(readout.clear_label, "AC");
        assert!(!readout.compact);
        assert!(!readout.is_error);
        assert_eq!(readout.active_operator, None);
    }

    #[test]
    fn test_active_operator_while_waiting() {
        let readout = Readout::from_state(&state_after("12*"));
        assert_eq!(readout.active_operator, Some(Operator::Multiply));
        assert_eq!(readout.clear_label, "C");

        let readout = Readout::from_state(&state_after("12*3"));
        assert_eq!(readout.active_operator, None);
    }

    #[test]
    fn test_compact_text() {
        let readout = Readout::from_state(&state_after("12345678"));
        assert!(readout.compact);
        assert_eq!(readout.text, "12,345,678");
    }

    #[test]
    fn test_error_readout() {
        let readout = Readout::from_state(&state_after("1/0="));
        assert!(readout.is_error);
        assert_eq!(readout.text, "Error");
        assert_eq!(readout.clear_label, "C");
    }

    #[test]
    fn test_chained_fault_keeps_operator_highlight() {
        let readout = Readout::from_state(&state_after("5/0+"));
        assert!(readout.is_error);
        assert_eq!(readout.active_operator, Some(Operator::Add));

        let readout = Readout::from_state(&state_after("5/0="));
        assert_eq!(readout.active_operator, None);
    }

    #[test]
    fn test_zero_operand_keeps_all_clear() {
        let state = state_after("0+");
        assert_eq!(clear_label(&state), "AC");
    }
}
