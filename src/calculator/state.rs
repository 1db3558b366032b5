//! Calculator state types.
//!
//! The state is an immutable snapshot: every transition in
//! [`engine`](super::engine) borrows the current value and returns a new one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text shown when an arithmetic fault occurred.
pub const ERROR_TOKEN: &str = "Error";

/// Maximum number of characters a typed operand may reach.
pub const MAX_INPUT_LEN: usize = 9;

/// A binary operator on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in keypad order (top to bottom).
    pub const ALL: [Operator; 4] = [
        Operator::Divide,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Add,
    ];

    /// Symbol printed on the operator key.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single decimal digit `0..=9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// All digits, indexed by value.
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    /// Create a digit, returning `None` for values above 9.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(c)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the calculator is in its input cycle.
///
/// Each variant carries only what is meaningful in that phase, so a pending
/// operator without a left operand cannot be expressed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    /// Typing the first operand (or nothing typed yet).
    Idle,
    /// An operator was accepted; the next digit starts the right operand.
    Pending { previous: f64, operator: Operator },
    /// The right operand is being typed.
    OperandEntered { previous: f64, operator: Operator },
    /// `=` produced a result; a digit starts over, an operator chains from it.
    ResultShown,
    /// An arithmetic fault occurred. Only clear leaves this phase.
    ///
    /// A fault raised while chaining keeps the operator that was pressed.
    Error { operator: Option<Operator> },
}

/// The complete calculator state.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    pub(crate) display: String,
    pub(crate) phase: Phase,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// The startup state: `0` on screen, nothing pending.
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            phase: Phase::Idle,
        }
    }

    pub(crate) fn with(display: impl Into<String>, phase: Phase) -> Self {
        Self {
            display: display.into(),
            phase,
        }
    }

    pub(crate) fn error(operator: Option<Operator>) -> Self {
        Self::with(ERROR_TOKEN, Phase::Error { operator })
    }

    /// Raw display text: a decimal numeral or [`ERROR_TOKEN`].
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Left operand of the pending operation, if any.
    pub fn previous_value(&self) -> Option<f64> {
        match self.phase {
            Phase::Pending { previous, .. } | Phase::OperandEntered { previous, .. } => {
                Some(previous)
            }
            Phase::Idle | Phase::ResultShown | Phase::Error { .. } => None,
        }
    }

    /// The pending operator, if any.
    pub fn operator(&self) -> Option<Operator> {
        match self.phase {
            Phase::Pending { operator, .. } | Phase::OperandEntered { operator, .. } => {
                Some(operator)
            }
            Phase::Error { operator } => operator,
            Phase::Idle | Phase::ResultShown => None,
        }
    }

    /// Whether the next digit starts a fresh number.
    pub fn waiting_for_next(&self) -> bool {
        matches!(
            self.phase,
            Phase::Pending { .. } | Phase::ResultShown | Phase::Error { .. }
        )
    }

    pub fn is_error(&self) -> bool {
        matches!(self.phase, Phase::Error { .. })
    }

    /// Flat view of the state for presentation layers.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display.clone(),
            previous_value: self.previous_value(),
            operator: self.operator(),
            waiting_for_next: self.waiting_for_next(),
        }
    }
}

/// Serializable view of [`CalculatorState`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub display: String,
    pub previous_value: Option<f64>,
    pub operator: Option<Operator>,
    pub waiting_for_next: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_snapshot() {
        let snapshot = CalculatorState::new().snapshot();
        assert_eq!(snapshot.display, "0");
        assert_eq!(snapshot.previous_value, None);
        assert_eq!(snapshot.operator, None);
        assert!(!snapshot.waiting_for_next);
    }

    #[test]
    fn test_phase_field_mapping() {
        let pending = CalculatorState::with(
            "3",
            Phase::Pending {
                previous: 3.0,
                operator: Operator::Add,
            },
        );
        assert_eq!(pending.previous_value(), Some(3.0));
        assert_eq!(pending.operator(), Some(Operator::Add));
        assert!(pending.waiting_for_next());

        let entered = CalculatorState::with(
            "4",
            Phase::OperandEntered {
                previous: 3.0,
                operator: Operator::Add,
            },
        );
        assert!(!entered.waiting_for_next());

        let error = CalculatorState::error(None);
        assert!(error.is_error());
        assert_eq!(error.display(), ERROR_TOKEN);
        assert_eq!(error.previous_value(), None);
        assert_eq!(error.operator(), None);
        assert!(error.waiting_for_next());

        let chained = CalculatorState::error(Some(Operator::Add));
        assert_eq!(chained.previous_value(), None);
        assert_eq!(chained.operator(), Some(Operator::Add));
    }

    #[test]
    fn test_digit_conversion() {
        assert_eq!(Digit::try_from('7').map(Digit::value), Ok(7));
        assert_eq!(Digit::try_from('x'), Err('x'));
        assert!(Digit::new(10).is_none());
        assert_eq!(Digit::new(4).map(Digit::as_char), Some('4'));
    }

    #[test]
    fn test_snapshot_json_shape() {
        let state = CalculatorState::with(
            "12",
            Phase::Pending {
                previous: 12.0,
                operator: Operator::Multiply,
            },
        );
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["display"], "12");
        assert_eq!(json["previousValue"], 12.0);
        assert_eq!(json["operator"], "multiply");
        assert_eq!(json["waitingForNext"], true);
    }
}
