mod readout;

pub use readout::{Readout, clear_label};

use crate::calculator::{CalculatorState, Digit, Operator};
use crate::keymap::Action;
use serde::Serialize;

/// Number of columns in the keypad grid.
pub const KEYPAD_COLUMNS: usize = 4;

/// Visual group a keypad button belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Digits and the decimal point
    Number,
    /// Binary operators and equals
    Operator,
    /// Clear, sign toggle and percent
    Utility,
}

/// A button on the keypad.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ButtonItem {
    pub label: String,
    pub variant: Variant,
    #[serde(skip)]
    pub action: Action,
    /// Spans two columns.
    pub wide: bool,
    /// Highlighted as the pending operator.
    pub active: bool,
}

impl ButtonItem {
    fn new(label: impl Into<String>, variant: Variant, action: Action) -> Self {
        Self {
            label: label.into(),
            variant,
            action,
            wide: false,
            active: false,
        }
    }

    fn digit(n: usize) -> Self {
        let digit = Digit::ALL[n];
        Self::new(digit.to_string(), Variant::Number, Action::Digit(digit))
    }

    fn operator(op: Operator, state: &CalculatorState) -> Self {
        let mut item = Self::new(op.symbol(), Variant::Operator, Action::Operator(op));
        item.active = state.operator() == Some(op) && state.waiting_for_next();
        item
    }

    fn wide(mut self) -> Self {
        self.wide = true;
        self
    }

    /// Number of grid columns this button spans.
    pub fn span(&self) -> usize {
        if self.wide { 2 } else { 1 }
    }

    pub fn is_operator(&self) -> bool {
        self.variant == Variant::Operator
    }
}

/// Build the keypad for the given state, in row order.
///
/// Rows: `AC/C +/- % ÷`, `7 8 9 ×`, `4 5 6 -`, `1 2 3 +`, `0 . =` with a
/// double-width zero.
pub fn keypad(state: &CalculatorState) -> Vec<Vec<ButtonItem>> {
    let [divide, multiply, subtract, add] = Operator::ALL.map(|op| ButtonItem::operator(op, state));

    vec![
        vec![
            ButtonItem::new(clear_label(state), Variant::Utility, Action::Clear),
            ButtonItem::new("+/-", Variant::Utility, Action::ToggleSign),
            ButtonItem::new("%", Variant::Utility, Action::Percent),
            divide,
        ],
        vec![
            ButtonItem::digit(7),
            ButtonItem::digit(8),
            ButtonItem::digit(9),
            multiply,
        ],
        vec![
            ButtonItem::digit(4),
            ButtonItem::digit(5),
            ButtonItem::digit(6),
            subtract,
        ],
        vec![
            ButtonItem::digit(1),
            ButtonItem::digit(2),
            ButtonItem::digit(3),
            add,
        ],
        vec![
            ButtonItem::digit(0).wide(),
            ButtonItem::new(".", Variant::Number, Action::Decimal),
            ButtonItem::new("=", Variant::Operator, Action::Equals),
        ],
    ]
}
