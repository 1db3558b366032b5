//! Calculator core.
//!
//! This module provides:
//! - The calculator state and its input transitions
//! - Display text parsing and formatting
//! - Copying results to the clipboard

mod clipboard;
mod engine;
mod format;
mod numeral;
mod state;

pub use clipboard::copy_to_clipboard;
pub use engine::apply;
pub use format::format_display;
pub use numeral::{number_to_display, parse_numeral};
pub use state::{CalculatorState, Digit, ERROR_TOKEN, MAX_INPUT_LEN, Operator, Phase, Snapshot};
