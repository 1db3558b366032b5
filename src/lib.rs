//! A four-function calculator.
//!
//! The core is [`CalculatorState`]: an immutable snapshot with one
//! transition per key on the keypad. [`format_display`] renders the raw
//! display text for the screen. Presentation layers drive a [`Session`]
//! and read back [`Readout`] and the keypad items after every action.

pub mod calculator;
pub mod config;
pub mod error;
pub mod items;
pub mod keymap;
pub mod session;

pub use calculator::{CalculatorState, Operator, format_display};
pub use error::{Error, Result};
pub use items::Readout;
pub use keymap::Action;
pub use session::Session;
