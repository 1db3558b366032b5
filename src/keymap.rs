//! Keyboard mapping.
//!
//! Maps physical keys onto calculator actions and parses key scripts like
//! `3+4*2<Enter>` for the terminal front end.

use crate::calculator::{Digit, Operator};
use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

/// One user action on the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    ToggleSign,
    Percent,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{}", d),
            Self::Decimal => f.write_str("."),
            Self::Operator(op) => write!(f, "{}", op),
            Self::Equals => f.write_str("="),
            Self::Clear => f.write_str("clear"),
            Self::ToggleSign => f.write_str("+/-"),
            Self::Percent => f.write_str("%"),
        }
    }
}

lazy_static! {
    /// A bracketed key name or any single non-space character.
    static ref KEY_TOKEN: Regex = Regex::new(r"<([A-Za-z]+)>|\S").unwrap();
}

/// Map a keyboard key name to an action.
///
/// Key names are matched exactly: `0`-`9`, `+`, `-`, `*`, `/`, `.`, `=`,
/// `Enter` and `Escape`.
pub fn action_for_key(key: &str) -> Option<Action> {
    let action = match key {
        "+" => Action::Operator(Operator::Add),
        "-" => Action::Operator(Operator::Subtract),
        "*" => Action::Operator(Operator::Multiply),
        "/" => Action::Operator(Operator::Divide),
        "Enter" | "=" => Action::Equals,
        "Escape" => Action::Clear,
        "." => Action::Decimal,
        _ => {
            let mut chars = key.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return None;
            };
            return Digit::try_from(c).ok().map(Action::Digit);
        }
    };

    Some(action)
}

/// Named actions that have no keyboard binding.
fn action_for_name(name: &str) -> Option<Action> {
    match name {
        "Negate" => Some(Action::ToggleSign),
        "Percent" => Some(Action::Percent),
        "Clear" => Some(Action::Clear),
        _ => action_for_key(name),
    }
}

/// Parse a key script into actions.
///
/// Each non-space character is one key; `<Name>` names a longer key such as
/// `<Enter>`, `<Escape>`, `<Negate>` or `<Percent>`.
pub fn parse_keys(script: &str) -> Result<Vec<Action>> {
    KEY_TOKEN
        .captures_iter(script)
        .map(|caps| {
            let action = match caps.get(1) {
                Some(name) => action_for_name(name.as_str()),
                None => action_for_key(&caps[0]),
            };
            action.ok_or_else(|| Error::UnknownKey(caps[0].to_string()))
        })
        .collect()
}
