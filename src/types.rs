//! Type-safe input types for the calculator
//!
//! Every keystroke or button press is classified into an [`InputEvent`] before
//! it reaches the engine. Operators and digits are closed types, so an invalid
//! operator or an out-of-range digit cannot be represented.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

/// Binary arithmetic operator
///
/// `to_string()` yields the symbol shown on the keypad; parsing also accepts
/// the ASCII spellings typed on a keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Operator {
    #[strum(to_string = "+")]
    Add,
    #[strum(to_string = "−", serialize = "-")]
    Subtract,
    #[strum(to_string = "×", serialize = "*", serialize = "x")]
    Multiply,
    #[strum(to_string = "÷", serialize = "/")]
    Divide,
}

impl Operator {
    /// Classify a typed character as an operator
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }
}

/// A single decimal digit, 0 through 9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// All ten digits in ascending order
    pub const ALL: [Self; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Create a digit, returning `None` for values above 9
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 { Some(Self(value)) } else { None }
    }

    /// Classify a typed character as a digit
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    /// The ASCII character for this digit
    #[inline]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A classified input event consumed by the calculator engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Digit(Digit),
    DecimalPoint,
    Operator(Operator),
    Equals,
    /// Full reset (accumulator, operator and display)
    Clear,
    /// Reset only the current entry
    ClearEntry,
    Backspace,
    Percent,
}

impl InputEvent {
    /// Label used for this event on the keypad and in logs
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::DecimalPoint => ".".to_string(),
            Self::Operator(op) => op.to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::ClearEntry => "CE".to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::Percent => "%".to_string(),
        }
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
