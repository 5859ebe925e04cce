//! Calculator State Machine
//!
//! `CalculatorState` is the single source of truth for the calculator. Each
//! input event has one transition method; [`CalculatorState::apply`]
//! dispatches a classified event and returns the display to render.
//!
//! # Phases
//!
//! ```text
//! AwaitingOperand --digit/point--> Entering
//! Entering --operator/equals/percent/clear-entry--> AwaitingOperand
//! (any) --division by zero/overflow--> Error
//! Error --digit/point/clear/clear-entry/backspace--> Entering | AwaitingOperand
//! ```
//!
//! No phase is terminal.

use super::arithmetic::{calculate, ArithmeticError};
use super::format::{format_value, parse_display, ERROR_TEXT};
use crate::types::{Digit, InputEvent, Operator};
use serde::Serialize;
use std::fmt;
use tracing::{debug, trace};

/// Observable phase of the calculator, derived from its state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntryPhase {
    /// Typing a number; keystrokes extend the display
    Entering,
    /// The next digit starts a fresh number
    AwaitingOperand,
    /// The display shows the error literal
    Error,
}

impl EntryPhase {
    pub const fn description(self) -> &'static str {
        match self {
            Self::Entering => "Entering",
            Self::AwaitingOperand => "Ready",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for EntryPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Accumulator, pending operator, entry flag and display text.
///
/// # Invariants
///
/// - `display` is never empty and holds at most one decimal point
/// - While the display shows `"Error"`, there is no accumulator or pending
///   operator and the next keystroke starts a new entry
/// - A pending operator implies an accumulator
///
/// # Example
///
/// ```
/// use calctui::engine::CalculatorState;
/// use calctui::types::{Digit, Operator};
///
/// let mut calc = CalculatorState::new();
/// calc.press_digit(Digit::new(5).unwrap());
/// calc.press_operator(Operator::Add);
/// calc.press_digit(Digit::new(3).unwrap());
/// calc.press_equals();
/// assert_eq!(calc.display(), "8");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorState {
    display: String,
    accumulator: Option<f64>,
    pending_operator: Option<Operator>,
    is_new_entry: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Create a calculator showing `0` and awaiting an operand
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            accumulator: None,
            pending_operator: None,
            is_new_entry: true,
        }
    }

    #[inline]
    pub fn display(&self) -> &str {
        &self.display
    }

    #[inline]
    pub fn accumulator(&self) -> Option<f64> {
        self.accumulator
    }

    #[inline]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    #[inline]
    pub fn is_new_entry(&self) -> bool {
        self.is_new_entry
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_TEXT
    }

    pub fn phase(&self) -> EntryPhase {
        if self.is_error() {
            EntryPhase::Error
        } else if self.is_new_entry {
            EntryPhase::AwaitingOperand
        } else {
            EntryPhase::Entering
        }
    }

    /// The left operand and operator awaiting a right operand, e.g. `8 ×`
    pub fn pending_expression(&self) -> Option<String> {
        let accumulator = self.accumulator?;
        let operator = self.pending_operator?;
        Some(format!("{} {}", format_value(accumulator), operator))
    }

    /// Apply one classified input event and return the display to render
    pub fn apply(&mut self, event: InputEvent) -> &str {
        trace!(?event, display = %self.display, "applying input event");
        match event {
            InputEvent::Digit(digit) => self.press_digit(digit),
            InputEvent::DecimalPoint => self.press_decimal_point(),
            InputEvent::Operator(op) => self.press_operator(op),
            InputEvent::Equals => self.press_equals(),
            InputEvent::Clear => self.clear(),
            InputEvent::ClearEntry => self.clear_entry(),
            InputEvent::Backspace => self.backspace(),
            InputEvent::Percent => self.percent(),
        }
        &self.display
    }

    pub fn press_digit(&mut self, digit: Digit) {
        if self.start_entry() {
            self.display = digit.to_string();
            return;
        }

        if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit.as_char());
        }
    }

    pub fn press_decimal_point(&mut self) {
        if self.start_entry() {
            self.display = "0.".to_string();
            return;
        }

        if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Shared prologue for digit and decimal keystrokes.
    ///
    /// Returns true when the keystroke should replace the display outright.
    fn start_entry(&mut self) -> bool {
        if self.is_error() {
            self.display = "0".to_string();
        }
        if self.is_new_entry {
            self.is_new_entry = false;
            return true;
        }
        false
    }

    /// Record `op` as the pending operator, folding in the current entry first.
    ///
    /// A second operator with no new digits in between only replaces the
    /// pending operator.
    pub fn press_operator(&mut self, op: Operator) {
        let Some(current) = parse_display(&self.display) else {
            return;
        };

        match self.accumulator {
            None => self.accumulator = Some(current),
            Some(accumulator) if !self.is_new_entry => {
                match calculate(accumulator, self.pending_operator, current) {
                    Ok(value) => {
                        self.accumulator = Some(value);
                        self.display = format_value(value);
                    }
                    Err(err) => {
                        self.enter_error(err);
                        return;
                    }
                }
            }
            Some(_) => {}
        }

        self.pending_operator = Some(op);
        self.is_new_entry = true;
    }

    /// Evaluate the pending operation. Without a pending operator this is a no-op.
    pub fn press_equals(&mut self) {
        let Some(current) = parse_display(&self.display) else {
            return;
        };
        let (Some(accumulator), Some(op)) = (self.accumulator, self.pending_operator) else {
            return;
        };

        match op.apply(accumulator, current) {
            Ok(result) => {
                self.display = format_value(result);
                self.accumulator = Some(result);
                self.pending_operator = None;
                self.is_new_entry = true;
            }
            Err(err) => self.enter_error(err),
        }
    }

    /// Divide the displayed value by 100
    pub fn percent(&mut self) {
        let Some(current) = parse_display(&self.display) else {
            return;
        };
        self.display = format_value(current / 100.0);
        self.is_new_entry = true;
    }

    /// Reset to the initial configuration
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Reset the current entry, keeping any chained computation
    pub fn clear_entry(&mut self) {
        self.display = "0".to_string();
        self.is_new_entry = true;
    }

    /// Remove the last typed character.
    ///
    /// Results, errors and fresh entries cannot be edited; they reset to `0`.
    pub fn backspace(&mut self) {
        if self.is_error() || self.is_new_entry {
            self.reset_display();
            return;
        }

        self.display.pop();
        if self.display.is_empty() || self.display == "-" {
            self.reset_display();
        }
    }

    fn reset_display(&mut self) {
        self.display = "0".to_string();
        self.is_new_entry = true;
    }

    fn enter_error(&mut self, err: ArithmeticError) {
        debug!(error = %err, "calculation failed, entering error state");
        self.display = ERROR_TEXT.to_string();
        self.accumulator = None;
        self.pending_operator = None;
        self.is_new_entry = true;
    }
}
