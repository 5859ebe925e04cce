//! Calculator engine: the input-state machine behind the display.
//!
//! The engine is pure logic with no I/O. It consumes classified
//! [`InputEvent`](crate::types::InputEvent)s one at a time and owns the only
//! mutable calculator state.

pub mod arithmetic;
pub mod format;
pub mod state;

pub use arithmetic::{calculate, ArithmeticError, MIN_DIVISOR};
pub use format::{format_value, parse_display, ERROR_TEXT};
pub use state::{CalculatorState, EntryPhase};
