//! calctui Library
//!
//! This library provides the calculator engine and the terminal front end
//! that drives it.

pub mod app;
pub mod cli;
pub mod components;
pub mod config_file;
pub mod engine;
pub mod error;
pub mod input;
pub mod logging;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState};
pub use config_file::AppConfig;
pub use engine::{ArithmeticError, CalculatorState, EntryPhase};
pub use error::CalcTuiError;
pub use input::InputHandler;
pub use types::{Digit, InputEvent, Operator};
