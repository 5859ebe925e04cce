//! Application state definitions
//!
//! Contains the state owned by the event loop: the calculator itself plus
//! the bits of UI state around it.

use crate::engine::CalculatorState;
use crate::types::InputEvent;

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// The calculator engine state
    pub calculator: CalculatorState,
    /// Status message for user feedback
    pub status_message: String,
    /// Last event dispatched, highlighted on the keypad
    pub last_pressed: Option<InputEvent>,
}

/// Application operating modes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Calculator screen - display and keypad
    Calculator,
    /// Help overlay on top of the calculator
    Help,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Calculator,
            calculator: CalculatorState::new(),
            status_message: "Ready".to_string(),
            last_pressed: None,
        }
    }
}

impl AppState {
    /// Feed one event to the calculator and refresh the status line
    pub fn dispatch(&mut self, event: InputEvent) {
        self.calculator.apply(event);
        self.last_pressed = Some(event);
        self.status_message = if self.calculator.is_error() {
            "Cannot compute (division by zero or overflow)".to_string()
        } else {
            self.calculator.phase().to_string()
        };
    }

    /// Returns true if the help overlay is showing
    pub fn help_visible(&self) -> bool {
        self.mode == AppMode::Help
    }

    /// Show or hide the help overlay
    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            AppMode::Calculator => AppMode::Help,
            AppMode::Help => AppMode::Calculator,
        };
    }
}
