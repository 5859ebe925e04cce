//! Reusable UI components
//!
//! - `keypad` - Clickable button grid
//! - `keybindings` - Mode-aware key binding registry
//! - `help_overlay` - Floating help window

pub mod help_overlay;
pub mod keybindings;
pub mod keypad;
