//! Centralized theme and styling for the TUI
//!
//! This module provides a single source of truth for all colors and styles
//! used by the calculator screen, keypad and help overlay.
//!
//! # Usage
//! ```rust
//! use calctui::theme::{ButtonKind, Colors, Styles, Theme};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let display_style = Styles::display();
//! let key_style = Theme::button_style(ButtonKind::Operator, false);
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors (backgrounds, foregrounds)
    // -------------------------------------------------------------------------

    /// Primary dark background - display panel
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Alternative dark background - keypad buttons
    pub const BG_SECONDARY: Color = Color::Rgb(30, 30, 40);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Primary accent color - used for borders and titles
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - operators and the pending expression
    pub const SECONDARY: Color = Color::Yellow;

    /// Equals key and successful results
    pub const SUCCESS: Color = Color::Green;

    /// Error display
    pub const ERROR: Color = Color::Red;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Last pressed button highlight
    pub const PRESSED_BG: Color = Color::Yellow;

    /// Last pressed button text (for contrast on yellow bg)
    pub const PRESSED_FG: Color = Color::Black;

    /// Control keys (C, CE, backspace, percent)
    pub const CONTROL: Color = Color::LightRed;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Common styles built from the palette
pub struct Styles;

impl Styles {
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Title bar text
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    /// Main number display
    pub fn display() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .bg(Colors::BG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Number display while showing the error literal
    pub fn display_error() -> Style {
        Style::default()
            .fg(Colors::ERROR)
            .bg(Colors::BG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Pending `accumulator operator` line above the display
    pub fn expression() -> Style {
        Style::default().fg(Colors::SECONDARY).bg(Colors::BG_PRIMARY)
    }

    /// Key hint in the status bar
    pub fn nav_hint() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }
}

// =============================================================================
// SEMANTIC STYLES
// =============================================================================

/// Visual category of a keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Digit,
    Operator,
    Control,
    Equals,
}

/// Style lookups keyed by semantic role
pub struct Theme;

impl Theme {
    /// Style for a keypad button; `pressed` highlights the last button used
    pub fn button_style(kind: ButtonKind, pressed: bool) -> Style {
        if pressed {
            return Style::default()
                .fg(Colors::PRESSED_FG)
                .bg(Colors::PRESSED_BG)
                .add_modifier(Modifier::BOLD);
        }

        let fg = match kind {
            ButtonKind::Digit => Colors::FG_PRIMARY,
            ButtonKind::Operator => Colors::SECONDARY,
            ButtonKind::Control => Colors::CONTROL,
            ButtonKind::Equals => Colors::SUCCESS,
        };
        Style::default().fg(fg).bg(Colors::BG_SECONDARY)
    }
}
