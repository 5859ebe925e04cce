//! User interface rendering module
//!
//! - `display` - Number display and status bar
//!
//! The keypad and help overlay live in `components`. [`layout`] is a pure
//! function of the terminal size, shared by rendering and mouse hit-testing.

mod display;

pub use display::visible_tail;

use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::keypad::Keypad;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

/// Widest the calculator column grows on large terminals
pub const MAX_WIDTH: u16 = 48;
/// Tallest the calculator column grows on large terminals
pub const MAX_HEIGHT: u16 = 26;

const DISPLAY_HEIGHT: u16 = 4;
const STATUS_HEIGHT: u16 = 1;

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// The whole calculator column (help overlay is centred on it)
    pub column: Rect,
    pub display: Rect,
    /// `None` when the keypad is hidden
    pub keypad: Option<Rect>,
    pub status: Rect,
}

/// Compute the screen layout for a terminal area
pub fn layout(area: Rect, show_keypad: bool) -> ScreenLayout {
    let width = area.width.min(MAX_WIDTH);
    let height = area.height.min(MAX_HEIGHT);
    let column = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let chunks = Layout::vertical([
        Constraint::Length(DISPLAY_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .split(column);

    ScreenLayout {
        column,
        display: chunks[0],
        keypad: show_keypad.then_some(chunks[1]),
        status: chunks[2],
    }
}

/// Draws the calculator screen
pub struct UiRenderer {
    help_overlay: HelpOverlay,
}

impl UiRenderer {
    pub fn new(keybindings: &KeybindingContext) -> Self {
        Self {
            help_overlay: HelpOverlay::new(keybindings),
        }
    }

    /// Render one frame and return the layout that was used
    pub fn render(
        &self,
        f: &mut Frame,
        state: &AppState,
        keybindings: &KeybindingContext,
        show_keypad: bool,
    ) -> ScreenLayout {
        let area = f.area();
        let screen = layout(area, show_keypad);

        display::render_display(f, screen.display, state);
        if let Some(keypad) = screen.keypad {
            Keypad::render(f, keypad, state.last_pressed);
        }
        display::render_status_bar(
            f,
            screen.status,
            &state.status_message,
            &keybindings.get_nav_items(&state.mode),
        );

        if state.help_visible() {
            self.help_overlay.render(f, area);
        }

        screen
    }
}
