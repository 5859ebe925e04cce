//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode)
//! - Main module - App struct and event loop

mod state;

// Re-export state types for external use
pub use state::{AppMode, AppState};

use crate::components::keybindings::KeyAction;
use crate::config_file::AppConfig;
use crate::error::Result;
use crate::input::InputHandler;
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyEvent, MouseEvent};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::time::Duration;
use tracing::{debug, info};

/// Main application struct
///
/// The event loop is single-threaded: the state is owned here and every
/// event is handled to completion before the next one is read.
pub struct App {
    state: AppState,
    config: AppConfig,
    ui_renderer: UiRenderer,
    input_handler: InputHandler,
    /// Keypad area from the last frame, for mouse hit-testing
    keypad_area: Option<Rect>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: AppConfig) -> Self {
        info!(?config, "Creating new App instance");
        let input_handler = InputHandler::new(&config);
        let ui_renderer = UiRenderer::new(input_handler.keybindings());

        Self {
            state: AppState::default(),
            config,
            ui_renderer,
            input_handler,
            keypad_area: None,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main application loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");
        let poll_interval = Duration::from_millis(self.config.poll_interval_ms);

        loop {
            self.draw(terminal)?;

            if !crossterm::event::poll(poll_interval)? {
                continue;
            }

            if self.handle_event(crossterm::event::read()?) {
                break;
            }
        }

        info!(display = self.state.calculator.display(), "Leaving main application loop");
        Ok(())
    }

    /// Render one frame
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|f| {
            let screen = self.ui_renderer.render(
                f,
                &self.state,
                self.input_handler.keybindings(),
                self.config.show_keypad,
            );
            self.keypad_area = screen.keypad;
        })?;
        Ok(())
    }

    /// Handle one terminal event. Returns true when exit was requested.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key_event) => self.handle_key_event(key_event),
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            Event::Resize(width, height) => {
                // The next draw recomputes the layout
                debug!(width, height, "Terminal resized");
                self.keypad_area = None;
                false
            }
            _ => false,
        }
    }

    /// Handle keyboard input events
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        match self.input_handler.handle_key(&self.state.mode, key_event) {
            Some(action) => self.perform(action),
            None => false,
        }
    }

    /// Handle mouse input events
    pub fn handle_mouse_event(&mut self, mouse_event: MouseEvent) -> bool {
        match self
            .input_handler
            .handle_mouse(&self.state.mode, mouse_event, self.keypad_area)
        {
            Some(action) => self.perform(action),
            None => false,
        }
    }

    fn perform(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Input(event) => {
                self.state.dispatch(event);
                false
            }
            KeyAction::ToggleHelp => {
                self.state.toggle_help();
                false
            }
            KeyAction::Quit => {
                info!("Quit requested");
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
    use ratatui::backend::TestBackend;

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_typing_updates_display() {
        let mut app = App::new(AppConfig::default());
        for c in "12*3=".chars() {
            assert!(!app.handle_event(key(c)));
        }
        assert_eq!(app.state().calculator.display(), "36");
    }

    #[test]
    fn test_quit_key() {
        let mut app = App::new(AppConfig::default());
        assert!(app.handle_event(key('q')));
    }

    #[test]
    fn test_help_swallows_calculator_keys() {
        let mut app = App::new(AppConfig::default());
        app.handle_event(key('?'));
        assert!(app.state().help_visible());
        app.handle_event(key('5'));
        assert_eq!(app.state().calculator.display(), "0");

        app.handle_event(Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(!app.state().help_visible());
    }

    #[test]
    fn test_draw_renders_display_and_keypad() {
        let mut app = App::new(AppConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(48, 26)).unwrap();
        app.handle_event(key('7'));
        app.draw(&mut terminal).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("calctui"));
        assert!(text.contains("CE"));
        assert!(app.keypad_area.is_some());
    }

    #[test]
    fn test_click_after_draw_hits_keypad() {
        let mut app = App::new(AppConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(48, 26)).unwrap();
        app.draw(&mut terminal).unwrap();

        let keypad = app.keypad_area.unwrap();
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: keypad.x + 1,
            row: keypad.y + keypad.height - 1,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_event(Event::Mouse(click));
        // Bottom-left button is 0
        assert_eq!(app.state().calculator.display(), "0");
        assert!(!app.state().calculator.is_new_entry());
    }

    #[test]
    fn test_resize_forgets_keypad_area() {
        let mut app = App::new(AppConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(48, 26)).unwrap();
        app.draw(&mut terminal).unwrap();
        assert!(!app.handle_event(Event::Resize(80, 24)));
        assert_eq!(app.keypad_area, None);
    }
}
