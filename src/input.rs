//! Input handling module
//!
//! Translates raw terminal input (key presses, mouse clicks) and textual key
//! scripts into [`KeyAction`]s. This is the only place that knows about
//! crossterm events; the engine only ever sees classified
//! [`InputEvent`]s.

use crate::app::AppMode;
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::components::keypad::Keypad;
use crate::config_file::AppConfig;
use crate::error::{CalcTuiError, Result};
use crate::types::InputEvent;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::debug;

/// Named keys accepted inside `{...}` in a key script
const SCRIPT_TOKENS: &[(&str, KeyCode)] = &[
    ("bs", KeyCode::Backspace),
    ("backspace", KeyCode::Backspace),
    ("c", KeyCode::Esc),
    ("esc", KeyCode::Esc),
    ("ce", KeyCode::Delete),
    ("del", KeyCode::Delete),
    ("enter", KeyCode::Enter),
];

/// Maps terminal input to actions for the current mode
pub struct InputHandler {
    keybindings: KeybindingContext,
    mouse_enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl InputHandler {
    /// Create an input handler honouring the key and mouse settings in `config`
    pub fn new(config: &AppConfig) -> Self {
        Self {
            keybindings: KeybindingContext::with_comma_decimal(config.comma_decimal),
            mouse_enabled: config.mouse_support && config.show_keypad,
        }
    }

    pub fn keybindings(&self) -> &KeybindingContext {
        &self.keybindings
    }

    /// Resolve a key event. Release and repeat-only events are ignored.
    pub fn handle_key(&self, mode: &AppMode, key_event: KeyEvent) -> Option<KeyAction> {
        if key_event.kind != KeyEventKind::Press {
            return None;
        }

        let action = self.keybindings.action_for(mode, &key_event);
        if action.is_none() {
            debug!(code = ?key_event.code, modifiers = ?key_event.modifiers, "unbound key");
        }
        action
    }

    /// Resolve a mouse event against the keypad drawn at `keypad_area`.
    ///
    /// Only left-button presses on the calculator screen produce actions.
    pub fn handle_mouse(
        &self,
        mode: &AppMode,
        mouse_event: MouseEvent,
        keypad_area: Option<Rect>,
    ) -> Option<KeyAction> {
        if !self.mouse_enabled || *mode != AppMode::Calculator {
            return None;
        }
        if mouse_event.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }

        let area = keypad_area?;
        Keypad::button_at(area, mouse_event.column, mouse_event.row).map(KeyAction::Input)
    }

    /// Parse a key script into calculator events.
    ///
    /// Each character is treated as the key it names on a keyboard and
    /// whitespace is skipped. Control keys are written in braces:
    /// `{bs}`, `{c}`, `{ce}`, `{enter}` (also `{backspace}`, `{esc}`, `{del}`).
    ///
    /// ```
    /// use calctui::input::InputHandler;
    ///
    /// let events = InputHandler::default().parse_script("12 + 3 {bs} 4 =").unwrap();
    /// assert_eq!(events.len(), 7);
    /// ```
    pub fn parse_script(&self, script: &str) -> Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        let mut chars = script.char_indices();

        while let Some((position, c)) = chars.next() {
            if c.is_whitespace() {
                continue;
            }

            let code = if c == '{' {
                let mut token = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, ch)) => token.push(ch),
                        None => {
                            return Err(CalcTuiError::invalid_key(format!(
                                "unterminated '{{' at position {}",
                                position
                            )));
                        }
                    }
                }
                let token = token.trim().to_ascii_lowercase();
                SCRIPT_TOKENS
                    .iter()
                    .find(|(name, _)| *name == token)
                    .map(|(_, code)| *code)
                    .ok_or_else(|| {
                        CalcTuiError::invalid_key(format!(
                            "unknown key {{{}}} at position {}",
                            token, position
                        ))
                    })?
            } else {
                KeyCode::Char(c)
            };

            let key_event = KeyEvent::new(code, KeyModifiers::NONE);
            match self.keybindings.action_for(&AppMode::Calculator, &key_event) {
                Some(KeyAction::Input(event)) => events.push(event),
                _ => {
                    return Err(CalcTuiError::invalid_key(format!(
                        "'{}' at position {}",
                        c, position
                    )));
                }
            }
        }

        Ok(events)
    }
}
