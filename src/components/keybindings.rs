//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current
//! application mode. The same registry drives key dispatch, the status bar
//! hints and the help overlay, so they cannot drift apart.

use crate::app::AppMode;
use crate::types::{Digit, InputEvent, Operator};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Feed a classified event to the calculator
    Input(InputEvent),
    ToggleHelp,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether `event` triggers this binding.
    ///
    /// Shift is ignored: `+`, `*` and `%` arrive shifted on most layouts.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        event.code == self.key && event.modifiers.difference(KeyModifiers::SHIFT) == self.modifiers
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a keybinding context with default bindings (`,` is a decimal point)
    pub fn new() -> Self {
        Self::with_comma_decimal(true)
    }

    /// Create a keybinding context, choosing whether `,` enters a decimal point
    pub fn with_comma_decimal(comma_decimal: bool) -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults(comma_decimal);
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self, comma_decimal: bool) {
        self.global_bindings = vec![Keybinding::with_modifiers(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyAction::Quit,
            "Ctrl+C",
            "Quit",
        )];

        let mut calculator = Vec::new();

        for digit in Digit::ALL {
            calculator.push(Keybinding::new(
                KeyCode::Char(digit.as_char()),
                KeyAction::Input(InputEvent::Digit(digit)),
                &digit.to_string(),
                "Enter digit",
            ));
        }

        calculator.push(Keybinding::new(
            KeyCode::Char('.'),
            KeyAction::Input(InputEvent::DecimalPoint),
            ".",
            "Decimal point",
        ));
        if comma_decimal {
            calculator.push(Keybinding::new(
                KeyCode::Char(','),
                KeyAction::Input(InputEvent::DecimalPoint),
                ",",
                "Decimal point",
            ));
        }

        for (key, op, description) in [
            ('+', Operator::Add, "Add"),
            ('-', Operator::Subtract, "Subtract"),
            ('*', Operator::Multiply, "Multiply"),
            ('/', Operator::Divide, "Divide"),
            ('−', Operator::Subtract, "Subtract"),
            ('×', Operator::Multiply, "Multiply"),
            ('÷', Operator::Divide, "Divide"),
        ] {
            calculator.push(Keybinding::new(
                KeyCode::Char(key),
                KeyAction::Input(InputEvent::Operator(op)),
                &key.to_string(),
                description,
            ));
        }

        calculator.extend([
            Keybinding::new(
                KeyCode::Enter,
                KeyAction::Input(InputEvent::Equals),
                "Enter",
                "Evaluate",
            ),
            Keybinding::new(
                KeyCode::Char('='),
                KeyAction::Input(InputEvent::Equals),
                "=",
                "Evaluate",
            ),
            Keybinding::new(
                KeyCode::Char('%'),
                KeyAction::Input(InputEvent::Percent),
                "%",
                "Percent",
            ),
            Keybinding::new(
                KeyCode::Backspace,
                KeyAction::Input(InputEvent::Backspace),
                "Backspace",
                "Delete last digit",
            ),
            Keybinding::new(
                KeyCode::Delete,
                KeyAction::Input(InputEvent::ClearEntry),
                "Del",
                "Clear entry",
            ),
            Keybinding::new(
                KeyCode::Esc,
                KeyAction::Input(InputEvent::Clear),
                "Esc",
                "Clear all",
            ),
            Keybinding::new(KeyCode::Char('?'), KeyAction::ToggleHelp, "?", "Help"),
            Keybinding::new(KeyCode::F(1), KeyAction::ToggleHelp, "F1", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
        ]);

        self.mode_bindings.insert(AppMode::Calculator, calculator);

        // Help overlay: only closing and quitting
        self.mode_bindings.insert(
            AppMode::Help,
            vec![
                Keybinding::new(KeyCode::Char('?'), KeyAction::ToggleHelp, "?", "Close help"),
                Keybinding::new(KeyCode::Esc, KeyAction::ToggleHelp, "Esc", "Close help"),
                Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            ],
        );
    }

    /// Get all bindings for a mode (including global)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = self
            .mode_bindings
            .get(mode)
            .map(|b| b.iter().collect())
            .unwrap_or_default();
        bindings.extend(self.global_bindings.iter());
        bindings
    }

    /// Resolve a key event to an action in the given mode
    pub fn action_for(&self, mode: &AppMode, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Short hints for the status bar
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let priority: &[(&str, &str)] = match mode {
            AppMode::Calculator => &[
                ("Enter", "Evaluate"),
                ("Esc", "Clear all"),
                ("Del", "Clear entry"),
                ("?", "Help"),
                ("Q", "Quit"),
            ],
            AppMode::Help => &[("Esc", "Close help"), ("Q", "Quit")],
        };

        let bindings = self.get_bindings(mode);
        priority
            .iter()
            .filter(|(display, _)| bindings.iter().any(|b| b.display == *display))
            .map(|(display, label)| NavBarItem {
                key_display: display.to_string(),
                action_label: label.to_string(),
            })
            .collect()
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let bindings = self.get_bindings(mode);
        let mut sections = Vec::new();

        // Numbers section: digits collapse into a single "0-9" row
        let mut number_items = Vec::new();
        let mut has_digits = false;
        for binding in &bindings {
            match binding.action {
                KeyAction::Input(InputEvent::Digit(_)) => {
                    if !has_digits {
                        number_items.push(("0-9".to_string(), binding.description.clone()));
                        has_digits = true;
                    }
                }
                KeyAction::Input(InputEvent::DecimalPoint) => {
                    number_items.push((binding.display.clone(), binding.description.clone()));
                }
                _ => {}
            }
        }
        if !number_items.is_empty() {
            sections.push(HelpSection {
                title: "Numbers".to_string(),
                items: number_items,
            });
        }

        // Operators section: ASCII keys only, the symbol keys duplicate them
        let operator_items: Vec<_> = bindings
            .iter()
            .filter(|b| {
                matches!(
                    b.action,
                    KeyAction::Input(InputEvent::Operator(_) | InputEvent::Equals)
                ) && b.display.is_ascii()
            })
            .map(|b| (b.display.clone(), b.description.clone()))
            .collect();
        if !operator_items.is_empty() {
            sections.push(HelpSection {
                title: "Operators".to_string(),
                items: operator_items,
            });
        }

        // Editing section
        let editing_items: Vec<_> = bindings
            .iter()
            .filter(|b| {
                matches!(
                    b.action,
                    KeyAction::Input(
                        InputEvent::Percent
                            | InputEvent::Backspace
                            | InputEvent::ClearEntry
                            | InputEvent::Clear
                    )
                )
            })
            .map(|b| (b.display.clone(), b.description.clone()))
            .collect();
        if !editing_items.is_empty() {
            sections.push(HelpSection {
                title: "Editing".to_string(),
                items: editing_items,
            });
        }

        // General section
        let general_items: Vec<_> = bindings
            .iter()
            .filter(|b| matches!(b.action, KeyAction::ToggleHelp | KeyAction::Quit))
            .map(|b| (b.display.clone(), b.description.clone()))
            .collect();
        if !general_items.is_empty() {
            sections.push(HelpSection {
                title: "General".to_string(),
                items: general_items,
            });
        }

        sections
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}
