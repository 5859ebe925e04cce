//! Tests for Application State Management
//!
//! These tests verify:
//! - AppState default initialization
//! - Mode switching between the calculator and the help overlay
//! - Status line and keypad highlight updates on dispatch
//! - Key and mouse events routed through App

use calctui::app::{App, AppMode, AppState};
use calctui::config_file::AppConfig;
use calctui::types::{Digit, InputEvent, Operator};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_keys(app: &mut App, keys: &str) {
    for c in keys.chars() {
        assert!(!app.handle_event(key(KeyCode::Char(c))), "{c:?} quit the app");
    }
}

// =============================================================================
// AppState Default Tests
// =============================================================================

#[test]
fn test_app_state_default_mode_is_calculator() {
    let state = AppState::default();
    assert_eq!(state.mode, AppMode::Calculator);
    assert!(!state.help_visible());
}

#[test]
fn test_app_state_default_status_is_ready() {
    let state = AppState::default();
    assert_eq!(state.status_message, "Ready");
    assert!(state.last_pressed.is_none());
}

#[test]
fn test_app_state_default_calculator_shows_zero() {
    let state = AppState::default();
    assert_eq!(state.calculator.display(), "0");
}

// =============================================================================
// Dispatch Tests
// =============================================================================

#[test]
fn test_dispatch_records_last_pressed() {
    let mut state = AppState::default();
    state.dispatch(InputEvent::Digit(Digit::ALL[3]));
    assert_eq!(state.last_pressed, Some(InputEvent::Digit(Digit::ALL[3])));
    assert_eq!(state.status_message, "Entering");

    state.dispatch(InputEvent::Operator(Operator::Multiply));
    assert_eq!(state.status_message, "Ready");
}

#[test]
fn test_dispatch_reports_error() {
    let mut state = AppState::default();
    for event in [
        InputEvent::Digit(Digit::ALL[1]),
        InputEvent::Operator(Operator::Divide),
        InputEvent::Digit(Digit::ALL[0]),
        InputEvent::Equals,
    ] {
        state.dispatch(event);
    }
    assert!(state.calculator.is_error());
    assert!(state.status_message.contains("Cannot compute"));

    state.dispatch(InputEvent::Clear);
    assert_eq!(state.status_message, "Ready");
}

// =============================================================================
// Mode Transition Tests
// =============================================================================

#[test]
fn test_toggle_help_round_trip() {
    let mut state = AppState::default();
    state.toggle_help();
    assert_eq!(state.mode, AppMode::Help);
    state.toggle_help();
    assert_eq!(state.mode, AppMode::Calculator);
}

// =============================================================================
// App Event Routing Tests
// =============================================================================

#[test]
fn test_app_keyboard_session() {
    let mut app = App::new(AppConfig::default());
    type_keys(&mut app, "5+3*2");
    assert!(!app.handle_event(key(KeyCode::Enter)));
    assert_eq!(app.state().calculator.display(), "16");
}

#[test]
fn test_app_edit_keys() {
    let mut app = App::new(AppConfig::default());
    type_keys(&mut app, "123");
    app.handle_event(key(KeyCode::Backspace));
    assert_eq!(app.state().calculator.display(), "12");

    type_keys(&mut app, "+");
    type_keys(&mut app, "99");
    app.handle_event(key(KeyCode::Delete));
    assert_eq!(app.state().calculator.display(), "0");
    assert_eq!(app.state().calculator.accumulator(), Some(12.0));

    app.handle_event(key(KeyCode::Esc));
    assert_eq!(app.state().calculator.accumulator(), None);
}

#[test]
fn test_app_comma_decimal_setting() {
    let mut app = App::new(AppConfig::default());
    type_keys(&mut app, "1,5");
    assert_eq!(app.state().calculator.display(), "1.5");

    let config = AppConfig {
        comma_decimal: false,
        ..AppConfig::default()
    };
    let mut app = App::new(config);
    type_keys(&mut app, "1,5");
    assert_eq!(app.state().calculator.display(), "15");
}

#[test]
fn test_ctrl_c_quits_from_help() {
    let mut app = App::new(AppConfig::default());
    app.handle_event(key(KeyCode::F(1)));
    assert!(app.state().help_visible());
    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.handle_event(ctrl_c));
}
