//! Property-Based Tests for calctui
//!
//! Uses proptest to drive the calculator with arbitrary key sequences.
//!
//! These tests verify:
//! - State invariants hold after every event
//! - Clear always restores the initial state
//! - Number entry and formatting properties
//! - Enum string round-trips

use calctui::engine::{format_value, parse_display, CalculatorState};
use calctui::types::{Digit, InputEvent, Operator};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

fn digit_strategy() -> impl Strategy<Value = Digit> {
    (0u8..10).prop_filter_map("digit", Digit::new)
}

/// Any input event, weighted towards digits so numbers get long enough
fn event_strategy() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        6 => digit_strategy().prop_map(InputEvent::Digit),
        1 => Just(InputEvent::DecimalPoint),
        3 => operator_strategy().prop_map(InputEvent::Operator),
        2 => Just(InputEvent::Equals),
        1 => Just(InputEvent::Clear),
        1 => Just(InputEvent::ClearEntry),
        1 => Just(InputEvent::Backspace),
        1 => Just(InputEvent::Percent),
    ]
}

fn run(events: &[InputEvent]) -> CalculatorState {
    let mut calc = CalculatorState::new();
    for event in events {
        calc.apply(*event);
    }
    calc
}

fn check_invariants(calc: &CalculatorState) -> Result<(), TestCaseError> {
    let display = calc.display();
    prop_assert!(!display.is_empty());
    prop_assert!(display.matches('.').count() <= 1, "display {:?}", display);

    if calc.is_error() {
        prop_assert_eq!(calc.accumulator(), None);
        prop_assert_eq!(calc.pending_operator(), None);
        prop_assert!(calc.is_new_entry());
    } else {
        prop_assert!(parse_display(display).is_some(), "display {:?}", display);
    }

    if calc.pending_operator().is_some() {
        prop_assert!(calc.accumulator().is_some());
    }
    Ok(())
}

// =============================================================================
// State Machine Properties
// =============================================================================

proptest! {
    /// Every reachable state satisfies the state invariants
    #[test]
    fn invariants_hold_after_every_event(events in prop::collection::vec(event_strategy(), 0..60)) {
        let mut calc = CalculatorState::new();
        for event in events {
            calc.apply(event);
            check_invariants(&calc)?;
        }
    }

    /// Clear returns to the initial state from anywhere
    #[test]
    fn clear_restores_initial_state(events in prop::collection::vec(event_strategy(), 0..40)) {
        let mut calc = run(&events);
        calc.apply(InputEvent::Clear);
        prop_assert_eq!(calc, CalculatorState::new());
    }

    /// Equals with no pending operator leaves the state untouched
    #[test]
    fn equals_without_operator_is_noop(events in prop::collection::vec(event_strategy(), 0..40)) {
        let calc = run(&events);
        prop_assume!(calc.pending_operator().is_none());
        let mut after = calc.clone();
        after.apply(InputEvent::Equals);
        prop_assert_eq!(after, calc);
    }

    /// A second operator only swaps the pending operator
    #[test]
    fn consecutive_operators_replace_pending(
        events in prop::collection::vec(event_strategy(), 0..40),
        first in operator_strategy(),
        second in operator_strategy(),
    ) {
        let mut calc = run(&events);
        calc.apply(InputEvent::Operator(first));
        prop_assume!(!calc.is_error());
        let before = calc.clone();
        calc.apply(InputEvent::Operator(second));

        prop_assert_eq!(calc.display(), before.display());
        prop_assert_eq!(calc.accumulator(), before.accumulator());
        prop_assert_eq!(calc.pending_operator(), Some(second));
    }
}

// =============================================================================
// Number Entry Properties
// =============================================================================

proptest! {
    /// Typed digits show without redundant leading zeros
    #[test]
    fn typed_digits_have_no_leading_zero(digits in prop::collection::vec(digit_strategy(), 1..15)) {
        let events: Vec<InputEvent> = digits.iter().copied().map(InputEvent::Digit).collect();
        let calc = run(&events);

        let typed: String = digits.iter().map(|d| d.as_char()).collect();
        let expected = typed.trim_start_matches('0');
        let expected = if expected.is_empty() { "0" } else { expected };
        prop_assert_eq!(calc.display(), expected);
    }

    /// Backspace undoes the last typed digit of a multi-digit entry
    #[test]
    fn backspace_undoes_digit(
        digits in prop::collection::vec(1u8..10, 1..10),
        last in digit_strategy(),
    ) {
        let mut events: Vec<InputEvent> = digits
            .iter()
            .filter_map(|d| Digit::new(*d))
            .map(InputEvent::Digit)
            .collect();
        let before = run(&events);

        events.push(InputEvent::Digit(last));
        events.push(InputEvent::Backspace);
        prop_assert_eq!(run(&events), before);
    }
}

// =============================================================================
// Formatting Properties
// =============================================================================

proptest! {
    /// Integers below 10^15 print exactly
    #[test]
    fn integers_format_exactly(n in -999_999_999_999_999i64..=999_999_999_999_999i64) {
        prop_assert_eq!(format_value(n as f64), n.to_string());
    }

    /// Formatted values parse back to within display precision
    #[test]
    fn format_then_parse_is_close(value in -1e12f64..1e12f64) {
        let text = format_value(value);
        let parsed = parse_display(&text).unwrap();
        // Relative for 15 significant digits, absolute for the integer snap
        let tolerance = (value.abs() * 1e-14).max(1e-12);
        prop_assert!((parsed - value).abs() <= tolerance, "{} -> {} -> {}", value, text, parsed);
    }

    /// Fractional output never carries trailing zeros
    #[test]
    fn no_trailing_zeros(value in prop::num::f64::NORMAL) {
        let text = format_value(value);
        let mantissa = text.split('e').next().unwrap_or_default();
        if mantissa.contains('.') {
            prop_assert!(!mantissa.ends_with('0') && !mantissa.ends_with('.'), "{}", text);
        }
    }
}

// =============================================================================
// Operator Enum Properties
// =============================================================================

proptest! {
    /// Operator: to_string → parse round-trip is identity
    #[test]
    fn operator_roundtrip(op in operator_strategy()) {
        let s = op.to_string();
        let parsed: Operator = s.parse().expect("Should parse");
        prop_assert_eq!(op, parsed);
    }

    /// Operator: every symbol is also accepted as a key
    #[test]
    fn operator_symbol_is_a_key(op in operator_strategy()) {
        let symbol = op.to_string();
        let c = symbol.chars().next().unwrap();
        prop_assert_eq!(Operator::from_char(c), Some(op));
    }
}
