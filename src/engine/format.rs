//! Display formatting and parsing
//!
//! The display always uses `.` as the decimal separator, independent of the
//! user's locale, and whatever [`format_value`] produces is accepted by
//! [`parse_display`].

/// Literal shown when a calculation has no numeric result
pub const ERROR_TEXT: &str = "Error";

/// Maximum significant digits rendered for non-integer values
pub const SIGNIFICANT_DIGITS: usize = 15;

/// Values this close to an integer are rendered as that integer
pub const INTEGER_TOLERANCE: f64 = 1e-12;

/// Smallest decimal exponent rendered in fixed-point form
const MIN_FIXED_EXPONENT: i32 = -4;

/// Format a finite value for the display.
///
/// Non-finite values never reach this function; the engine routes them to
/// the Error state first.
pub fn format_value(value: f64) -> String {
    debug_assert!(value.is_finite(), "non-finite value passed to format_value");

    let rounded = value.round();
    if (value - rounded).abs() < INTEGER_TOLERANCE {
        if rounded == 0.0 {
            // Covers -0.0
            return "0".to_string();
        }
        // Exact for any integral double, whatever its magnitude
        return format!("{:.0}", rounded);
    }

    format_significant(value)
}

/// Render up to 15 significant digits of a non-integer, switching to
/// scientific notation for very small or very large magnitudes.
fn format_significant(value: f64) -> String {
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if !(MIN_FIXED_EXPONENT..SIGNIFICANT_DIGITS as i32).contains(&exponent) {
        return format!("{}e{}", trim_fraction(mantissa), exponent);
    }

    let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent).max(0) as usize;
    trim_fraction(&format!("{:.*}", decimals, value)).to_string()
}

/// Strip trailing zeros (and a dangling point) from a fractional literal
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Parse the display text as a finite number.
///
/// Returns `None` for the error literal, empty text, and anything that does
/// not denote a finite value.
pub fn parse_display(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() || text == ERROR_TEXT {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
