//! Binary arithmetic for the calculator
//!
//! Results are reported as a tagged outcome instead of NaN/Infinity
//! sentinels. Callers route any `Err` to the engine's Error state.

use crate::types::Operator;
use thiserror::Error;

/// Smallest positive representable double (the first subnormal).
///
/// A divisor whose magnitude is below this is treated as zero.
pub const MIN_DIVISOR: f64 = f64::from_bits(1);

/// Arithmetic outcomes that cannot be shown as a number
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,

    /// The result is not a finite double
    #[error("result out of range")]
    Overflow,
}

impl Operator {
    /// Apply this operator to two operands
    pub fn apply(self, left: f64, right: f64) -> Result<f64, ArithmeticError> {
        let value = match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => {
                if right.abs() < MIN_DIVISOR {
                    return Err(ArithmeticError::DivisionByZero);
                }
                left / right
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(ArithmeticError::Overflow)
        }
    }
}

/// Combine the accumulator with the current operand.
///
/// With no pending operator the right operand is returned unchanged. This
/// happens when digits are typed after `=` and an operator is pressed.
pub fn calculate(
    left: f64,
    operator: Option<Operator>,
    right: f64,
) -> Result<f64, ArithmeticError> {
    match operator {
        Some(op) => op.apply(left, right),
        None => Ok(right),
    }
}
