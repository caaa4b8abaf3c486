// ============================================================================
// Money Errors
// Error types for money construction, parsing and arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while building or combining [`Money`](super::Money) values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MoneyError {
    /// Nanos magnitude exceeded 999,999,999
    InvalidNanosRange { nanos: i64 },
    /// Units and nanos carry opposite signs
    SignMismatch { units: i64, nanos: i64 },
    /// Input string does not contain a canonical money value
    Format,
    /// Operands are denominated in different currencies
    CurrencyMismatch { expected: String, found: String },
    /// Attempted division by a zero amount
    DivisionByZero,
    /// Divisor has no whole units to spread the remainder over
    DivisionByZeroUnits,
    /// Units fell outside the i64 range
    Overflow,
    /// Conversion would lose significant fractional digits
    PrecisionLoss,
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::InvalidNanosRange { nanos } => write!(
                f,
                "nanos must be between -999999999 and 999999999, got {}",
                nanos
            ),
            MoneyError::SignMismatch { units, nanos } => write!(
                f,
                "nanos must share the sign of units (units={}, nanos={})",
                units, nanos
            ),
            MoneyError::Format => write!(
                f,
                "the value must be in the money format \"{{CurrencyCode}} {{-}}{{Units}}.{{Nanos}}\""
            ),
            MoneyError::CurrencyMismatch { expected, found } => {
                write!(f, "currency codes must match: {} vs {}", expected, found)
            },
            MoneyError::DivisionByZero => write!(f, "division by zero"),
            MoneyError::DivisionByZeroUnits => {
                write!(f, "division by zero: divisor has no whole units")
            },
            MoneyError::Overflow => write!(f, "arithmetic overflow: units out of range"),
            MoneyError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
        }
    }
}

impl std::error::Error for MoneyError {}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;
