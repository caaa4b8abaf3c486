// ============================================================================
// Nano Money Library
// Fixed-point money values with strict sign and range invariants
// ============================================================================

//! # Nano Money
//!
//! A currency-tagged amount stored as whole `units` plus `nanos`
//! (billionths of a unit), in the shape of the Google Cloud `Money` type.
//!
//! ## Features
//!
//! - **Validated construction**: nanos range and sign consistency are
//!   checked once, values are immutable afterwards
//! - **Carry-aware arithmetic**: addition, subtraction and division never
//!   produce a mixed-sign pair
//! - **Canonical text form**: `"USD -12.5"` parsing and formatting
//! - **Decimal interop** with `rust_decimal` for API boundaries
//!
//! ## Example
//!
//! ```rust
//! use nano_money::prelude::*;
//!
//! let lunch = Money::parse("USD 12.5")?;
//! let tip = Money::new("USD", 2, 0)?;
//!
//! let total = lunch.checked_add(&tip)?;
//! assert_eq!(total, Money::new("USD", 14, 500_000_000)?);
//!
//! let share = total.checked_div(2)?;
//! assert_eq!(share, Money::new("USD", 7, 250_000_000)?);
//!
//! let err = total.checked_add(Money::new("EUR", 1, 0)?).unwrap_err();
//! assert!(matches!(err, MoneyError::CurrencyMismatch { .. }));
//! # Ok::<(), MoneyError>(())
//! ```

pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{Money, MoneyError, MoneyResult, Operand};
}
