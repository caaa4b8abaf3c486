// ============================================================================
// Numeric Module
// Currency-tagged fixed-point amounts with nano-unit precision
// ============================================================================
//
// This module provides:
// - Money: amount split into signed whole units and signed nanos (10^-9)
// - Operand: right-hand side of arithmetic (Money or a bare unit count)
// - MoneyError: Error types for construction, parsing and arithmetic
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - Values are validated once and never mutated
// - Units and nanos always share a sign

mod errors;
mod money;
mod operand;

pub use errors::{MoneyError, MoneyResult};
pub use money::Money;
pub use operand::Operand;
