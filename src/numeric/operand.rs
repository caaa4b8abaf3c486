// ============================================================================
// Operand
// Right-hand side of money arithmetic: another amount or a bare unit count
// ============================================================================

use super::money::Money;

/// Right-hand operand accepted by [`Money::checked_add`], [`Money::checked_sub`]
/// and [`Money::checked_div`].
///
/// A bare integer stands for that many whole units in the currency of the
/// left-hand amount, so it can never cause a currency mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A full money value, checked against the left operand's currency
    Money(Money),
    /// Whole units in the left operand's currency
    Units(i64),
}

impl Operand {
    /// Resolve into a concrete amount denominated like `lhs`.
    pub(crate) fn into_money(self, lhs: &Money) -> Money {
        match self {
            Operand::Money(money) => money,
            Operand::Units(units) => Money::from_units(lhs.currency_code(), units),
        }
    }
}

impl From<Money> for Operand {
    #[inline]
    fn from(money: Money) -> Self {
        Operand::Money(money)
    }
}

impl From<&Money> for Operand {
    #[inline]
    fn from(money: &Money) -> Self {
        Operand::Money(money.clone())
    }
}

impl From<i64> for Operand {
    #[inline]
    fn from(units: i64) -> Self {
        Operand::Units(units)
    }
}

impl From<i32> for Operand {
    #[inline]
    fn from(units: i32) -> Self {
        Operand::Units(i64::from(units))
    }
}
