// ============================================================================
// Money
// Currency-tagged fixed-point amount: whole units plus nano sub-units
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use super::operand::Operand;
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, Div, Sub};
use std::str::FromStr;
use std::sync::OnceLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static MONEY_RE: OnceLock<Regex> = OnceLock::new();

fn money_pattern() -> &'static Regex {
    MONEY_RE.get_or_init(|| {
        Regex::new(r"([A-Z]{3}) (-?)([0-9]+)\.([0-9]{1,9})").expect("money pattern compiles")
    })
}

/// An amount of money in a single currency.
///
/// The value is split into a signed whole part (`units`) and a signed
/// fractional part scaled by 10^9 (`nanos`). Both parts always describe one
/// signed quantity: when `units` is non-zero, `nanos` is zero or has the same
/// sign. The pair is validated on construction and never changes afterwards;
/// every operation returns a new value.
///
/// # Example
/// ```
/// use nano_money::numeric::Money;
///
/// let price = Money::new("USD", 10, 0)?;
/// let third = price.checked_div(3)?;
/// assert_eq!(third, Money::new("USD", 3, 333_333_333)?);
///
/// let change = Money::new("USD", 1, 0)?.checked_sub(Money::new("USD", 0, 1)?)?;
/// assert_eq!(change, Money::new("USD", 0, 999_999_999)?);
/// # Ok::<(), nano_money::numeric::MoneyError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MoneyRepr"))]
pub struct Money {
    currency_code: String,
    units: i64,
    nanos: i32,
    #[cfg_attr(feature = "serde", serde(skip))]
    is_negative: bool,
}

impl Money {
    /// Nano sub-units in one whole unit (10^9)
    pub const NANOS_PER_UNIT: i64 = 1_000_000_000;

    /// Largest nanos magnitude a value may carry
    pub const MAX_NANOS: i32 = 999_999_999;

    /// Number of fractional digits represented by nanos
    pub const NANO_DIGITS: usize = 9;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a validated amount.
    ///
    /// The currency code is kept as given; it is not checked against any
    /// registry.
    ///
    /// # Errors
    /// - `InvalidNanosRange` if `|nanos| > 999_999_999`
    /// - `SignMismatch` if `units` and `nanos` have opposite signs
    pub fn new(currency_code: impl Into<String>, units: i64, nanos: i32) -> MoneyResult<Self> {
        if !(-Self::MAX_NANOS..=Self::MAX_NANOS).contains(&nanos) {
            tracing::trace!(units, nanos, "rejected money: nanos out of range");
            return Err(MoneyError::InvalidNanosRange {
                nanos: i64::from(nanos),
            });
        }

        if (units < 0 && nanos > 0) || (units > 0 && nanos < 0) {
            tracing::trace!(units, nanos, "rejected money: sign mismatch");
            return Err(MoneyError::SignMismatch {
                units,
                nanos: i64::from(nanos),
            });
        }

        Ok(Self {
            currency_code: currency_code.into(),
            units,
            nanos,
            is_negative: units < 0 || nanos < 0,
        })
    }

    /// Create a whole amount with no fractional part.
    #[inline]
    pub fn from_units(currency_code: impl Into<String>, units: i64) -> Self {
        Self {
            currency_code: currency_code.into(),
            units,
            nanos: 0,
            is_negative: units < 0,
        }
    }

    /// Narrow wide intermediate results and validate them.
    fn from_wide(currency_code: impl Into<String>, units: i128, nanos: i128) -> MoneyResult<Self> {
        let units = i64::try_from(units).map_err(|_| MoneyError::Overflow)?;
        let nanos = i32::try_from(nanos).map_err(|_| MoneyError::InvalidNanosRange {
            nanos: i64::try_from(nanos).unwrap_or(if nanos < 0 { i64::MIN } else { i64::MAX }),
        })?;
        Self::new(currency_code, units, nanos)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The currency code this amount is denominated in.
    #[inline]
    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    /// The signed whole part.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.units
    }

    /// The signed fractional part, scaled by 10^9.
    #[inline]
    pub const fn nanos(&self) -> i32 {
        self.nanos
    }

    /// True when either part is below zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.is_negative
    }

    /// True for every amount that is not negative, zero included.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        !self.is_negative
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.units == 0 && self.nanos == 0
    }

    /// Structural equality: same currency, same units, same nanos.
    #[inline]
    pub fn equals(&self, other: &Money) -> bool {
        self == other
    }

    // ========================================================================
    // Parsing
    // ========================================================================

    /// Parse the canonical form `"{CCC} {-}{units}.{nanos}"`.
    ///
    /// The pattern may appear anywhere in `text`. Nanos digits are read as a
    /// fraction, so `.5` is 500,000,000 nanos. The sign belongs to the units
    /// and the nanos follow it; a negative zero-units amount such as
    /// `"USD -0.5"` therefore parses as positive.
    ///
    /// # Errors
    /// - `Format` if no canonical value is found
    /// - `Overflow` if the units do not fit in an i64
    pub fn parse(text: &str) -> MoneyResult<Self> {
        let captures = money_pattern().captures(text).ok_or_else(|| {
            tracing::trace!(input = text, "rejected money: unrecognized format");
            MoneyError::Format
        })?;

        let magnitude: i64 = captures[3].parse().map_err(|_| MoneyError::Overflow)?;
        let units = if &captures[2] == "-" {
            -magnitude
        } else {
            magnitude
        };

        let padded = format!("{:0<width$}", &captures[4], width = Self::NANO_DIGITS);
        let fraction: i32 = padded.parse().map_err(|_| MoneyError::Format)?;
        let nanos = if units < 0 { -fraction } else { fraction };

        Self::new(&captures[1], units, nanos)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Add an amount or a whole number of units.
    ///
    /// Nanos that overflow a whole unit are carried into `units`; if the
    /// parts end up with opposite signs one unit is borrowed back so the
    /// result is always sign-consistent.
    ///
    /// # Errors
    /// - `CurrencyMismatch` if `rhs` is money in another currency
    /// - `Overflow` if the units leave the i64 range
    pub fn checked_add(&self, rhs: impl Into<Operand>) -> MoneyResult<Self> {
        let rhs = rhs.into().into_money(self);
        self.ensure_same_currency(&rhs)?;
        self.add_unchecked_currency(&rhs)
    }

    /// Subtract an amount or a whole number of units.
    ///
    /// Computed as `self + (-rhs)`, so crossing a unit boundary borrows
    /// instead of producing mixed signs.
    ///
    /// # Errors
    /// - `CurrencyMismatch` if `rhs` is money in another currency
    /// - `Overflow` if the units leave the i64 range
    pub fn checked_sub(&self, rhs: impl Into<Operand>) -> MoneyResult<Self> {
        let rhs = rhs.into().into_money(self);
        self.ensure_same_currency(&rhs)?;
        self.add_unchecked_currency(&rhs.checked_neg()?)
    }

    /// Negate both parts.
    ///
    /// # Errors
    /// Returns `Overflow` when `units` is `i64::MIN`.
    pub fn checked_neg(&self) -> MoneyResult<Self> {
        let units = self.units.checked_neg().ok_or(MoneyError::Overflow)?;
        Self::new(self.currency_code.clone(), units, -self.nanos)
    }

    /// Divide by an amount or a whole number of units.
    ///
    /// Both sides are reduced to non-negative counts of nanos. The quotient
    /// of those counts becomes the units; the remainder is spread over the
    /// divisor's whole units to give the nanos. A divisor without whole
    /// units only divides a dividend without whole units, in which case the
    /// quotient is expressed in nanos. The result is negative when exactly
    /// one operand is negative.
    ///
    /// # Errors
    /// - `CurrencyMismatch` if `divisor` is money in another currency
    /// - `DivisionByZero` if the divisor is zero
    /// - `DivisionByZeroUnits` if the divisor has no whole units but the
    ///   dividend does
    /// - `InvalidNanosRange` if the spread remainder reaches a whole unit
    /// - `Overflow` if the units leave the i64 range
    pub fn checked_div(&self, divisor: impl Into<Operand>) -> MoneyResult<Self> {
        let divisor = divisor.into().into_money(self);
        self.ensure_same_currency(&divisor)?;

        let numerator = self.improper_numerator();
        let denominator = divisor.improper_numerator();
        if denominator == 0 {
            tracing::trace!(currency = %self.currency_code, "rejected division by zero");
            return Err(MoneyError::DivisionByZero);
        }

        let divisor_units = i128::from(divisor.units.unsigned_abs());
        let (units, nanos) = if divisor_units != 0 {
            (
                numerator / denominator,
                (numerator % denominator) / divisor_units,
            )
        } else if self.units == 0 {
            (0, numerator / denominator)
        } else {
            tracing::trace!(
                currency = %self.currency_code,
                units = self.units,
                "rejected division by a divisor without whole units"
            );
            return Err(MoneyError::DivisionByZeroUnits);
        };

        if self.is_negative != divisor.is_negative {
            Self::from_wide(self.currency_code.clone(), -units, -nanos)
        } else {
            Self::from_wide(self.currency_code.clone(), units, nanos)
        }
    }

    /// Sum amounts the way an integer-seeded fold does: starting from a bare
    /// zero, which adopts the currency of the first amount.
    ///
    /// Returns `None` for an empty input, where only the currency-less seed
    /// remains.
    ///
    /// # Errors
    /// Propagates the first error from [`Money::checked_add`].
    pub fn sum<I>(items: I) -> MoneyResult<Option<Self>>
    where
        I: IntoIterator<Item = Money>,
    {
        let mut items = items.into_iter();
        let Some(first) = items.next() else {
            return Ok(None);
        };

        let seed = first.checked_add(0i64)?;
        items
            .try_fold(seed, |acc, item| acc.checked_add(item))
            .map(Some)
    }

    fn ensure_same_currency(&self, other: &Money) -> MoneyResult<()> {
        if self.currency_code == other.currency_code {
            return Ok(());
        }

        tracing::trace!(
            expected = %self.currency_code,
            found = %other.currency_code,
            "rejected operation across currencies"
        );
        Err(MoneyError::CurrencyMismatch {
            expected: self.currency_code.clone(),
            found: other.currency_code.clone(),
        })
    }

    fn add_unchecked_currency(&self, rhs: &Money) -> MoneyResult<Self> {
        // |sum| < 2 * NANOS_PER_UNIT, so carry is -1, 0 or 1
        let sum_nanos = i64::from(self.nanos) + i64::from(rhs.nanos);
        let carry = sum_nanos / Self::NANOS_PER_UNIT;
        let mut nanos = sum_nanos % Self::NANOS_PER_UNIT;

        let mut units = self
            .units
            .checked_add(rhs.units)
            .and_then(|units| units.checked_add(carry))
            .ok_or(MoneyError::Overflow)?;

        if units > 0 && nanos < 0 {
            units -= 1;
            nanos += Self::NANOS_PER_UNIT;
        } else if units < 0 && nanos > 0 {
            units += 1;
            nanos -= Self::NANOS_PER_UNIT;
        }

        Self::from_wide(self.currency_code.clone(), units.into(), nanos.into())
    }

    /// Magnitude as a single count of nanos.
    #[inline]
    fn improper_numerator(&self) -> i128 {
        i128::from(self.units.unsigned_abs()) * i128::from(Self::NANOS_PER_UNIT)
            + i128::from(self.nanos.unsigned_abs())
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq<i64> for Money {
    /// A bare number is never equal to an amount of money.
    #[inline]
    fn eq(&self, _other: &i64) -> bool {
        false
    }
}

impl PartialEq<f64> for Money {
    #[inline]
    fn eq(&self, _other: &f64) -> bool {
        false
    }
}

// Operators return MoneyResult so they never panic
impl<R: Into<Operand>> Add<R> for Money {
    type Output = MoneyResult<Money>;

    #[inline]
    fn add(self, rhs: R) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl<R: Into<Operand>> Add<R> for &Money {
    type Output = MoneyResult<Money>;

    #[inline]
    fn add(self, rhs: R) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl<R: Into<Operand>> Sub<R> for Money {
    type Output = MoneyResult<Money>;

    #[inline]
    fn sub(self, rhs: R) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl<R: Into<Operand>> Sub<R> for &Money {
    type Output = MoneyResult<Money>;

    #[inline]
    fn sub(self, rhs: R) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl<R: Into<Operand>> Div<R> for Money {
    type Output = MoneyResult<Money>;

    #[inline]
    fn div(self, rhs: R) -> Self::Output {
        self.checked_div(rhs)
    }
}

impl<R: Into<Operand>> Div<R> for &Money {
    type Output = MoneyResult<Money>;

    #[inline]
    fn div(self, rhs: R) -> Self::Output {
        self.checked_div(rhs)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Money({:?}, {}, {})",
            self.currency_code, self.units, self.nanos
        )
    }
}

impl fmt::Display for Money {
    /// Nanos are printed as a bare integer without zero padding, so the
    /// output does not always parse back to the same amount: one nano prints
    /// as `.1`, which parses as 100,000,000 nanos.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}{}.{}",
            self.currency_code,
            if self.is_negative { "-" } else { "" },
            self.units.unsigned_abs(),
            self.nanos.unsigned_abs()
        )
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Money {
    /// Convert to a `rust_decimal::Decimal` with nine fractional digits.
    pub fn to_decimal(&self) -> Decimal {
        let raw = i128::from(self.units) * i128::from(Self::NANOS_PER_UNIT)
            + i128::from(self.nanos);
        // |raw| < 2^63 * 10^9, well inside Decimal's 96-bit mantissa
        Decimal::from_i128_with_scale(raw, Self::NANO_DIGITS as u32)
    }

    /// Convert from a `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the value has digits below one nano
    /// - `Overflow` if the whole part does not fit in an i64
    pub fn from_decimal(currency_code: impl Into<String>, value: Decimal) -> MoneyResult<Self> {
        if value.normalize().scale() > Self::NANO_DIGITS as u32 {
            return Err(MoneyError::PrecisionLoss);
        }

        let raw = value
            .checked_mul(Decimal::from(Self::NANOS_PER_UNIT))
            .and_then(|scaled| scaled.to_i128())
            .ok_or(MoneyError::Overflow)?;
        let per_unit = i128::from(Self::NANOS_PER_UNIT);

        Self::from_wide(currency_code, raw / per_unit, raw % per_unit)
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct MoneyRepr {
    currency_code: String,
    units: i64,
    nanos: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<MoneyRepr> for Money {
    type Error = MoneyError;

    fn try_from(repr: MoneyRepr) -> Result<Self, Self::Error> {
        Money::new(repr.currency_code, repr.units, repr.nanos)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(units: i64, nanos: i32) -> Money {
        Money::new("USD", units, nanos).unwrap()
    }

    #[test]
    fn test_constants() {
        assert_eq!(Money::NANOS_PER_UNIT, 1_000_000_000);
        assert_eq!(Money::MAX_NANOS, 999_999_999);
        assert_eq!(Money::NANO_DIGITS, 9);
    }

    #[test]
    fn test_new_nanos_out_of_range() {
        assert_eq!(
            Money::new("USD", 0, -1_000_000_000),
            Err(MoneyError::InvalidNanosRange {
                nanos: -1_000_000_000
            })
        );
        assert_eq!(
            Money::new("USD", 0, 1_000_000_000),
            Err(MoneyError::InvalidNanosRange {
                nanos: 1_000_000_000
            })
        );
    }

    #[test]
    fn test_new_sign_mismatch() {
        assert_eq!(
            Money::new("USD", -1, 1),
            Err(MoneyError::SignMismatch { units: -1, nanos: 1 })
        );
        assert_eq!(
            Money::new("USD", 1, -1),
            Err(MoneyError::SignMismatch { units: 1, nanos: -1 })
        );
    }

    #[test]
    fn test_new_accepts_consistent_signs() {
        for (units, nanos) in [(-1, 0), (-1, -1), (0, 0), (0, 1), (0, -1), (1, 0), (1, 1)] {
            assert!(
                Money::new("USD", units, nanos).is_ok(),
                "({}, {}) should be valid",
                units,
                nanos
            );
        }
    }

    #[test]
    fn test_sign_flags() {
        assert!(usd(0, 0).is_positive());
        assert!(!usd(0, 0).is_negative());
        assert!(usd(0, -1).is_negative());
        assert!(usd(-3, 0).is_negative());
        assert!(usd(2, 5).is_positive());
        assert!(Money::from_units("USD", -4).is_negative());
    }

    #[test]
    fn test_accessors() {
        let m = usd(12, 340_000_000);
        assert_eq!(m.currency_code(), "USD");
        assert_eq!(m.units(), 12);
        assert_eq!(m.nanos(), 340_000_000);
        assert!(!m.is_zero());
        assert!(usd(0, 0).is_zero());
    }

    #[test]
    fn test_equality() {
        let a = usd(10, 0);
        assert_eq!(a, a.clone());
        assert!(a.equals(&usd(10, 0)));
        assert_ne!(a, Money::new("CAD", 10, 0).unwrap());
        assert_ne!(usd(1, 1), usd(1, 100_000_000));
    }

    #[test]
    fn test_never_equal_to_bare_number() {
        let a = usd(10, 0);
        assert!(a != 10i64);
        assert!(a != 10.0f64);
    }

    #[test]
    fn test_display() {
        assert_eq!(usd(10, 0).to_string(), "USD 10.0");
        assert_eq!(usd(1, 500_000_000).to_string(), "USD 1.500000000");
        assert_eq!(usd(-1, -5).to_string(), "USD -1.5");
        assert_eq!(usd(0, -1).to_string(), "USD -0.1");
        assert_eq!(usd(0, 1).to_string(), "USD 0.1");
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", usd(10, 0)), "Money(\"USD\", 10, 0)");
        assert_eq!(format!("{:?}", usd(-2, -7)), "Money(\"USD\", -2, -7)");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("USD 10.0").unwrap(), usd(10, 0));
        assert_eq!(Money::parse("USD 1.5").unwrap(), usd(1, 500_000_000));
        assert_eq!(Money::parse("USD 0.000000001").unwrap(), usd(0, 1));
        assert_eq!(Money::parse("USD -2.25").unwrap(), usd(-2, -250_000_000));
    }

    #[test]
    fn test_parse_negative_zero_units_loses_sign() {
        let m = Money::parse("USD -0.5").unwrap();
        assert_eq!(m, usd(0, 500_000_000));
        assert!(m.is_positive());
    }

    #[test]
    fn test_parse_tolerates_surrounding_text() {
        assert_eq!(Money::parse("total: EUR 3.75 due").unwrap().units(), 3);
        assert_eq!(
            "balance=GBP 12.1;".parse::<Money>().unwrap(),
            Money::new("GBP", 12, 100_000_000).unwrap()
        );
    }

    #[test]
    fn test_parse_invalid() {
        for text in ["", "usd 1.0", "USD 1", "USD1.0", "US 1.0", "USD .5", "USD 1.", "USD +1.0"] {
            assert_eq!(Money::parse(text), Err(MoneyError::Format), "{:?}", text);
        }
        assert_eq!(
            Money::parse("USD 99999999999999999999.0"),
            Err(MoneyError::Overflow)
        );
    }

    #[test]
    fn test_display_is_not_parse_inverse() {
        let one_nano = usd(0, 1);
        let reparsed = Money::parse(&one_nano.to_string()).unwrap();
        assert_eq!(reparsed, usd(0, 100_000_000));
        assert_ne!(reparsed, one_nano);

        // Nine significant digits survive
        let full = usd(4, 123_456_789);
        assert_eq!(Money::parse(&full.to_string()).unwrap(), full);
    }

    #[test]
    fn test_add() {
        assert_eq!(usd(0, 0).checked_add(usd(0, 0)).unwrap(), usd(0, 0));
        assert_eq!(usd(10, 0).checked_add(usd(10, 0)).unwrap(), usd(20, 0));
        assert_eq!(
            usd(0, 999_999_998).checked_add(usd(0, 1)).unwrap(),
            usd(0, 999_999_999)
        );
    }

    #[test]
    fn test_add_carry() {
        assert_eq!(usd(0, 999_999_999).checked_add(usd(0, 1)).unwrap(), usd(1, 0));
        assert_eq!(
            usd(-1, -600_000_000).checked_add(usd(-1, -500_000_000)).unwrap(),
            usd(-3, -100_000_000)
        );
    }

    #[test]
    fn test_add_mixed_signs_borrows() {
        assert_eq!(usd(2, 0).checked_add(usd(-1, -500_000_000)).unwrap(), usd(0, 500_000_000));
        assert_eq!(usd(-2, 0).checked_add(usd(1, 500_000_000)).unwrap(), usd(0, -500_000_000));
        assert_eq!(usd(0, -1).checked_add(usd(0, 0)).unwrap(), usd(0, -1));
        assert_eq!(usd(1, 0).checked_add(usd(0, -1)).unwrap(), usd(0, 999_999_999));
    }

    #[test]
    fn test_add_units_operand() {
        assert_eq!(usd(1, 250_000_000).checked_add(2).unwrap(), usd(3, 250_000_000));
        assert_eq!((usd(1, 0) + 4i64).unwrap(), usd(5, 0));
    }

    #[test]
    fn test_add_currency_mismatch() {
        let result = usd(10, 0).checked_add(Money::new("CAD", 10, 0).unwrap());
        assert_eq!(
            result,
            Err(MoneyError::CurrencyMismatch {
                expected: "USD".to_string(),
                found: "CAD".to_string(),
            })
        );
    }

    #[test]
    fn test_add_overflow() {
        assert_eq!(
            Money::from_units("USD", i64::MAX).checked_add(1),
            Err(MoneyError::Overflow)
        );
    }

    #[test]
    fn test_sum() {
        assert_eq!(Money::sum(vec![usd(10, 0)]).unwrap(), Some(usd(10, 0)));
        assert_eq!(
            Money::sum(vec![usd(1, 600_000_000), usd(2, 500_000_000), usd(0, 1)]).unwrap(),
            Some(usd(4, 100_000_001))
        );
        assert_eq!(Money::sum(Vec::new()).unwrap(), None);
        assert!(matches!(
            Money::sum(vec![usd(1, 0), Money::new("EUR", 1, 0).unwrap()]),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_sub() {
        assert_eq!(usd(5, 0).checked_sub(usd(3, 0)).unwrap(), usd(2, 0));
        assert_eq!(usd(3, 0).checked_sub(usd(5, 0)).unwrap(), usd(-2, 0));
        assert_eq!(usd(5, 0).checked_sub(2).unwrap(), usd(3, 0));
        assert_eq!(usd(2, 5).checked_sub(usd(2, 5)).unwrap(), usd(0, 0));
    }

    #[test]
    fn test_sub_across_unit_boundary() {
        assert_eq!(usd(1, 0).checked_sub(usd(0, 1)).unwrap(), usd(0, 999_999_999));
        assert_eq!(
            usd(1, 200_000_000).checked_sub(usd(0, 700_000_000)).unwrap(),
            usd(0, 500_000_000)
        );
        assert_eq!(
            usd(0, 200_000_000).checked_sub(usd(1, 0)).unwrap(),
            usd(0, -800_000_000)
        );
        assert_eq!(
            usd(-1, 0).checked_sub(usd(0, 1)).unwrap(),
            usd(-1, -1)
        );
    }

    #[test]
    fn test_sub_currency_mismatch() {
        assert!(matches!(
            usd(1, 0) - Money::new("JPY", 1, 0).unwrap(),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_neg() {
        assert_eq!(usd(3, 5).checked_neg().unwrap(), usd(-3, -5));
        assert_eq!(usd(0, 0).checked_neg().unwrap(), usd(0, 0));
        assert_eq!(
            Money::from_units("USD", i64::MIN).checked_neg(),
            Err(MoneyError::Overflow)
        );
    }

    #[test]
    fn test_div_by_units() {
        assert_eq!(usd(10, 0).checked_div(10).unwrap(), usd(1, 0));
        assert_eq!(usd(10, 0).checked_div(3).unwrap(), usd(3, 333_333_333));
        assert_eq!((&usd(9, 0) / 2i64).unwrap(), usd(4, 500_000_000));
    }

    #[test]
    fn test_div_by_money() {
        assert_eq!(usd(10, 0).checked_div(usd(10, 0)).unwrap(), usd(1, 0));
        assert_eq!(usd(0, 50).checked_div(usd(0, 2)).unwrap(), usd(0, 25));
    }

    #[test]
    fn test_div_signs() {
        assert_eq!(usd(-10, 0).checked_div(4).unwrap(), usd(-2, -500_000_000));
        assert_eq!(usd(10, 0).checked_div(-4).unwrap(), usd(-2, -500_000_000));
        assert_eq!(usd(-10, 0).checked_div(-4).unwrap(), usd(2, 500_000_000));
        assert_eq!(usd(0, -50).checked_div(usd(0, 2)).unwrap(), usd(0, -25));
    }

    #[test]
    fn test_div_by_zero() {
        assert_eq!(usd(10, 0).checked_div(0), Err(MoneyError::DivisionByZero));
        assert_eq!(
            usd(10, 0).checked_div(usd(0, 0)),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[test]
    fn test_div_by_zero_units() {
        assert_eq!(
            usd(10, 0).checked_div(usd(0, 5)),
            Err(MoneyError::DivisionByZeroUnits)
        );
    }

    #[test]
    fn test_div_remainder_reaching_whole_unit() {
        // 10 / 3.5: remainder 3e9 spread over 3 units is a full unit of nanos
        assert_eq!(
            usd(10, 0).checked_div(usd(3, 500_000_000)),
            Err(MoneyError::InvalidNanosRange {
                nanos: 1_000_000_000
            })
        );
    }

    #[test]
    fn test_div_currency_mismatch() {
        assert!(matches!(
            usd(10, 0).checked_div(Money::new("CAD", 10, 0).unwrap()),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_to_decimal() {
        assert_eq!(usd(123, 456_000_000).to_decimal().to_string(), "123.456000000");
        assert_eq!(usd(0, -1).to_decimal().to_string(), "-0.000000001");
        assert_eq!(usd(-7, -250_000_000).to_decimal(), Decimal::new(-725, 2));
    }

    #[test]
    fn test_from_decimal() {
        let m = Money::from_decimal("USD", Decimal::new(12345, 2)).unwrap();
        assert_eq!(m, usd(123, 450_000_000));

        let neg = Money::from_decimal("USD", Decimal::new(-5, 1)).unwrap();
        assert_eq!(neg, usd(0, -500_000_000));

        assert_eq!(
            Money::from_decimal("USD", Decimal::new(1, 10)),
            Err(MoneyError::PrecisionLoss)
        );
        // Trailing zeros beyond nine digits are not significant
        assert_eq!(
            Money::from_decimal("USD", Decimal::new(10, 10)).unwrap(),
            usd(0, 1)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let m = usd(-4, -20);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"currency_code":"USD","units":-4,"nanos":-20}"#);
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
        assert!(back.is_negative());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_invalid() {
        let result: Result<Money, _> =
            serde_json::from_str(r#"{"currency_code":"USD","units":1,"nanos":-1}"#);
        assert!(result.is_err());
    }
}
