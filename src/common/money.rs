use bigdecimal::{BigDecimal, ParseBigDecimalError, ToPrimitive};
use std::cmp::Ordering;
use std::fmt;
const SCALE: i64 = 10_000;

#[derive(Debug, Clone, Copy, Default, Hash)]
/// A signed monetary value with four fractional digits, stored as an integer
/// count of ten-thousandths.
///
/// Integer storage keeps credit/debit arithmetic exact: crediting and then
/// debiting the same amount always restores the previous balance. Arithmetic
/// is checked only; a result outside the `i64` range is `None`.
///
/// # Examples
/// ```
/// use bank_ledger::common::money::Money;
///
/// let amount = Money::new(1000); // Represents 0.1000 in currency
/// assert_eq!(amount.as_i64(), 1000);
/// assert_eq!(amount.to_string_4dp(), "0.1000");
/// ```
pub struct Money(i64);

impl Money {
    /// Balance reported by `Bank::get_balance` for an unknown account (-1.0).
    pub const NOT_FOUND: Money = Money(-SCALE);

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Whole currency units, e.g. `Money::from_units(100)` is 100.0000.
    /// Saturates at the representable range.
    pub fn from_units(units: i64) -> Self {
        Money(units.saturating_mul(SCALE))
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn to_big_decimal(&self) -> BigDecimal {
        BigDecimal::from(self.0) / BigDecimal::from(SCALE)
    }

    pub fn to_string_4dp(&self) -> String {
        format!("{:.4}", self.to_big_decimal())
    }

    /// Arithmetic mean rounded half-even to four places. `None` for an empty input.
    pub fn average<I>(values: I) -> Option<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        let (sum, count) = values
            .into_iter()
            .fold((BigDecimal::from(0), 0i64), |(sum, count), m| {
                (sum + BigDecimal::from(m.0), count + 1)
            });
        if count == 0 {
            return None;
        }

        let mean = (sum / BigDecimal::from(count)).round(0);
        mean.to_i64().map(Money)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        // Scale to 4 decimal places
        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_4dp())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}
