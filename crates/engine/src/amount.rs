use std::{fmt, str::FromStr};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{EngineError, ResultEngine};

/// Number of fractional digits kept by an [`Amount`].
pub const AMOUNT_SCALE: u32 = 3;

/// Largest absolute value, in thousandths, an [`Amount`] can hold
/// (6 significant digits, 3 of them fractional).
pub const AMOUNT_MAX_MINOR: i64 = 999_999;

/// Signed entry amount represented as **integer thousandths**.
///
/// The stored precision is fixed: at most 3 integer digits and 3 fractional
/// digits, so the representable range is `-999.999 ..= 999.999`.
///
/// # Examples
///
/// ```rust
/// use engine::Amount;
///
/// let amount: Amount = "100".parse().unwrap();
/// assert_eq!(amount.minor(), 100_000);
/// assert_eq!(amount.to_string(), "100.000");
/// assert!("0.0001".parse::<Amount>().is_err());
/// assert!("1000".parse::<Amount>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// Creates an amount from integer thousandths, rejecting values outside
    /// the fixed precision.
    pub fn from_minor(minor: i64) -> ResultEngine<Self> {
        if minor.unsigned_abs() > AMOUNT_MAX_MINOR.unsigned_abs() {
            return Err(EngineError::InvalidAmount(
                "amount exceeds 3 integer digits".to_string(),
            ));
        }
        Ok(Self(minor))
    }

    /// Returns the raw value in thousandths.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, AMOUNT_SCALE)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = EngineError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        let normalized = value.normalize();
        if normalized.scale() > AMOUNT_SCALE {
            return Err(EngineError::InvalidAmount(format!(
                "{value} has more than {AMOUNT_SCALE} decimal places"
            )));
        }

        let minor = normalized
            .checked_mul(Decimal::from(1000))
            .and_then(|scaled| scaled.to_i64())
            .ok_or_else(|| EngineError::InvalidAmount(format!("{value} is too large")))?;

        Self::from_minor(minor)
    }
}

impl From<Amount> for Decimal {
    fn from(value: Amount) -> Self {
        value.to_decimal()
    }
}

impl FromStr for Amount {
    type Err = EngineError;

    /// Parses a decimal string.
    ///
    /// Accepts `.` or `,` as decimal separator. Rejects empty input, more
    /// than 3 fractional digits and more than 3 integer digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EngineError::InvalidAmount("empty amount".to_string()));
        }

        let decimal = Decimal::from_str(&trimmed.replace(',', "."))
            .map_err(|_| EngineError::InvalidAmount(format!("invalid amount '{trimmed}'")))?;

        Self::try_from(decimal)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let decimal = <Decimal as Deserialize>::deserialize(deserializer)?;
        Amount::try_from(decimal).map_err(de::Error::custom)
    }
}
