//! [`Money`]-related definitions.

use std::{fmt, iter, ops, str::FromStr};

use derive_more::{From, Into};
use rust_decimal::{prelude::ToPrimitive as _, Decimal};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Amount of money in euros.
///
/// Amounts are signed: a cashflow may be negative.
///
/// Arithmetic saturates at the bounds of [`Decimal`] instead of overflowing.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(transparent)
)]
pub struct Money(Decimal);

impl Money {
    /// Zero [`Money`].
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Largest representable [`Money`].
    pub const MAX: Self = Self(Decimal::MAX);

    /// Suffix used when displaying and parsing [`Money`].
    const CURRENCY: &'static str = "EUR";

    /// Creates a new [`Money`] out of the provided `amount`.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Returns the amount of this [`Money`].
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Indicates whether this [`Money`] is strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Self(amount.into())
    }
}

impl ops::Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl ops::Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        Self(self.0.saturating_mul(factor))
    }
}

impl iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, ops::Add::add)
    }
}

impl<'a> iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let currency = Self::CURRENCY;
        match self.0.normalize() {
            amount if amount.is_integer() => match amount.to_i128() {
                Some(int) => write!(f, "{int}{currency}"),
                None => write!(f, "{amount}{currency}"),
            },
            amount => write!(f, "{amount}{currency}"),
        }
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = s.strip_suffix(Self::CURRENCY).unwrap_or(s);
        if amount.is_empty() {
            return Err("too short");
        }

        Decimal::from_str(amount)
            .map(Self)
            .map_err(|_| "invalid amount")
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::Money;

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Money::from_str("123.45EUR").unwrap(),
            Money::new(decimal("123.45")),
        );
        assert_eq!(
            Money::from_str("123.45").unwrap(),
            Money::new(decimal("123.45")),
        );
        assert_eq!(Money::from_str("-50EUR").unwrap(), Money::from(-50));

        assert!(Money::from_str("").is_err());
        assert!(Money::from_str("EUR").is_err());
        assert!(Money::from_str("123.45USD").is_err());
        assert!(Money::from_str("12a").is_err());
    }

    #[test]
    fn to_string() {
        assert_eq!(Money::new(decimal("123.45")).to_string(), "123.45EUR");
        assert_eq!(Money::new(decimal("123.00")).to_string(), "123EUR");
        assert_eq!(Money::new(decimal("123.0")).to_string(), "123EUR");
        assert_eq!(Money::from(-7).to_string(), "-7EUR");
        assert_eq!(Money::new(decimal("0.50")).to_string(), "0.5EUR");
    }

    #[test]
    fn scales_exactly() {
        let budget = Money::from(150_000) + Money::from(20_000);

        assert_eq!(budget * Decimal::new(11, 1), Money::from(187_000));
    }

    #[test]
    fn sums() {
        let prices = [Money::from(100), Money::from(250), Money::from(-50)];

        assert_eq!(prices.iter().sum::<Money>(), Money::from(300));
        assert_eq!(Vec::<Money>::new().into_iter().sum::<Money>(), Money::ZERO);
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        assert_eq!(Money::MAX + Money::from(1), Money::MAX);
        assert_eq!(Money::MAX * Decimal::new(11, 1), Money::MAX);
        assert_eq!(
            Money::new(Decimal::MIN) + Money::from(-1),
            Money::new(Decimal::MIN),
        );
        assert_eq!([Money::MAX, Money::MAX].iter().sum::<Money>(), Money::MAX);
    }

    #[test]
    fn positivity() {
        assert!(Money::from(1).is_positive());
        assert!(!Money::ZERO.is_positive());
        assert!(!Money::from(-1).is_positive());
    }
}
