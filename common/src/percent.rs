//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::Decimal;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Floating-point percentage.
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd,
)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(into = "Decimal", try_from = "Decimal")
)]
pub struct Percent(Decimal);

impl Percent {
    /// Zero [`Percent`].
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Percent`] by checking the provided value is not less
    /// than `0` and not greater than `100`.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        (Decimal::ZERO..=Decimal::ONE_HUNDRED)
            .contains(&val)
            .then_some(Self(val))
    }

    /// Returns the value of this [`Percent`].
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Percent> for Decimal {
    fn from(percent: Percent) -> Self {
        percent.0
    }
}

impl TryFrom<Decimal> for Percent {
    type Error = &'static str;

    fn try_from(val: Decimal) -> Result<Self, Self::Error> {
        Self::new(val).ok_or("percent must be within `0..=100`")
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.strip_suffix('%').unwrap_or(s))
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::Percent;

    #[test]
    fn validates_range() {
        assert!(Percent::new(Decimal::ZERO).is_some());
        assert!(Percent::new(Decimal::ONE_HUNDRED).is_some());
        assert!(Percent::new(Decimal::new(65, 1)).is_some());

        assert!(Percent::new(Decimal::NEGATIVE_ONE).is_none());
        assert!(Percent::new(Decimal::new(1001, 1)).is_none());
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Percent::from_str("6.5").unwrap().value(),
            Decimal::new(65, 1),
        );
        assert_eq!(
            Percent::from_str("7%").unwrap().value(),
            Decimal::new(7, 0),
        );

        assert!(Percent::from_str("-1").is_err());
        assert!(Percent::from_str("101").is_err());
        assert!(Percent::from_str("abc").is_err());
    }
}
