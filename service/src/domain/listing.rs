//! [`Listing`] definitions.

use common::{define_kind, Money, Percent};
use derive_more::{AsRef, Display, From, Into};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::filter::IncludedExpenses;

/// Real-estate investment opportunity.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// ID of this [`Listing`].
    pub id: Id,

    /// [`Title`] of this [`Listing`].
    pub title: Title,

    /// [`Location`] of this [`Listing`].
    pub location: Location,

    /// Asking price of this [`Listing`].
    pub price: Money,

    /// [`Area`] of this [`Listing`].
    pub area: Area,

    /// Number of rooms in this [`Listing`].
    pub rooms: Rooms,

    /// [`Kind`] of this [`Listing`].
    #[serde(rename = "type")]
    pub kind: Kind,

    /// Investment [`Metrics`] of this [`Listing`].
    pub metrics: Metrics,

    /// Monthly [`Expenses`] of this [`Listing`].
    #[serde(default)]
    pub expenses: Expenses,
}

/// ID of a [`Listing`].
///
/// Opaque and stable for the whole [`Listing`] lifetime.
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[as_ref(forward)]
#[from(&str, String)]
#[serde(transparent)]
pub struct Id(String);

/// Title of a [`Listing`].
#[derive(AsRef, Clone, Debug, Default, Display, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    /// Creates a new [`Title`].
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }
}

/// Location of a [`Listing`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// [`City`] the [`Listing`] is located in.
    pub city: City,

    /// [`Coordinates`] of the [`Listing`] on a map, if known.
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

/// City of a [`Listing`], as free text.
#[derive(
    AsRef,
    Clone,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[as_ref(forward)]
#[from(&str, String)]
#[serde(transparent)]
pub struct City(String);

impl City {
    /// Creates a new [`City`].
    #[must_use]
    pub fn new(city: impl Into<String>) -> Self {
        Self(city.into())
    }

    /// Checks whether this [`City`] contains the provided `query`
    /// case-insensitively.
    #[must_use]
    pub fn contains_ignore_case(&self, query: &str) -> bool {
        self.0.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Geographic coordinates of a [`Listing`].
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub lat: f64,

    /// Longitude in degrees.
    pub lng: f64,
}

/// Living area of a [`Listing`] in square meters.
pub type Area = Decimal;

/// Number of rooms in a [`Listing`].
pub type Rooms = u16;

define_kind! {
    #[doc = "Kind of a [`Listing`]."]
    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    enum Kind {
        #[doc = "An apartment in a building."]
        Apartment,

        #[doc = "A detached or semi-detached house."]
        House,

        #[doc = "A whole building of several units."]
        Building,

        #[doc = "Commercial premises."]
        Commercial,

        #[doc = "A parking lot or a garage."]
        Parking,
    }
}

/// Investment metrics of a [`Listing`].
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Monthly cashflow after financing costs, possibly negative.
    pub cashflow: Money,

    /// Gross rental yield.
    pub gross_yield: Percent,
}

/// Monthly expenses of a [`Listing`].
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Expenses {
    /// Monthly co-ownership charges.
    pub monthly_charges: Money,

    /// Property tax, spread monthly.
    pub property_tax: Money,

    /// Insurance, spread monthly.
    pub insurance: Money,
}

impl Expenses {
    /// Sums up the expenses marked as included in the provided
    /// [`IncludedExpenses`].
    #[must_use]
    pub fn included(&self, included: IncludedExpenses) -> Money {
        let IncludedExpenses {
            monthly_charges,
            property_tax,
            insurance,
        } = included;

        [
            (monthly_charges, self.monthly_charges),
            (property_tax, self.property_tax),
            (insurance, self.insurance),
        ]
        .into_iter()
        .filter_map(|(included, amount)| included.then_some(amount))
        .sum()
    }
}


#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::Money;

    use super::{mock, City, Expenses, Id, Kind, Listing};
    use crate::domain::filter::IncludedExpenses;

    #[test]
    fn city_contains_ignoring_case() {
        let city = City::new("Saint-Étienne");

        assert!(city.contains_ignore_case("étienne"));
        assert!(city.contains_ignore_case("SAINT"));
        assert!(city.contains_ignore_case("nt-é"));
        assert!(city.contains_ignore_case(""));
        assert!(!city.contains_ignore_case("Lyon"));
    }

    #[test]
    fn city_is_free_text() {
        let padded = City::from(" Lyon 3e ");
        assert!(padded.contains_ignore_case("lyon"));
        assert_eq!(String::from(padded), " Lyon 3e ");

        assert!(City::default().contains_ignore_case(""));
        assert!(!City::default().contains_ignore_case("Lyon"));
    }

    #[test]
    fn kind_is_camel_cased() {
        assert_eq!(Kind::Apartment.to_string(), "apartment");
        assert_eq!(Kind::from_str("house").unwrap(), Kind::House);
        assert!(Kind::from_str("castle").is_err());
    }

    #[test]
    fn deserializes_from_json() {
        let listing: Listing = serde_json::from_str(
            r#"{
                "id": "1",
                "title": "Studio near the station",
                "location": {
                    "city": "Paris",
                    "coordinates": { "lat": 48.85, "lng": 2.35 }
                },
                "price": 200000,
                "area": 40,
                "rooms": 2,
                "type": "apartment",
                "metrics": { "cashflow": -50, "grossYield": 5.5 },
                "expenses": { "monthlyCharges": 120, "propertyTax": 80 }
            }"#,
        )
        .unwrap();

        assert_eq!(listing.id, Id::from("1"));
        assert_eq!(listing.kind, Kind::Apartment);
        assert_eq!(listing.price, Money::from(200_000));
        assert_eq!(listing.metrics.cashflow, Money::from(-50));
        assert_eq!(listing.expenses.insurance, Money::ZERO);
        assert!(listing.location.coordinates.is_some());
    }

    #[test]
    fn accepts_any_city_and_id() {
        let mut json = serde_json::to_value(mock::listing("1")).unwrap();
        json["id"] = "".into();
        json["location"]["city"] = "  ".into();

        let listing = serde_json::from_value::<Listing>(json).unwrap();

        assert_eq!(listing.id, Id::from(""));
        assert_eq!(listing.location.city, City::from("  "));
    }

    #[test]
    fn rejects_unknown_kind_and_out_of_range_yield() {
        let mut json = serde_json::to_value(mock::listing("1")).unwrap();
        json["type"] = "castle".into();
        assert!(serde_json::from_value::<Listing>(json.clone()).is_err());

        json["type"] = "house".into();
        json["metrics"]["grossYield"] = (-1).into();
        assert!(serde_json::from_value::<Listing>(json.clone()).is_err());

        json["metrics"]["grossYield"] = 101.into();
        assert!(serde_json::from_value::<Listing>(json.clone()).is_err());

        json["metrics"]["grossYield"] = 0.into();
        assert!(serde_json::from_value::<Listing>(json).is_ok());
    }

    #[test]
    fn included_expenses_saturate() {
        let expenses = Expenses {
            monthly_charges: Money::MAX,
            property_tax: Money::MAX,
            insurance: Money::from(1),
        };

        assert_eq!(expenses.included(IncludedExpenses::ALL), Money::MAX);
    }

    #[test]
    fn sums_only_included_expenses() {
        let expenses = Expenses {
            monthly_charges: Money::from(120),
            property_tax: Money::from(80),
            insurance: Money::from(15),
        };

        assert_eq!(
            expenses.included(IncludedExpenses {
                monthly_charges: true,
                property_tax: false,
                insurance: true,
            }),
            Money::from(135),
        );
        assert_eq!(expenses.included(IncludedExpenses::NONE), Money::ZERO);
        assert_eq!(expenses.included(IncludedExpenses::ALL), Money::from(215));
    }
}
