//! [`Filter`] definitions.

use std::collections::BTreeSet;

use common::{define_kind, Money, Percent};
use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use strum::EnumString;

use crate::domain::{
    listing::{self, Area, Rooms},
    Listing,
};

/// Tolerance applied above the financing budget when checking whether a
/// [`Listing`] is affordable (`110%`).
pub const AFFORDABILITY_TOLERANCE: Decimal =
    Decimal::from_parts(11, 0, 0, false, 1);

/// Search constraints narrowing the catalog of [`Listing`]s.
///
/// Every constraint is independently optional: zero amounts and empty
/// collections mean "unset". This makes a bound of exactly zero
/// inexpressible.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, SmartDefault)]
#[serde(default, rename_all = "camelCase")]
pub struct Filter {
    /// Part of a [`listing::City`] to search for, case-insensitively.
    pub city: String,

    /// Lowest acceptable price.
    pub min_price: Money,

    /// Highest acceptable price.
    pub max_price: Money,

    /// Lowest acceptable [`Area`].
    pub min_area: Area,

    /// Highest acceptable [`Area`].
    pub max_area: Area,

    /// Lowest acceptable monthly cashflow.
    pub min_cashflow: Money,

    /// Highest acceptable monthly cashflow.
    pub max_cashflow: Money,

    /// Accepted [`listing::Kind`]s.
    #[serde(rename = "propertyType")]
    pub property_types: BTreeSet<listing::Kind>,

    /// Lowest gross yield the user is interested in.
    ///
    /// Not evaluated by [`Filter::matches()`].
    pub min_gross_yield: Percent,

    /// Highest gross yield the user is interested in.
    ///
    /// Not evaluated by [`Filter::matches()`].
    pub max_gross_yield: Percent,

    /// Lowest acceptable number of rooms.
    pub min_rooms: Rooms,

    /// Amount the user is able to borrow.
    pub loan_amount: Money,

    /// Amount the user is able to put down.
    pub down_payment: Money,

    /// [`ExpenseCategory`]s to be reflected in displayed costs.
    #[default(ExpenseCategory::ALL.iter().copied().collect())]
    pub included_expenses: BTreeSet<ExpenseCategory>,

    /// Worst [`Score`] the user is interested in.
    ///
    /// Not evaluated by [`Filter::matches()`].
    pub min_score: Score,
}

impl Filter {
    /// Checks whether the provided [`Listing`] satisfies all the constraints
    /// of this [`Filter`].
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        let Listing {
            location,
            price,
            area,
            rooms,
            kind,
            metrics,
            ..
        } = listing;

        (self.city.is_empty() || location.city.contains_ignore_case(&self.city))
            && within(*price, self.min_price, self.max_price, Money::is_positive)
            && within(*area, self.min_area, self.max_area, |a| {
                *a > Decimal::ZERO
            })
            && (self.min_rooms == 0 || *rooms >= self.min_rooms)
            && within(
                metrics.cashflow,
                self.min_cashflow,
                self.max_cashflow,
                Money::is_positive,
            )
            && (self.property_types.is_empty()
                || self.property_types.contains(kind))
            && self.affordability_ceiling().map_or(true, |max| *price <= max)
    }

    /// Returns the financing budget: the loan amount plus the down payment.
    #[must_use]
    pub fn budget(&self) -> Money {
        self.loan_amount + self.down_payment
    }

    /// Returns the highest price still considered affordable, if any
    /// financing information is provided.
    #[must_use]
    pub fn affordability_ceiling(&self) -> Option<Money> {
        let budget = self.budget();
        budget
            .is_positive()
            .then(|| budget * AFFORDABILITY_TOLERANCE)
    }

    /// Returns [`IncludedExpenses`] of this [`Filter`].
    #[must_use]
    pub fn included_expenses(&self) -> IncludedExpenses {
        self.included_expenses.iter().copied().collect()
    }

    /// Merges the provided [`Patch`] into this [`Filter`], returning a new
    /// [`Filter`].
    ///
    /// Fields present in the [`Patch`] overwrite the ones of this [`Filter`],
    /// while the absent ones are retained.
    #[must_use]
    pub fn merge(&self, patch: Patch) -> Self {
        let Patch {
            city,
            min_price,
            max_price,
            min_area,
            max_area,
            min_cashflow,
            max_cashflow,
            property_types,
            min_gross_yield,
            max_gross_yield,
            min_rooms,
            loan_amount,
            down_payment,
            included_expenses,
            min_score,
        } = patch;

        Self {
            city: city.unwrap_or_else(|| self.city.clone()),
            min_price: min_price.unwrap_or(self.min_price),
            max_price: max_price.unwrap_or(self.max_price),
            min_area: min_area.unwrap_or(self.min_area),
            max_area: max_area.unwrap_or(self.max_area),
            min_cashflow: min_cashflow.unwrap_or(self.min_cashflow),
            max_cashflow: max_cashflow.unwrap_or(self.max_cashflow),
            property_types: property_types
                .unwrap_or_else(|| self.property_types.clone()),
            min_gross_yield: min_gross_yield.unwrap_or(self.min_gross_yield),
            max_gross_yield: max_gross_yield.unwrap_or(self.max_gross_yield),
            min_rooms: min_rooms.unwrap_or(self.min_rooms),
            loan_amount: loan_amount.unwrap_or(self.loan_amount),
            down_payment: down_payment.unwrap_or(self.down_payment),
            included_expenses: included_expenses
                .unwrap_or_else(|| self.included_expenses.clone()),
            min_score: min_score.unwrap_or(self.min_score),
        }
    }
}

/// Checks whether the `value` lies between the `min` and `max` bounds,
/// ignoring the bounds not passing the `is_set` check.
fn within<T: PartialOrd>(
    value: T,
    min: T,
    max: T,
    is_set: impl Fn(&T) -> bool,
) -> bool {
    (!is_set(&min) || value >= min) && (!is_set(&max) || value <= max)
}

/// Partial update of a [`Filter`].
///
/// [`None`] fields are left untouched by [`Filter::merge()`].
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Patch {
    /// New [`Filter::city`].
    pub city: Option<String>,

    /// New [`Filter::min_price`].
    pub min_price: Option<Money>,

    /// New [`Filter::max_price`].
    pub max_price: Option<Money>,

    /// New [`Filter::min_area`].
    pub min_area: Option<Area>,

    /// New [`Filter::max_area`].
    pub max_area: Option<Area>,

    /// New [`Filter::min_cashflow`].
    pub min_cashflow: Option<Money>,

    /// New [`Filter::max_cashflow`].
    pub max_cashflow: Option<Money>,

    /// New [`Filter::property_types`].
    #[serde(rename = "propertyType")]
    pub property_types: Option<BTreeSet<listing::Kind>>,

    /// New [`Filter::min_gross_yield`].
    pub min_gross_yield: Option<Percent>,

    /// New [`Filter::max_gross_yield`].
    pub max_gross_yield: Option<Percent>,

    /// New [`Filter::min_rooms`].
    pub min_rooms: Option<Rooms>,

    /// New [`Filter::loan_amount`].
    pub loan_amount: Option<Money>,

    /// New [`Filter::down_payment`].
    pub down_payment: Option<Money>,

    /// New [`Filter::included_expenses`].
    pub included_expenses: Option<BTreeSet<ExpenseCategory>>,

    /// New [`Filter::min_score`].
    pub min_score: Option<Score>,
}

define_kind! {
    #[doc = "Category of a [`Listing`] expense."]
    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    enum ExpenseCategory {
        #[doc = "Monthly co-ownership charges."]
        MonthlyCharges,

        #[doc = "Property tax."]
        PropertyTax,

        #[doc = "Insurance."]
        Insurance,
    }
}

/// Record of which [`ExpenseCategory`]s are included into displayed costs.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct IncludedExpenses {
    /// Whether [`ExpenseCategory::MonthlyCharges`] are included.
    pub monthly_charges: bool,

    /// Whether [`ExpenseCategory::PropertyTax`] is included.
    pub property_tax: bool,

    /// Whether [`ExpenseCategory::Insurance`] is included.
    pub insurance: bool,
}

impl IncludedExpenses {
    /// [`IncludedExpenses`] including every [`ExpenseCategory`].
    pub const ALL: Self = Self {
        monthly_charges: true,
        property_tax: true,
        insurance: true,
    };

    /// [`IncludedExpenses`] including nothing.
    pub const NONE: Self = Self {
        monthly_charges: false,
        property_tax: false,
        insurance: false,
    };
}

impl FromIterator<ExpenseCategory> for IncludedExpenses {
    fn from_iter<I: IntoIterator<Item = ExpenseCategory>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, |mut acc, category| {
            match category {
                ExpenseCategory::MonthlyCharges => acc.monthly_charges = true,
                ExpenseCategory::PropertyTax => acc.property_tax = true,
                ExpenseCategory::Insurance => acc.insurance = true,
            }
            acc
        })
    }
}

/// Letter grade of an investment, `A` being the best.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    EnumString,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub enum Score {
    /// Excellent investment.
    A,

    /// Good investment.
    B,

    /// Average investment.
    C,

    /// Poor investment.
    #[default]
    D,
}
