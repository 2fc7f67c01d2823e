//! [`Summary`] definitions.

use common::Money;
use derive_more::Display;
use itertools::Itertools as _;
use service::{
    domain::{listing, view},
    infra::Catalog,
    query, Query as _, Session,
};

/// Outcome of a replayed [`Session`].
#[derive(Clone, Debug, Display, PartialEq)]
#[display(
    "displayed [{}], cart total {cart_total}, {favorites} favorites",
    displayed.iter().format(", ")
)]
pub struct Summary {
    /// Current view of the [`Session`].
    pub view: view::State,

    /// Monthly expenses of the selected listing, if any.
    pub selected_expenses: Option<Money>,

    /// Displayed listings, in display order.
    pub displayed: Vec<Entry>,

    /// Sum of the cart listing prices.
    pub cart_total: Money,

    /// Number of favorite listings.
    pub favorites: usize,
}

impl Summary {
    /// Summarizes the current state of the provided [`Session`].
    #[must_use]
    pub fn of<C: Catalog>(session: &Session<C>) -> Self {
        let view = session.read(query::view::State).clone();
        let included = session.read(query::filters::IncludedExpenses);

        Self {
            selected_expenses: view.selected.clone().and_then(|id| {
                session.read(query::listings::MonthlyExpenses(id))
            }),
            view,
            displayed: session
                .read(query::listings::Displayed)
                .into_iter()
                .map(|l| Entry {
                    id: l.id.clone(),
                    monthly_expenses: l.expenses.included(included),
                })
                .collect(),
            cart_total: session.read(query::cart::Contents).total_price(),
            favorites: session.read(query::favorites::Count),
        }
    }
}

/// Displayed listing in a [`Summary`].
#[derive(Clone, Debug, Display, PartialEq)]
#[display("{id} ({monthly_expenses}/month)")]
pub struct Entry {
    /// ID of the listing.
    pub id: listing::Id,

    /// Monthly expenses of the listing, counting only the included
    /// categories.
    pub monthly_expenses: Money,
}

#[cfg(test)]
mod spec {
    use common::Money;
    use service::{
        command::{SelectListing, UpdateFilters},
        domain::{filter::Patch, view},
        infra::InMemory,
        Command as _, Session,
    };

    use super::{Entry, Summary};

    const CATALOG: &str = r#"[{
        "id": "1",
        "title": "Two-room flat",
        "location": {"city": "Paris"},
        "price": 180000,
        "area": 34,
        "rooms": 2,
        "type": "apartment",
        "metrics": {"cashflow": 35, "grossYield": 5.6},
        "expenses": {"monthlyCharges": 110, "propertyTax": 60, "insurance": 15}
    }]"#;

    #[test]
    fn displays() {
        let summary = Summary {
            view: view::State::default(),
            selected_expenses: None,
            displayed: vec![
                Entry {
                    id: "3".into(),
                    monthly_expenses: Money::from(120),
                },
                Entry {
                    id: "1".into(),
                    monthly_expenses: Money::ZERO,
                },
            ],
            cart_total: Money::from(420_000),
            favorites: 2,
        };

        assert_eq!(
            summary.to_string(),
            "displayed [3 (120EUR/month), 1 (0EUR/month)], \
             cart total 420000EUR, 2 favorites",
        );
    }

    #[test]
    fn reports_included_expenses_only() {
        let mut session = Session::new(
            InMemory::from_reader(CATALOG.as_bytes()).unwrap(),
        );
        assert_eq!(
            Summary::of(&session).displayed[0].monthly_expenses,
            Money::from(185),
        );

        session.execute(UpdateFilters(
            serde_json::from_str::<Patch>(
                r#"{"includedExpenses": ["propertyTax"]}"#,
            )
            .unwrap(),
        ));

        let summary = Summary::of(&session);
        assert_eq!(summary.displayed[0].monthly_expenses, Money::from(60));
        assert_eq!(summary.selected_expenses, None);

        session.execute(SelectListing(Some("1".into())));
        assert_eq!(
            Summary::of(&session).selected_expenses,
            Some(Money::from(60)),
        );
    }
}
