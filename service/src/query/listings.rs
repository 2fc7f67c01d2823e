//! [`Query`] collection related to multiple [`Listing`]s.

use common::Money;

#[cfg(doc)]
use crate::domain::{Favorites, Filter};
use crate::{
    domain::{listing, view, Listing, Selection},
    infra::Catalog,
    Session,
};

use super::{filters, Query};

/// Queries the [`Catalog`] [`Listing`]s matching the active [`Filter`], in
/// their [`Catalog`] order.
///
/// Recomputed on every read.
#[derive(Clone, Copy, Debug)]
pub struct Filtered;

impl<C: Catalog> Query<Filtered> for Session<C> {
    type Ok<'s> = Vec<&'s Listing> where Self: 's;

    fn read(&self, _: Filtered) -> Vec<&Listing> {
        self.catalog
            .listings()
            .iter()
            .filter(|l| self.filter.matches(l))
            .collect()
    }
}

/// Queries the [`Listing`]s to be displayed in the current
/// [`view::Current`] view.
///
/// [`Favorites`] are displayed as is, bypassing the active [`Filter`].
#[derive(Clone, Copy, Debug)]
pub struct Displayed;

impl<C: Catalog> Query<Displayed> for Session<C> {
    type Ok<'s> = Vec<&'s Listing> where Self: 's;

    fn read(&self, _: Displayed) -> Vec<&Listing> {
        let filtered = match self.view.current {
            view::Current::Search => self.read(Filtered),
            view::Current::Favorites => Vec::new(),
        };
        view::displayed(self.view.current, filtered, &self.favorites)
    }
}

/// Queries the selected [`Listing`], if any.
///
/// The [`Catalog`] is looked up first, then the [`Favorites`] and the
/// [`Cart`], which may still hold a [`Listing`] gone from the [`Catalog`].
///
/// [`Cart`]: crate::domain::Cart
#[derive(Clone, Copy, Debug)]
pub struct Selected;

impl<C: Catalog> Query<Selected> for Session<C> {
    type Ok<'s> = Option<&'s Listing> where Self: 's;

    fn read(&self, _: Selected) -> Option<&Listing> {
        self.find(self.view.selected.as_ref()?)
    }
}

/// Queries the monthly expenses of a [`Listing`] with the provided
/// [`listing::Id`], counting only the expense categories included by the
/// active [`Filter`].
///
/// The [`Listing`] is looked up the same way as the [`Selected`] one.
#[derive(Clone, Debug)]
pub struct MonthlyExpenses(pub listing::Id);

impl<C: Catalog> Query<MonthlyExpenses> for Session<C> {
    type Ok<'s> = Option<Money> where Self: 's;

    fn read(&self, MonthlyExpenses(id): MonthlyExpenses) -> Option<Money> {
        let included = self.read(filters::IncludedExpenses);
        self.find(&id).map(|l| l.expenses.included(included))
    }
}

impl<C: Catalog> Session<C> {
    /// Looks up a [`Listing`] in the [`Catalog`], then in the [`Favorites`]
    /// and the [`Cart`].
    ///
    /// [`Cart`]: crate::domain::Cart
    fn find(&self, id: &listing::Id) -> Option<&Listing> {
        self.catalog
            .get(id)
            .or_else(|| self.favorites.get(id))
            .or_else(|| self.cart.get(id))
    }
}

/// Queries the [`Listing`]s highlighted by the assistant.
#[derive(Clone, Copy, Debug)]
pub struct Highlighted;

impl<C> Query<Highlighted> for Session<C> {
    type Ok<'s> = &'s Selection where Self: 's;

    fn read(&self, _: Highlighted) -> &Selection {
        &self.highlighted
    }
}
