//! [`Selection`] definitions.

use common::Money;
use derive_more::{Deref, IntoIterator};

use crate::domain::{listing, Listing};

/// Insertion-ordered collection of [`Listing`]s unique by their
/// [`listing::Id`].
///
/// Keeps copies of the [`Listing`]s captured when they were added, so its
/// entries outlive their removal from the catalog.
#[derive(Clone, Debug, Default, Deref, IntoIterator, PartialEq)]
#[into_iterator(owned, ref)]
pub struct Selection(Vec<Listing>);

impl Selection {
    /// Adds the provided [`Listing`] to the end of this [`Selection`], unless
    /// a [`Listing`] with the same [`listing::Id`] is already there.
    ///
    /// Returns `false` if nothing was added.
    pub fn add(&mut self, listing: Listing) -> bool {
        if self.contains(&listing.id) {
            return false;
        }
        self.0.push(listing);
        true
    }

    /// Removes a [`Listing`] with the provided [`listing::Id`] from this
    /// [`Selection`], if any.
    ///
    /// Returns `false` if nothing was removed.
    pub fn remove(&mut self, id: &listing::Id) -> bool {
        let before = self.0.len();
        self.0.retain(|l| l.id != *id);
        self.0.len() != before
    }

    /// Checks whether this [`Selection`] contains a [`Listing`] with the
    /// provided [`listing::Id`].
    #[must_use]
    pub fn contains(&self, id: &listing::Id) -> bool {
        self.0.iter().any(|l| l.id == *id)
    }

    /// Returns a [`Listing`] with the provided [`listing::Id`], if any.
    #[must_use]
    pub fn get(&self, id: &listing::Id) -> Option<&Listing> {
        self.0.iter().find(|l| l.id == *id)
    }
}

impl FromIterator<Listing> for Selection {
    fn from_iter<I: IntoIterator<Item = Listing>>(iter: I) -> Self {
        let mut selection = Self::default();
        for listing in iter {
            _ = selection.add(listing);
        }
        selection
    }
}

/// [`Selection`] of [`Listing`]s the user compares as investments.
#[derive(Clone, Debug, Default, Deref, PartialEq)]
pub struct Cart(Selection);

impl Cart {
    /// Adds the provided [`Listing`] to this [`Cart`].
    ///
    /// See [`Selection::add()`] for details.
    pub fn add(&mut self, listing: Listing) -> bool {
        self.0.add(listing)
    }

    /// Removes a [`Listing`] from this [`Cart`].
    ///
    /// See [`Selection::remove()`] for details.
    pub fn remove(&mut self, id: &listing::Id) -> bool {
        self.0.remove(id)
    }

    /// Returns the total financing exposure of this [`Cart`]: the sum of its
    /// [`Listing`] prices.
    #[must_use]
    pub fn total_price(&self) -> Money {
        self.0.iter().map(|l| l.price).sum()
    }
}

/// [`Selection`] of [`Listing`]s the user marked as favorite.
#[derive(Clone, Debug, Default, Deref, PartialEq)]
pub struct Favorites(Selection);

impl Favorites {
    /// Adds the provided [`Listing`] to these [`Favorites`].
    ///
    /// See [`Selection::add()`] for details.
    pub fn add(&mut self, listing: Listing) -> bool {
        self.0.add(listing)
    }

    /// Removes a [`Listing`] from these [`Favorites`].
    ///
    /// See [`Selection::remove()`] for details.
    pub fn remove(&mut self, id: &listing::Id) -> bool {
        self.0.remove(id)
    }

    /// Removes the provided [`Listing`] from these [`Favorites`] if it's
    /// there, or adds it otherwise.
    ///
    /// Returns whether the [`Listing`] is a favorite now.
    pub fn toggle(&mut self, listing: Listing) -> bool {
        if self.0.remove(&listing.id) {
            return false;
        }
        self.0.add(listing)
    }
}
