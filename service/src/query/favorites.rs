//! [`Query`] collection related to [`Favorites`].

use crate::{
    domain::{listing, Favorites},
    Session,
};
#[cfg(doc)]
use crate::domain::Listing;

use super::Query;

/// Queries the [`Favorites`] contents.
#[derive(Clone, Copy, Debug)]
pub struct Contents;

impl<C> Query<Contents> for Session<C> {
    type Ok<'s> = &'s Favorites where Self: 's;

    fn read(&self, _: Contents) -> &Favorites {
        &self.favorites
    }
}

/// Queries the number of [`Favorites`].
#[derive(Clone, Copy, Debug)]
pub struct Count;

impl<C> Query<Count> for Session<C> {
    type Ok<'s> = usize where Self: 's;

    fn read(&self, _: Count) -> usize {
        self.favorites.len()
    }
}

/// Queries whether [`Favorites`] contain a [`Listing`] with the provided
/// [`listing::Id`].
#[derive(Clone, Debug)]
pub struct Contains(pub listing::Id);

impl<C> Query<Contains> for Session<C> {
    type Ok<'s> = bool where Self: 's;

    fn read(&self, Contains(id): Contains) -> bool {
        self.favorites.contains(&id)
    }
}
