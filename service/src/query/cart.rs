//! [`Query`] collection related to the [`Cart`].

use crate::{
    domain::{listing, Cart},
    Session,
};
#[cfg(doc)]
use crate::domain::Listing;

use super::Query;

/// Queries the [`Cart`] contents.
///
/// Its total financing exposure is provided by [`Cart::total_price()`].
#[derive(Clone, Copy, Debug)]
pub struct Contents;

impl<C> Query<Contents> for Session<C> {
    type Ok<'s> = &'s Cart where Self: 's;

    fn read(&self, _: Contents) -> &Cart {
        &self.cart
    }
}

/// Queries whether the [`Cart`] contains a [`Listing`] with the provided
/// [`listing::Id`].
#[derive(Clone, Debug)]
pub struct Contains(pub listing::Id);

impl<C> Query<Contains> for Session<C> {
    type Ok<'s> = bool where Self: 's;

    fn read(&self, Contains(id): Contains) -> bool {
        self.cart.contains(&id)
    }
}
