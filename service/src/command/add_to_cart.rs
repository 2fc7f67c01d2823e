//! [`Command`] for adding a [`Listing`] to the [`Cart`].

use derive_more::From;
use tracing as log;

#[cfg(doc)]
use crate::domain::Cart;
use crate::{domain::Listing, Session};

use super::Command;

/// [`Command`] for adding a [`Listing`] to the [`Cart`].
///
/// Adding a [`Listing`] already in the [`Cart`] does nothing.
#[derive(Clone, Debug, From)]
pub struct AddToCart(pub Listing);

impl<C> Command<AddToCart> for Session<C> {
    /// Indicator whether the [`Listing`] was added.
    type Ok = bool;

    fn execute(&mut self, AddToCart(listing): AddToCart) -> bool {
        let id = listing.id.clone();
        let added = self.cart.add(listing);

        log::debug!(%id, added, "`Listing` added to `Cart`");
        added
    }
}

#[cfg(test)]
mod spec {
    use super::AddToCart;
    use crate::{
        domain::listing::mock, infra::InMemory, query, Command as _,
        Query as _, Session,
    };

    #[test]
    fn adds_once() {
        let mut session = Session::new(InMemory::default());

        assert!(session.execute(AddToCart(mock::listing("1"))));
        assert!(!session.execute(AddToCart(mock::listing("1"))));

        let cart = session.read(query::cart::Contents);
        assert_eq!(cart.len(), 1);
        assert!(session.read(query::cart::Contains("1".into())));
    }
}
