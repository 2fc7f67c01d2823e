//! [`Command`] for removing a [`Listing`] from the [`Cart`].

use derive_more::From;
use tracing as log;

#[cfg(doc)]
use crate::domain::{Cart, Listing};
use crate::{domain::listing, Session};

use super::Command;

/// [`Command`] for removing a [`Listing`] from the [`Cart`] by its
/// [`listing::Id`].
///
/// Removing a [`Listing`] absent in the [`Cart`] does nothing.
#[derive(Clone, Debug, From)]
pub struct RemoveFromCart(pub listing::Id);

impl<C> Command<RemoveFromCart> for Session<C> {
    /// Indicator whether the [`Listing`] was removed.
    type Ok = bool;

    fn execute(&mut self, RemoveFromCart(id): RemoveFromCart) -> bool {
        let removed = self.cart.remove(&id);

        log::debug!(%id, removed, "`Listing` removed from `Cart`");
        removed
    }
}
