//! [`Command`] for toggling a [`Listing`] in [`Favorites`].

use derive_more::From;
use tracing as log;

#[cfg(doc)]
use crate::domain::Favorites;
use crate::{domain::Listing, Session};

use super::Command;

/// [`Command`] for removing a [`Listing`] from [`Favorites`] if it's there,
/// or adding it otherwise.
#[derive(Clone, Debug, From)]
pub struct ToggleFavorite(pub Listing);

impl<C> Command<ToggleFavorite> for Session<C> {
    /// Indicator whether the [`Listing`] is a favorite now.
    type Ok = bool;

    fn execute(&mut self, ToggleFavorite(listing): ToggleFavorite) -> bool {
        let id = listing.id.clone();
        let favorite = self.favorites.toggle(listing);

        log::debug!(%id, favorite, "`Listing` favorite toggled");
        favorite
    }
}
