//! [`Command`] for selecting a [`Listing`].

use derive_more::From;
use tracing as log;

#[cfg(doc)]
use crate::domain::Listing;
use crate::{domain::listing, Session};

use super::Command;

/// [`Command`] for selecting a [`Listing`] the user clicked on in a list or
/// on a map, or clearing the selection with [`None`].
#[derive(Clone, Debug, Default, From)]
pub struct SelectListing(pub Option<listing::Id>);

impl<C> Command<SelectListing> for Session<C> {
    type Ok = ();

    fn execute(&mut self, SelectListing(id): SelectListing) {
        match &id {
            Some(id) => log::debug!(%id, "`Listing` selected"),
            None => log::debug!("`Listing` selection cleared"),
        }

        self.view.selected = id;
    }
}
