//! [`Event`] definitions.

use serde::Deserialize;
use service::{
    command::{
        AddToCart, HighlightListings, RemoveFromCart, SelectListing,
        SwitchView, SwitchViewMode, ToggleFavorite, UpdateFilters,
    },
    domain::{filter, listing, view, Listing},
    infra::Catalog,
    query, Command as _, Query as _, Session,
};
use tracing as log;

/// User interaction recorded in a browsing session.
///
/// [`Listing`]s are referenced by their [`listing::Id`]s and resolved on
/// replay.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Event {
    /// Filter form or assistant changed the filters.
    UpdateFilters {
        /// Changed filter fields.
        filters: filter::Patch,
    },

    /// [`Listing`] was added to the cart.
    AddToCart {
        /// ID of the added [`Listing`].
        id: listing::Id,
    },

    /// [`Listing`] was removed from the cart.
    RemoveFromCart {
        /// ID of the removed [`Listing`].
        id: listing::Id,
    },

    /// Heart icon of a [`Listing`] was clicked.
    ToggleFavorite {
        /// ID of the toggled [`Listing`].
        id: listing::Id,
    },

    /// Search or favorites tab was opened.
    SwitchView {
        /// Opened view.
        view: view::Current,
    },

    /// List or map layout was chosen.
    SwitchViewMode {
        /// Chosen layout.
        mode: view::Mode,
    },

    /// [`Listing`] was clicked, or the selection was cleared.
    SelectListing {
        /// ID of the clicked [`Listing`], if any.
        #[serde(default)]
        id: Option<listing::Id>,
    },

    /// Assistant pointed at some [`Listing`]s.
    HighlightListings {
        /// IDs of the highlighted [`Listing`]s.
        ids: Vec<listing::Id>,
    },
}

impl Event {
    /// Applies this [`Event`] to the provided [`Session`].
    ///
    /// [`listing::Id`]s are resolved against the [`Catalog`] first, then
    /// the favorites and the cart. Unresolved ones are logged and skipped.
    pub fn apply<C: Catalog>(self, session: &mut Session<C>) {
        match self {
            Self::UpdateFilters { filters } => {
                session.execute(UpdateFilters(filters));
            }
            Self::AddToCart { id } => {
                if let Some(listing) = resolve(session, &id) {
                    _ = session.execute(AddToCart(listing));
                }
            }
            Self::RemoveFromCart { id } => {
                _ = session.execute(RemoveFromCart(id));
            }
            Self::ToggleFavorite { id } => {
                if let Some(listing) = resolve(session, &id) {
                    _ = session.execute(ToggleFavorite(listing));
                }
            }
            Self::SwitchView { view } => session.execute(SwitchView(view)),
            Self::SwitchViewMode { mode } => {
                session.execute(SwitchViewMode(mode));
            }
            Self::SelectListing { id } => session.execute(SelectListing(id)),
            Self::HighlightListings { ids } => {
                let listings = ids
                    .iter()
                    .filter_map(|id| resolve(session, id))
                    .collect();
                session.execute(HighlightListings(listings));
            }
        }
    }
}

/// Looks up a [`Listing`] with the provided [`listing::Id`] known to the
/// [`Session`].
fn resolve<C: Catalog>(
    session: &Session<C>,
    id: &listing::Id,
) -> Option<Listing> {
    let listing = session
        .catalog()
        .get(id)
        .or_else(|| session.read(query::favorites::Contents).get(id))
        .or_else(|| session.read(query::cart::Contents).get(id))
        .cloned();
    if listing.is_none() {
        log::warn!(%id, "unknown `Listing` skipped");
    }
    listing
}
