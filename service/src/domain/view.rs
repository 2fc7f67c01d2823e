//! View state definitions.

use serde::{Deserialize, Serialize};

use crate::domain::{listing, selection::Favorites, Listing};

/// How the displayed [`Listing`]s are laid out.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    /// Grid of listing cards.
    #[default]
    List,

    /// Compact cards alongside a map with markers.
    Map,
}

/// Which collection of [`Listing`]s is displayed.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Current {
    /// Catalog [`Listing`]s narrowed by the active filter.
    #[default]
    Search,

    /// [`Favorites`], regardless of the active filter.
    Favorites,
}

/// UI state of a session.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct State {
    /// Layout [`Mode`].
    pub mode: Mode,

    /// [`Current`] view.
    pub current: Current,

    /// ID of the [`Listing`] the user clicked on, if any.
    pub selected: Option<listing::Id>,
}

/// Composes the [`Listing`]s to be displayed in the provided [`Current`]
/// view.
///
/// [`Favorites`] are returned verbatim, bypassing the filtering.
#[must_use]
pub fn displayed<'a>(
    current: Current,
    filtered: Vec<&'a Listing>,
    favorites: &'a Favorites,
) -> Vec<&'a Listing> {
    match current {
        Current::Search => filtered,
        Current::Favorites => favorites.iter().collect(),
    }
}
