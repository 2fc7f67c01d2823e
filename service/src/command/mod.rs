//! [`Command`] definition.

pub mod add_to_cart;
pub mod highlight_listings;
pub mod remove_from_cart;
pub mod select_listing;
pub mod switch_view;
pub mod switch_view_mode;
pub mod toggle_favorite;
pub mod update_filters;

/// [`Command`] mutating a [`Session`].
///
/// [`Session`]: crate::Session
pub use common::Handler as Command;

pub use self::{
    add_to_cart::AddToCart, highlight_listings::HighlightListings,
    remove_from_cart::RemoveFromCart, select_listing::SelectListing,
    switch_view::SwitchView, switch_view_mode::SwitchViewMode,
    toggle_favorite::ToggleFavorite, update_filters::UpdateFilters,
};
