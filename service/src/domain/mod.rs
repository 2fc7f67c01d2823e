//! Domain definitions.

pub mod filter;
pub mod listing;
pub mod selection;
pub mod view;

pub use self::{
    filter::Filter,
    listing::Listing,
    selection::{Cart, Favorites, Selection},
};
