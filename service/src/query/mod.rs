//! [`Query`] definition.

pub mod cart;
pub mod favorites;
pub mod filters;
pub mod listings;
pub mod view;

/// [`Query`] observing a [`Session`].
///
/// [`Session`]: crate::Session
pub use common::Reader as Query;
