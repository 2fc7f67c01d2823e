//! Service contains the listing selection and filtering logic of a browsing
//! session.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;

use crate::domain::{view, Cart, Favorites, Filter, Selection};
#[cfg(doc)]
use crate::{domain::Listing, infra::Catalog};

pub use self::{command::Command, query::Query};

/// Browsing session of a single user over a [`Catalog`].
///
/// Owns the session state, which is mutated by [`Command`]s only and
/// observed through [`Query`]s.
#[derive(Clone, Debug)]
pub struct Session<C> {
    /// [`Catalog`] of [`Listing`]s being browsed.
    catalog: C,

    /// Active [`Filter`].
    filter: Filter,

    /// [`Cart`] of compared [`Listing`]s.
    cart: Cart,

    /// [`Favorites`] [`Listing`]s.
    favorites: Favorites,

    /// [`Listing`]s highlighted by the assistant.
    highlighted: Selection,

    /// UI [`view::State`].
    view: view::State,
}

impl<C> Session<C> {
    /// Starts a new [`Session`] over the provided [`Catalog`] with the
    /// default [`Filter`] and empty selections.
    #[must_use]
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            filter: Filter::default(),
            cart: Cart::default(),
            favorites: Favorites::default(),
            highlighted: Selection::default(),
            view: view::State::default(),
        }
    }

    /// Returns [`Catalog`] of this [`Session`].
    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }
}
