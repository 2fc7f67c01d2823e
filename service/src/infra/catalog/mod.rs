//! [`Catalog`]-related implementations.

mod in_memory;

#[cfg(feature = "json")]
use std::io;

use derive_more::{Display, Error as StdError, From};

use crate::domain::{listing, Listing};

pub use self::in_memory::InMemory;

/// Read-only ordered collection of [`Listing`]s provided by a data source.
///
/// [`listing::Id`]s are unique within a [`Catalog`].
pub trait Catalog {
    /// Returns all the [`Listing`]s of this [`Catalog`] in their original
    /// order.
    fn listings(&self) -> &[Listing];

    /// Returns a [`Listing`] with the provided [`listing::Id`], if any.
    fn get(&self, id: &listing::Id) -> Option<&Listing> {
        self.listings().iter().find(|l| l.id == *id)
    }
}

/// [`Catalog`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Failed to read a [`Catalog`] source.
    #[cfg(feature = "json")]
    #[display("failed to read `Catalog`: {_0}")]
    Io(io::Error),

    /// Failed to parse a [`Catalog`] source.
    #[cfg(feature = "json")]
    #[display("failed to parse `Catalog`: {_0}")]
    Json(serde_json::Error),

    /// Several [`Listing`]s share the same [`listing::Id`].
    #[display("`Listing(id: {_0})` is not unique in `Catalog`")]
    #[from(ignore)]
    DuplicateId(#[error(not(source))] listing::Id),
}
