//! [`InMemory`] [`Catalog`] implementation.

use std::collections::HashMap;
#[cfg(feature = "json")]
use std::{fs, io, path::Path};

use tracerr::Traced;
#[cfg(feature = "json")]
use tracing as log;

use crate::domain::{listing, Listing};

use super::{Catalog, Error};

/// [`Catalog`] snapshot held in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemory {
    /// [`Listing`]s in their original order.
    listings: Vec<Listing>,

    /// Positions of [`Listing`]s by their [`listing::Id`].
    index: HashMap<listing::Id, usize>,
}

impl InMemory {
    /// Creates a new [`InMemory`] [`Catalog`] out of the provided
    /// [`Listing`]s, preserving their order.
    ///
    /// # Errors
    ///
    /// Errors with [`Error::DuplicateId`] if several [`Listing`]s share the
    /// same [`listing::Id`].
    pub fn new(
        listings: impl IntoIterator<Item = Listing>,
    ) -> Result<Self, Traced<Error>> {
        let listings = listings.into_iter().collect::<Vec<_>>();

        let mut index = HashMap::with_capacity(listings.len());
        for (pos, listing) in listings.iter().enumerate() {
            if index.insert(listing.id.clone(), pos).is_some() {
                return Err(tracerr::new!(Error::DuplicateId(
                    listing.id.clone()
                )));
            }
        }

        Ok(Self { listings, index })
    }

    /// Reads a JSON array of [`Listing`]s from the provided `reader`.
    ///
    /// # Errors
    ///
    /// Errors if the JSON is malformed or [`Listing`]s are not unique.
    #[cfg(feature = "json")]
    pub fn from_reader(reader: impl io::Read) -> Result<Self, Traced<Error>> {
        let listings: Vec<Listing> = serde_json::from_reader(reader)
            .map_err(Error::from)
            .map_err(tracerr::wrap!())?;
        Self::new(listings).map_err(tracerr::wrap!())
    }

    /// Loads a JSON array of [`Listing`]s from the file at the provided
    /// `path`.
    ///
    /// # Errors
    ///
    /// Errors if the file cannot be read, its JSON is malformed or
    /// [`Listing`]s are not unique.
    #[cfg(feature = "json")]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Traced<Error>> {
        let path = path.as_ref();
        let file = fs::File::open(path)
            .map_err(Error::from)
            .map_err(tracerr::wrap!())?;
        let catalog = Self::from_reader(io::BufReader::new(file))
            .map_err(tracerr::wrap!())?;

        log::info!(
            "loaded {} listings from `{}`",
            catalog.listings.len(),
            path.display(),
        );
        Ok(catalog)
    }
}

impl Catalog for InMemory {
    fn listings(&self) -> &[Listing] {
        &self.listings
    }

    fn get(&self, id: &listing::Id) -> Option<&Listing> {
        self.index.get(id).and_then(|pos| self.listings.get(*pos))
    }
}
