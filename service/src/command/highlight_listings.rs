//! [`Command`] for highlighting [`Listing`]s.

use derive_more::From;
use tracing as log;

use crate::{
    domain::{Listing, Selection},
    Session,
};

use super::Command;

/// [`Command`] for replacing the highlighted [`Listing`]s, as proposed by the
/// assistant.
///
/// Duplicated [`Listing`]s are highlighted once, in order of their first
/// occurrence.
#[derive(Clone, Debug, Default, From)]
pub struct HighlightListings(pub Vec<Listing>);

impl<C> Command<HighlightListings> for Session<C> {
    type Ok = ();

    fn execute(&mut self, HighlightListings(listings): HighlightListings) {
        self.highlighted = listings.into_iter().collect::<Selection>();

        log::debug!(count = self.highlighted.len(), "`Listing`s highlighted");
    }
}

#[cfg(test)]
mod spec {
    use super::HighlightListings;
    use crate::{
        domain::listing::mock, infra::InMemory, query, Command as _,
        Query as _, Session,
    };

    #[test]
    fn replaces_highlighted() {
        let mut session = Session::new(InMemory::default());

        session.execute(HighlightListings(vec![
            mock::listing("1"),
            mock::listing("2"),
            mock::listing("1"),
        ]));
        session.execute(HighlightListings(vec![
            mock::listing("3"),
            mock::listing("2"),
        ]));

        let ids = session
            .read(query::listings::Highlighted)
            .iter()
            .map(|l| l.id.as_ref())
            .collect::<Vec<&str>>();
        assert_eq!(ids, ["3", "2"]);
    }
}
