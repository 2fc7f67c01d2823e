//! [`Command`] for updating the active [`Filter`].

use derive_more::From;
use tracing as log;

use crate::{
    domain::{filter, Filter},
    Session,
};

use super::Command;

/// [`Command`] for merging a [`filter::Patch`] into the active [`Filter`].
///
/// This is the only way to change the active [`Filter`], both for the user
/// and for the assistant.
#[derive(Clone, Debug, Default, From)]
pub struct UpdateFilters(pub filter::Patch);

impl<C> Command<UpdateFilters> for Session<C> {
    type Ok = ();

    fn execute(&mut self, UpdateFilters(patch): UpdateFilters) {
        self.filter = self.filter.merge(patch);

        log::debug!(filter = ?self.filter, "`Filter` updated");
    }
}

#[cfg(test)]
mod spec {
    use common::Money;

    use super::UpdateFilters;
    use crate::{
        domain::{filter::Patch, Filter},
        infra::InMemory,
        query, Command as _, Query as _, Session,
    };

    #[test]
    fn merges_patches_in_order() {
        let mut session = Session::new(InMemory::default());

        session.execute(UpdateFilters(Patch {
            city: Some("Lille".into()),
            min_price: Some(Money::from(100_000)),
            ..Patch::default()
        }));
        session.execute(UpdateFilters(Patch {
            min_price: Some(Money::from(120_000)),
            ..Patch::default()
        }));

        assert_eq!(
            *session.read(query::filters::Current),
            Filter {
                city: "Lille".into(),
                min_price: Money::from(120_000),
                ..Filter::default()
            },
        );
    }
}
