//! [`Command`] for switching the [`view::Mode`].

use derive_more::From;
use tracing as log;

use crate::{domain::view, Session};

use super::Command;

/// [`Command`] for switching between the list and the map layouts.
#[derive(Clone, Copy, Debug, From)]
pub struct SwitchViewMode(pub view::Mode);

impl<C> Command<SwitchViewMode> for Session<C> {
    type Ok = ();

    fn execute(&mut self, SwitchViewMode(mode): SwitchViewMode) {
        self.view.mode = mode;

        log::debug!(?mode, "view mode switched");
    }
}

#[cfg(test)]
mod spec {
    use super::SwitchViewMode;
    use crate::{
        command::{SelectListing, SwitchView},
        domain::view,
        infra::InMemory,
        query, Command as _, Query as _, Session,
    };

    #[test]
    fn switches_view_state() {
        let mut session = Session::new(InMemory::default());
        assert_eq!(*session.read(query::view::State), view::State::default());

        session.execute(SwitchViewMode(view::Mode::Map));
        session.execute(SwitchView(view::Current::Favorites));
        session.execute(SelectListing(Some("7".into())));

        assert_eq!(
            *session.read(query::view::State),
            view::State {
                mode: view::Mode::Map,
                current: view::Current::Favorites,
                selected: Some("7".into()),
            },
        );
    }
}
