//! [`Command`] for switching the current view.

use derive_more::From;
use tracing as log;

use crate::{domain::view, Session};

use super::Command;

/// [`Command`] for switching between the search and the favorites views.
#[derive(Clone, Copy, Debug, From)]
pub struct SwitchView(pub view::Current);

impl<C> Command<SwitchView> for Session<C> {
    type Ok = ();

    fn execute(&mut self, SwitchView(current): SwitchView) {
        self.view.current = current;

        log::debug!(?current, "view switched");
    }
}
