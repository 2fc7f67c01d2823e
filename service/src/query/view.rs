//! [`Query`] collection related to the view state.

use crate::{domain::view, Session};

use super::Query;

/// Queries the current [`view::State`].
#[derive(Clone, Copy, Debug)]
pub struct State;

impl<C> Query<State> for Session<C> {
    type Ok<'s> = &'s view::State where Self: 's;

    fn read(&self, _: State) -> &view::State {
        &self.view
    }
}
