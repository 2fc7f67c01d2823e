//! [`Query`] collection related to the active [`Filter`].

use crate::{
    domain::{filter, Filter},
    Session,
};

use super::Query;

/// Queries the active [`Filter`].
#[derive(Clone, Copy, Debug)]
pub struct Current;

impl<C> Query<Current> for Session<C> {
    type Ok<'s> = &'s Filter where Self: 's;

    fn read(&self, _: Current) -> &Filter {
        &self.filter
    }
}

/// Queries [`filter::IncludedExpenses`] of the active [`Filter`].
#[derive(Clone, Copy, Debug)]
pub struct IncludedExpenses;

impl<C> Query<IncludedExpenses> for Session<C> {
    type Ok<'s> = filter::IncludedExpenses where Self: 's;

    fn read(&self, _: IncludedExpenses) -> filter::IncludedExpenses {
        self.filter.included_expenses()
    }
}
