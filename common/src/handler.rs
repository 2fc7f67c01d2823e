//! [`Handler`] and [`Reader`] abstractions.

/// Executable handler mutating the state it's executed upon.
pub trait Handler<Args = ()> {
    /// Type of this [`Handler`] result.
    type Ok;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(&mut self, args: Args) -> Self::Ok;
}

/// Handler reading the state it's executed upon without mutating it.
pub trait Reader<Args = ()> {
    /// Type of this [`Reader`] result, possibly borrowing from the state.
    type Ok<'s>
    where
        Self: 's;

    /// Reads the state with the provided arguments.
    fn read(&self, args: Args) -> Self::Ok<'_>;
}
