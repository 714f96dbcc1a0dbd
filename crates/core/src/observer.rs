/// A hook called by a solver once per iteration.
///
/// The solver hands over an event describing the iteration it just recorded.
/// Returning `Some(action)` asks the solver to act on it (for bisection, to
/// stop at the current step); `None` lets it carry on.
///
/// Any `FnMut(&E) -> Option<A>` is an observer. `()` observes nothing.
pub trait Observer<E, A> {
    /// Inspects `event` and optionally requests an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
