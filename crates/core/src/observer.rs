/// Receives estimator events and optionally returns a control action.
///
/// Estimators call [`observe`][Observer::observe] once per event. Returning
/// `None` lets the estimator continue; returning `Some(action)` asks it to
/// act, with the meaning of each action defined by the estimator.
pub trait Observer<E, A> {
    /// Observes an estimator event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
