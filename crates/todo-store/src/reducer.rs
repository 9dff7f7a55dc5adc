/// Reducer - pure function that produces new state from prior state + action
///
/// `state` is `None` only for the initialization action, when no state exists
/// yet. Reducers must be total: an action they do not handle returns the prior
/// state unchanged instead of an error.
///
/// Plain functions and closures of the right shape are reducers:
///
/// ```
/// use std::convert::Infallible;
///
/// fn reduce(state: Option<u32>, action: &u32) -> Result<u32, Infallible> {
///     Ok(state.unwrap_or_default() + action)
/// }
///
/// fn assert_reducer<R: todo_store::Reducer<u32, u32>>(_: R) {}
/// assert_reducer(reduce);
/// ```
pub trait Reducer<S, A> {
    type Error: std::error::Error + Send + Sync + 'static;

    fn reduce(&self, state: Option<S>, action: &A) -> Result<S, Self::Error>;
}

impl<S, A, E, F> Reducer<S, A> for F
where
    F: Fn(Option<S>, &A) -> Result<S, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn reduce(&self, state: Option<S>, action: &A) -> Result<S, E> {
        self(state, action)
    }
}
