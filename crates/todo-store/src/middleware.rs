use crate::dispatcher::Dispatcher;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs synchronously inside `Store::dispatch`, in the order it
/// was added.
pub trait Middleware<S, A> {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current state (read-only)
    /// - `dispatcher`: Use to queue follow-up actions; they run after this one
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &A, state: &S, dispatcher: &Dispatcher<A>) -> bool;
}
