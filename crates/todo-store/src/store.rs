use std::sync::mpsc::{self, Receiver};

use crate::action::Action;
use crate::dispatcher::{self, Dispatcher};
use crate::error::StoreError;
use crate::middleware::Middleware;
use crate::reducer::Reducer;

/// Maximum number of actions a single `dispatch` call may process
pub const DEFAULT_CASCADE_LIMIT: usize = 64;

type Subscriber<S> = Box<dyn FnMut(&S)>;

/// Handle returned by [`Store::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Store - holds application state and manages the Redux loop
///
/// - State is replaced as a whole on each action, never mutated in place
/// - Actions flow through the middleware chain, then the reducer
/// - Subscribers are notified once per applied action, after the state changed
/// - Follow-up actions queued on the [`Dispatcher`] run before `dispatch` returns
pub struct Store<S, A, R> {
    state: S,
    reducer: R,
    middleware: Vec<Box<dyn Middleware<S, A>>>,
    subscribers: Vec<(SubscriptionId, Subscriber<S>)>,
    next_subscription: u64,
    dispatcher: Dispatcher<A>,
    action_rx: Receiver<A>,
    cascade_limit: usize,
}

impl<S, A, R> Store<S, A, R>
where
    S: Clone,
    A: Action,
    R: Reducer<S, A>,
{
    /// Create a new store, building the initial state from the reducer
    ///
    /// The reducer is called once with no prior state and `A::init()`.
    pub fn new(reducer: R) -> Result<Self, StoreError> {
        let state = reducer
            .reduce(None, &A::init())
            .map_err(|e| StoreError::Init {
                source: Box::new(e),
            })?;
        let (action_tx, action_rx) = mpsc::channel();

        Ok(Self {
            state,
            reducer,
            middleware: Vec::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
            cascade_limit: DEFAULT_CASCADE_LIMIT,
        })
    }

    /// Limit how many actions one `dispatch` call may process
    pub fn with_cascade_limit(mut self, limit: usize) -> Self {
        self.cascade_limit = limit.max(1);
        self
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware<S, A>>) {
        self.middleware.push(middleware);
    }

    /// Register a callback that is invoked after every state transition
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&S) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Get the current state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher<A> {
        &self.dispatcher
    }

    /// Process an action through middleware chain and reducer
    ///
    /// Runs to completion, including any follow-up actions queued while
    /// processing. Actions queued on the [`Dispatcher`] outside of a dispatch
    /// call are applied first, so everything lands in the order it was sent.
    ///
    /// Subscribers are notified once for every action the reducer applies.
    /// One call can therefore notify zero times (middleware consumed the
    /// action) or several times (middleware queued follow-ups).
    ///
    /// If the reducer fails the state from before the failing action is kept,
    /// pending follow-ups are dropped and the error returned.
    pub fn dispatch(&mut self, action: A) -> Result<(), StoreError> {
        let mut pending = dispatcher::drain(&self.action_rx);
        pending.push(action);
        let mut processed = 0;

        while !pending.is_empty() {
            let mut batch = pending.into_iter();
            while let Some(action) = batch.next() {
                if processed == self.cascade_limit {
                    // The action we just took out of the batch is dropped too
                    self.discard_pending(batch.len() + 1);
                    return Err(StoreError::CascadeLimit {
                        limit: self.cascade_limit,
                    });
                }
                processed += 1;

                if let Err(e) = self.apply(action) {
                    self.discard_pending(batch.len());
                    return Err(e);
                }
            }

            // Process any actions dispatched by middleware or subscribers
            pending = dispatcher::drain(&self.action_rx);
        }

        Ok(())
    }

    fn apply(&mut self, action: A) -> Result<(), StoreError> {
        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                return Ok(());
            }
        }

        // If no middleware consumed the action, send to reducer
        self.state = self
            .reducer
            .reduce(Some(self.state.clone()), &action)
            .map_err(|e| StoreError::Reduce {
                action: format!("{:?}", action),
                source: Box::new(e),
            })?;

        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.state);
        }

        Ok(())
    }

    /// Drop `unprocessed` actions left in the current batch plus whatever is queued
    fn discard_pending(&self, unprocessed: usize) -> usize {
        let dropped = unprocessed + dispatcher::drain(&self.action_rx).len();
        if dropped > 0 {
            log::warn!("Dropping {} queued action(s) after failed dispatch", dropped);
        }
        dropped
    }
}
