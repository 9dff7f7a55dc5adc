//! Dispatcher for follow-up actions
//!
//! `Store::dispatch` takes `&mut self`, so middleware and subscribers cannot
//! dispatch re-entrantly. They queue actions on the Dispatcher instead. The
//! store drains the queue once the current action is done, and every queued
//! action goes through the full middleware chain from the beginning.
//! Actions queued while no dispatch is running are applied at the start of
//! the next `Store::dispatch` call, ahead of the action passed to it.
//!
//! This enables patterns like:
//! - Form submit queues `AddTodo` followed by `ClearField`

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

/// Handle for queuing actions on a store
#[derive(Debug)]
pub struct Dispatcher<A> {
    action_tx: Sender<A>,
}

// Derived Clone would require `A: Clone`.
impl<A> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            action_tx: self.action_tx.clone(),
        }
    }
}

impl<A> Dispatcher<A> {
    pub(crate) fn new(action_tx: Sender<A>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for processing after the current one, or before the
    /// next dispatched action when the store is idle
    ///
    /// If the store is gone the action is dropped and the failure logged.
    pub fn dispatch(&self, action: A) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to queue action: {}", e);
        }
    }
}

/// Drain everything queued so far, in FIFO order
pub(crate) fn drain<A>(action_rx: &Receiver<A>) -> Vec<A> {
    let mut pending = Vec::new();
    loop {
        match action_rx.try_recv() {
            Ok(action) => pending.push(action),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
        }
    }
    pending
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_drain_preserves_order() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        dispatcher.dispatch(1);
        dispatcher.clone().dispatch(2);
        dispatcher.dispatch(3);

        assert_eq!(drain(&rx), vec![1, 2, 3]);
        assert!(drain(&rx).is_empty());
    }

    #[test]
    fn test_dispatch_after_receiver_dropped_does_not_panic() {
        let (tx, rx) = mpsc::channel::<u8>();
        let dispatcher = Dispatcher::new(tx);
        drop(rx);

        dispatcher.dispatch(7);
    }
}
