//! Unidirectional state store
//!
//! This crate provides:
//! - `Store` - single owner of application state, runs the dispatch/reduce/notify loop
//! - `Reducer` - pure function producing the next state from the prior one and an action
//! - `Middleware` - intercepts actions before they reach the reducer
//! - `Dispatcher` - queues follow-up actions from middleware and callbacks

pub mod action;
pub mod dispatcher;
pub mod error;
pub mod middleware;
pub mod reducer;
pub mod store;

pub use action::Action;
pub use dispatcher::Dispatcher;
pub use error::StoreError;
pub use middleware::Middleware;
pub use reducer::Reducer;
pub use store::{Store, SubscriptionId, DEFAULT_CASCADE_LIMIT};
