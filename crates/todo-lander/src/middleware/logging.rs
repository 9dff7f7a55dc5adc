use todo_store::{Dispatcher, Middleware};

use crate::actions::Action;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware<AppState, Action> for LoggingMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, _dispatcher: &Dispatcher<Action>) -> bool {
        log::debug!(
            "Action [{}]: {:?} ({} todos)",
            action.kind(),
            action,
            state.todos.todos.len()
        );

        true // Always pass action through
    }
}
