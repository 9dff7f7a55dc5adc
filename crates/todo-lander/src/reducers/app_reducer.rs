use todo_config::AppConfig;

use crate::actions::{Action, GlobalAction};
use crate::error::TodoError;
use crate::reducers::{add_todo_form_reducer, todo_reducer};
use crate::state::AppState;

/// Build the root reducer handed to the store
///
/// The initial state carries `app_config`; after that the config travels
/// inside the state.
pub fn reducer(
    app_config: AppConfig,
) -> impl Fn(Option<AppState>, &Action) -> Result<AppState, TodoError> {
    move |state: Option<AppState>, action: &Action| {
        let state = state.unwrap_or_else(|| AppState::with_config(app_config.clone()));
        reduce(state, action)
    }
}

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> Result<AppState, TodoError> {
    match action {
        Action::Init => {
            log::debug!("Initial state built");
            return Ok(state);
        }
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
            return Ok(state);
        }
        _ => {}
    }

    // Run sub-reducers for component-specific actions
    state.todos = todo_reducer::reduce(state.todos, action, &state.app_config)?;
    state.add_todo_form = add_todo_form_reducer::reduce(state.add_todo_form, action);

    Ok(state)
}
