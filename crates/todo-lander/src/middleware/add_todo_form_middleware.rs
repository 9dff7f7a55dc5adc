//! Add Todo Form Middleware
//!
//! Turns a form submit into the todo list action and resets the form.

use todo_store::{Dispatcher, Middleware};

use crate::actions::{Action, AddTodoFormAction};
use crate::state::AppState;

/// Handles `AddTodoForm(Submit)`
///
/// Submit itself never reaches the reducer. With non-blank input the
/// middleware queues `Todo(Add)` followed by `AddTodoForm(ClearField)`.
#[derive(Debug, Default)]
pub struct AddTodoFormMiddleware;

impl AddTodoFormMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware<AppState, Action> for AddTodoFormMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher<Action>) -> bool {
        if !matches!(action, Action::AddTodoForm(AddTodoFormAction::Submit)) {
            return true;
        }

        match state.add_todo_form.submission() {
            Some(text) => {
                log::info!("Adding todo: {}", text);
                dispatcher.dispatch(Action::add_todo(text));
                dispatcher.dispatch(Action::AddTodoForm(AddTodoFormAction::ClearField));
            }
            None => log::debug!("Ignoring submit of blank input"),
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::app_reducer;
    use std::cell::Cell;
    use std::rc::Rc;
    use todo_config::AppConfig;
    use todo_store::Store;

    fn store() -> Store<
        AppState,
        Action,
        impl todo_store::Reducer<AppState, Action, Error = crate::error::TodoError>,
    > {
        let mut store = Store::new(app_reducer::reducer(AppConfig::default())).unwrap();
        store.add_middleware(Box::new(AddTodoFormMiddleware::new()));
        store
    }

    fn type_and_submit(
        store: &mut Store<AppState, Action, impl todo_store::Reducer<AppState, Action>>,
        line: &str,
    ) -> Result<(), todo_store::StoreError> {
        for c in line.chars() {
            store.dispatch(Action::AddTodoForm(AddTodoFormAction::Char(c)))?;
        }
        store.dispatch(Action::AddTodoForm(AddTodoFormAction::Submit))
    }

    #[test]
    fn test_submit_adds_trimmed_todo_and_clears_input() {
        let mut store = store();

        type_and_submit(&mut store, "  buy groceries ").unwrap();

        let state = store.state();
        assert_eq!(state.todos.texts().collect::<Vec<_>>(), vec!["buy groceries"]);
        assert!(state.add_todo_form.input.is_empty());
    }

    #[test]
    fn test_blank_submit_adds_nothing() {
        let mut store = store();

        type_and_submit(&mut store, "   ").unwrap();

        assert!(store.state().todos.todos.is_empty());
        assert_eq!(store.state().add_todo_form.input, "   ");
    }

    #[test]
    fn test_subscriber_sees_added_todo_then_cleared_form() {
        let mut store = store();
        for c in "watch netflix".chars() {
            store
                .dispatch(Action::AddTodoForm(AddTodoFormAction::Char(c)))
                .unwrap();
        }

        let renders = Rc::new(Cell::new(0));
        let renders_clone = renders.clone();
        store.subscribe(move |state: &AppState| {
            renders_clone.set(renders_clone.get() + 1);
            if renders_clone.get() == 1 {
                // Todo(Add) applied, ClearField not yet
                assert_eq!(state.todos.todos.len(), 1);
                assert_eq!(state.add_todo_form.input, "watch netflix");
            }
        });

        store
            .dispatch(Action::AddTodoForm(AddTodoFormAction::Submit))
            .unwrap();

        assert_eq!(renders.get(), 2);
    }

    #[test]
    fn test_over_long_submit_keeps_input() {
        let config = AppConfig {
            max_todo_length: 5,
            ..AppConfig::default()
        };
        let mut store = Store::new(app_reducer::reducer(config)).unwrap();
        store.add_middleware(Box::new(AddTodoFormMiddleware::new()));

        let result = type_and_submit(&mut store, "way too long");

        assert!(matches!(
            result,
            Err(todo_store::StoreError::Reduce { .. })
        ));
        assert!(store.state().todos.todos.is_empty());
        assert_eq!(store.state().add_todo_form.input, "way too long");
    }
}
