//! Todo List Reducer

use todo_config::AppConfig;

use crate::actions::{Action, TodoAction};
use crate::error::TodoError;
use crate::state::{Todo, TodoListState};

/// Reduce todo list state based on actions
pub fn reduce(
    mut state: TodoListState,
    action: &Action,
    app_config: &AppConfig,
) -> Result<TodoListState, TodoError> {
    match action {
        Action::Todo(TodoAction::Add { text }) => {
            validate(text, app_config)?;
            state.todos.push(Todo::new(text.as_str()));
        }
        Action::Todo(TodoAction::Restore(todos)) => {
            // Saved todos may predate the current limits or be edited by hand
            state.todos = todos
                .iter()
                .filter(|todo| match validate(&todo.text, app_config) {
                    Ok(()) => true,
                    Err(e) => {
                        log::warn!("Skipping restored todo {:?}: {}", todo.text, e);
                        false
                    }
                })
                .cloned()
                .collect();
        }
        _ => {}
    }

    Ok(state)
}

/// Check a todo text against the rules every todo in the list satisfies
fn validate(text: &str, app_config: &AppConfig) -> Result<(), TodoError> {
    if text.trim().is_empty() {
        return Err(TodoError::EmptyText);
    }
    let len = text.chars().count();
    if len > app_config.max_todo_length {
        return Err(TodoError::TooLong {
            len,
            max: app_config.max_todo_length,
        });
    }
    Ok(())
}
