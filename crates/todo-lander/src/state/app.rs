//! Application State

use super::{AddTodoFormState, TodoListState};

/// Application state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub running: bool,
    pub todos: TodoListState,
    pub add_todo_form: AddTodoFormState,
    /// Application configuration
    pub app_config: todo_config::AppConfig,
}

impl AppState {
    pub fn with_config(app_config: todo_config::AppConfig) -> Self {
        Self {
            app_config,
            ..Self::default()
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            todos: TodoListState::default(),
            add_todo_form: AddTodoFormState::default(),
            app_config: todo_config::AppConfig::default(),
        }
    }
}
