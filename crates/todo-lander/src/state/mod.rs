//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod add_todo_form;
mod app;
mod todos;

pub use add_todo_form::AddTodoFormState;
pub use app::AppState;
pub use todos::{Todo, TodoListState};
