pub mod add_todo_form_reducer;
pub mod app_reducer;
pub mod todo_reducer;
