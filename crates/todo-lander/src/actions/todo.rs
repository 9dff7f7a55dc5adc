use crate::state::Todo;

/// Todo list actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    /// Append a todo
    Add { text: String },
    /// Replace the whole list, e.g. from a saved session
    Restore(Vec<Todo>),
}
