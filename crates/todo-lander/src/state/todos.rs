/// A single todo item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub text: String,
}

impl Todo {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// The todo list, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoListState {
    pub todos: Vec<Todo>,
}

impl TodoListState {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.todos.iter().map(|todo| todo.text.as_str())
    }
}
