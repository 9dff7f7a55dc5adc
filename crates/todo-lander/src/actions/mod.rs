//! Actions module
//!
//! Actions are organized by:
//! - Global actions that affect the entire application
//! - Screen-specific actions targeted at a particular state slice

pub mod add_todo_form;
pub mod global;
pub mod todo;

pub use add_todo_form::AddTodoFormAction;
pub use global::GlobalAction;
pub use todo::TodoAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq, Eq, strum::IntoStaticStr)]
pub enum Action {
    /// Reserved action the store reduces once to build the initial state
    Init,
    /// Global application actions
    Global(GlobalAction),
    /// Add-todo form input
    AddTodoForm(AddTodoFormAction),
    /// Todo list changes
    Todo(TodoAction),
}

impl Action {
    /// Kind of this action, e.g. `"Todo"`
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    pub fn add_todo(text: impl Into<String>) -> Self {
        Self::Todo(TodoAction::Add { text: text.into() })
    }
}

impl todo_store::Action for Action {
    fn init() -> Self {
        Self::Init
    }
}
