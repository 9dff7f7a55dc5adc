//! Add Todo form actions
//!
//! Actions specific to the single-input add todo form.

/// Actions for the add todo form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddTodoFormAction {
    /// Character typed into the input
    Char(char),
    /// Backspace pressed in the input
    Backspace,
    /// Clear the entire input
    ClearField,
    /// Submit the form (Enter)
    Submit,
}
