//! Add Todo Form State

/// State for the single-input add todo form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddTodoFormState {
    pub input: String,
}

impl AddTodoFormState {
    /// Trimmed input, or None if there is nothing to submit
    pub fn submission(&self) -> Option<&str> {
        let text = self.input.trim();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
