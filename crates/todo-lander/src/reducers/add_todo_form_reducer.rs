//! Add Todo Form Reducer
//!
//! Handles state changes for the add todo form.

use crate::actions::{Action, AddTodoFormAction};
use crate::state::AddTodoFormState;

/// Reduce add todo form state based on actions
pub fn reduce(mut state: AddTodoFormState, action: &Action) -> AddTodoFormState {
    let Action::AddTodoForm(action) = action else {
        return state;
    };

    match action {
        AddTodoFormAction::Char(c) => {
            state.input.push(*c);
        }
        AddTodoFormAction::Backspace => {
            state.input.pop();
        }
        AddTodoFormAction::ClearField => {
            state.input.clear();
        }
        // Submit: turned into Todo(Add) by the form middleware
        AddTodoFormAction::Submit => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(action: AddTodoFormAction) -> Action {
        Action::AddTodoForm(action)
    }

    #[test]
    fn test_typing_and_backspace() {
        let state = [
            form(AddTodoFormAction::Char('h')),
            form(AddTodoFormAction::Char('i')),
            form(AddTodoFormAction::Char('!')),
            form(AddTodoFormAction::Backspace),
        ]
        .iter()
        .fold(AddTodoFormState::default(), reduce);

        assert_eq!(state.input, "hi");
    }

    #[test]
    fn test_backspace_on_empty_input() {
        let state = reduce(AddTodoFormState::default(), &form(AddTodoFormAction::Backspace));
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_clear_field() {
        let state = AddTodoFormState {
            input: "read a book".to_string(),
        };
        let state = reduce(state, &form(AddTodoFormAction::ClearField));
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_submit_leaves_input_alone() {
        let state = AddTodoFormState {
            input: "pending".to_string(),
        };
        let next = reduce(state.clone(), &form(AddTodoFormAction::Submit));
        assert_eq!(next, state);
    }
}
