//! Plain-text rendering of the application state

use std::io::{self, Write};

use crate::state::AppState;

/// Render the todo list followed by the form prompt
pub fn render(state: &AppState, out: &mut impl Write) -> io::Result<()> {
    render_todos(state, out)?;
    render_prompt(state, out)
}

/// Render the numbered todo list
pub fn render_todos(state: &AppState, out: &mut impl Write) -> io::Result<()> {
    if state.todos.todos.is_empty() {
        writeln!(out, "No todos yet.")?;
    } else {
        writeln!(out, "Todos:")?;
        for (index, text) in state.todos.texts().enumerate() {
            writeln!(out, "{:>3}. {}", index + 1, text)?;
        }
    }
    Ok(())
}

/// Render only the input line of the add todo form
pub fn render_prompt(state: &AppState, out: &mut impl Write) -> io::Result<()> {
    write!(out, "{}{}", state.app_config.prompt, state.add_todo_form.input)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Todo;

    fn rendered(state: &AppState) -> String {
        let mut out = Vec::new();
        render(state, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(rendered(&AppState::default()), "No todos yet.\nadd todo> ");
    }

    #[test]
    fn test_render_numbered_todos_and_input() {
        let mut state = AppState::default();
        state.todos.todos = vec![Todo::new("buy groceries"), Todo::new("watch netflix")];
        state.add_todo_form.input = "wa".to_string();

        assert_eq!(
            rendered(&state),
            "Todos:\n  1. buy groceries\n  2. watch netflix\nadd todo> wa"
        );
    }
}
