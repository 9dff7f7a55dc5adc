//! Translate lines read from stdin into actions

use std::borrow::Cow;
use std::io::{self, BufRead};

use crate::actions::{Action, AddTodoFormAction, GlobalAction};

/// Read one line, replacing invalid UTF-8 instead of failing
///
/// Returns `None` at EOF. The line terminator is not included.
pub fn read_line(reader: &mut impl BufRead, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }

    let line = String::from_utf8_lossy(buf);
    if matches!(line, Cow::Owned(_)) {
        log::warn!("Input line is not valid UTF-8, replaced invalid bytes");
    }
    Ok(Some(line.into_owned()))
}

/// Translate one line of input into actions
///
/// `:q` and `:quit` quit. Anything else is typed into a cleared form
/// character by character and submitted. Raw backspace/delete characters
/// become `Backspace`; other control characters are dropped.
pub fn actions_for_line(line: &str) -> Vec<Action> {
    if matches!(line.trim(), ":q" | ":quit") {
        return vec![Action::Global(GlobalAction::Quit)];
    }

    let mut actions = vec![Action::AddTodoForm(AddTodoFormAction::ClearField)];
    for c in line.chars() {
        let action = match c {
            '\u{8}' | '\u{7f}' => AddTodoFormAction::Backspace,
            c if c.is_control() => continue,
            c => AddTodoFormAction::Char(c),
        };
        actions.push(Action::AddTodoForm(action));
    }
    actions.push(Action::AddTodoForm(AddTodoFormAction::Submit));
    actions
}
