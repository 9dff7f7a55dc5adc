use thiserror::Error;

/// Reasons the reducer rejects an action
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("todo text must not be empty")]
    EmptyText,

    #[error("todo text is {len} characters long, the limit is {max}")]
    TooLong { len: usize, max: usize },
}
