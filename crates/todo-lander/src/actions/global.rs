/// Application-wide actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalAction {
    /// Stop the event loop
    Quit,
}
