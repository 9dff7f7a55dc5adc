use std::fmt::Debug;

/// An action that can be dispatched to a [`Store`](crate::Store)
///
/// Actions are closed enums, one variant per kind. The store needs exactly one
/// thing from them beyond `Debug`: the reserved action used to build the
/// initial state.
pub trait Action: Debug {
    /// The reserved initialization action
    ///
    /// Reduced once, with no prior state, when the store is constructed.
    fn init() -> Self;
}
