use thiserror::Error;

/// Boxed error produced by a reducer
pub type ReduceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by [`Store`](crate::Store) operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The reducer rejected the initialization action
    #[error("failed to build initial state: {source}")]
    Init {
        #[source]
        source: ReduceError,
    },

    /// The reducer rejected an action; the prior state is kept
    #[error("reducer failed for {action}: {source}")]
    Reduce {
        action: String,
        #[source]
        source: ReduceError,
    },

    /// A single dispatch processed more actions than allowed
    #[error("dispatch cascade exceeded {limit} actions")]
    CascadeLimit { limit: usize },
}
