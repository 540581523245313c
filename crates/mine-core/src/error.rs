//! Error types for worker operations.
//!
//! Dispatching an action cannot fail. The only failure left is the output
//! sink a worker reports to.

/// Result alias for worker operations.
pub type Result<T, E = WorkerError> = std::result::Result<T, E>;

/// Errors raised while a worker reports its actions.
#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    /// Writing a report line to the output sink failed.
    #[error("failed to write worker output: {0}")]
    Output(#[from] std::io::Error),
}
