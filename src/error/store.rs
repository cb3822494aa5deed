use thiserror::Error as ThisError;

/// Failures raised by the trivia store.
#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored options payload could not be encoded or decoded as JSON.
    #[error("invalid options payload: {0}")]
    Options(#[from] serde_json::Error),
}
