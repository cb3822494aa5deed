use quizbank_schema::ResponseCode;
use thiserror::Error as ThisError;

/// Failures raised by the trivia source adapter and its wire client.
#[derive(Debug, ThisError)]
pub enum SourceError {
    /// Transport-level failure (DNS, connect, timeouts, non-2xx status) after
    /// the wire client's bounded retry is spent.
    #[error("trivia provider unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),

    /// The provider refused to issue a session token.
    #[error("session token request failed: {code}: {message}")]
    TokenAcquisition {
        code: ResponseCode,
        message: String,
    },

    /// The session token has delivered every unique question it can for this
    /// pass. Continuing would duplicate questions or require a fresh token,
    /// so the pass must stop.
    #[error("session token is exhausted; restart ingestion to continue")]
    TokenExhausted,

    /// The provider rejected the request outright (malformed parameters or an
    /// unknown/expired token).
    #[error("provider rejected the request: {code}")]
    Rejected { code: ResponseCode },

    /// Cancellation was requested while waiting on the provider.
    #[error("operation cancelled")]
    Cancelled,
}
