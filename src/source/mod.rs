//! The trivia source: wire client for the Open Trivia Database plus the
//! domain-facing adapter that owns session-token lifecycle and rate-limit
//! handling.

pub mod api;
pub mod open_trivia;

pub use api::{OpenTriviaApi, TriviaApi};
pub use open_trivia::{OpenTriviaSource, TriviaSource, RATE_LIMIT_COOLDOWN};
