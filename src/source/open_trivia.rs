//! Domain-facing adapter over the Open Trivia wire client.
//!
//! Owns the session-token lifecycle for one ingestion pass and maps the
//! provider's response codes onto outcomes: success, exhausted-category,
//! fatal rejection, or a rate-limit cooldown that is retried until a
//! conclusive code arrives or cancellation is requested.

use crate::error::SourceError;
use crate::model::{Category, CategoryId, NewQuestion};
use crate::source::api::TriviaApi;
use async_trait::async_trait;
use quizbank_schema::{QuestionItem, ResponseCode};
use rand::seq::SliceRandom;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Fixed wait between retries when the provider reports rate limiting.
pub const RATE_LIMIT_COOLDOWN: Duration = Duration::from_secs(5);

/// Domain contract consumed by the ingestion workflow.
#[async_trait]
pub trait TriviaSource: Send {
    async fn list_categories(&self) -> Result<Vec<Category>, SourceError>;

    /// Total question count the provider holds for the category.
    async fn category_question_count(&self, category_id: CategoryId)
    -> Result<i64, SourceError>;

    /// Fetches up to `amount` questions for the category. An empty result
    /// means the provider has no more questions there — an expected terminal
    /// condition, not an error.
    async fn fetch_questions(
        &mut self,
        amount: u32,
        category_id: CategoryId,
        cancel: &CancellationToken,
    ) -> Result<Vec<NewQuestion>, SourceError>;
}

/// One instance serves one ingestion pass. The session token is acquired
/// lazily on the first fetch and held for the lifetime of the instance;
/// instances are not reused across passes.
pub struct OpenTriviaSource<A> {
    api: A,
    token: Option<String>,
}

impl<A: TriviaApi> OpenTriviaSource<A> {
    pub fn new(api: A) -> Self {
        Self { api, token: None }
    }

    async fn ensure_token(&mut self) -> Result<(), SourceError> {
        if self.token.is_some() {
            return Ok(());
        }

        let resp = self.api.request_token().await?;
        if resp.response_code != ResponseCode::Success {
            return Err(SourceError::TokenAcquisition {
                code: resp.response_code,
                message: resp.response_message,
            });
        }

        debug!("session token acquired");
        self.token = Some(resp.token);
        Ok(())
    }
}

#[async_trait]
impl<A: TriviaApi> TriviaSource for OpenTriviaSource<A> {
    async fn list_categories(&self) -> Result<Vec<Category>, SourceError> {
        let resp = self.api.categories().await?;

        Ok(resp
            .trivia_categories
            .into_iter()
            .map(|item| Category {
                id: CategoryId(item.id),
                name: item.name,
            })
            .collect())
    }

    async fn category_question_count(
        &self,
        category_id: CategoryId,
    ) -> Result<i64, SourceError> {
        let resp = self.api.category_count(category_id.0).await?;

        Ok(resp.category_question_count.total_question_count)
    }

    async fn fetch_questions(
        &mut self,
        amount: u32,
        category_id: CategoryId,
        cancel: &CancellationToken,
    ) -> Result<Vec<NewQuestion>, SourceError> {
        self.ensure_token().await?;

        loop {
            if cancel.is_cancelled() {
                return Err(SourceError::Cancelled);
            }

            let token = self.token.as_deref().unwrap_or_default();
            let resp = self.api.questions(amount, category_id.0, token).await?;

            match resp.response_code {
                ResponseCode::Success => {
                    return Ok(resp.results.into_iter().map(map_question).collect());
                }

                // Category exhausted: expected terminal condition.
                ResponseCode::NoResults => return Ok(Vec::new()),

                // The token has delivered all unique questions it can for
                // this pass. Reissuing a token here would risk undetected
                // duplication, so this is fatal.
                ResponseCode::TokenEmpty => return Err(SourceError::TokenExhausted),

                code @ (ResponseCode::InvalidParameter | ResponseCode::TokenNotFound) => {
                    return Err(SourceError::Rejected { code });
                }

                ResponseCode::RateLimited => {
                    debug!(category = %category_id, "provider rate limited; cooling down");
                    tokio::select! {
                        () = cancel.cancelled() => return Err(SourceError::Cancelled),
                        () = sleep(RATE_LIMIT_COOLDOWN) => {}
                    }
                }
            }
        }
    }
}

/// Merges the correct answer into the incorrect alternatives and shuffles,
/// so the correct position is not predictable from the source order.
fn map_question(item: QuestionItem) -> NewQuestion {
    let mut options = item.incorrect_answers;
    options.push(item.correct_answer.clone());
    options.shuffle(&mut rand::rng());

    NewQuestion {
        text: item.question,
        correct_answer: item.correct_answer,
        options,
        difficulty: item.difficulty,
    }
}
