//! Wire-level client for the Open Trivia Database HTTP API.
//!
//! Pure protocol translation: request shapes, query parameters, and JSON
//! decoding. Response-code semantics are interpreted one layer up, in the
//! source adapter.

use crate::error::SourceError;
use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use quizbank_schema::{
    CategoryCountResponse, CategoryListResponse, QuestionListResponse, TokenResponse,
};
use std::sync::LazyLock;
use std::time::Duration;
use url::Url;

/// Bounded retry for transport-level failures and upstream 5xx. Domain-level
/// rate limiting (response code 5) is handled by the adapter, not here.
static NETWORK_RETRY_POLICY: LazyLock<ExponentialBuilder> = LazyLock::new(|| {
    ExponentialBuilder::default()
        .with_min_delay(Duration::from_millis(100))
        .with_max_delay(Duration::from_millis(300))
        .with_max_times(2)
        .with_jitter()
});

/// One method per provider endpoint.
#[async_trait]
pub trait TriviaApi: Send + Sync {
    /// `GET /api_token.php?command=request` — issues a session token so a
    /// pass can traverse results without repeats.
    async fn request_token(&self) -> Result<TokenResponse, SourceError>;

    /// `GET /api_category.php` — the full category set, one call.
    async fn categories(&self) -> Result<CategoryListResponse, SourceError>;

    /// `GET /api_count.php?category={id}` — question volume for one category.
    async fn category_count(&self, category_id: i64)
    -> Result<CategoryCountResponse, SourceError>;

    /// `GET /api.php?amount={n}&category={id}&token={token}` — one page of
    /// questions against the live session token.
    async fn questions(
        &self,
        amount: u32,
        category_id: i64,
        token: &str,
    ) -> Result<QuestionListResponse, SourceError>;
}

pub struct OpenTriviaApi {
    client: reqwest::Client,
    token_url: Url,
    category_url: Url,
    count_url: Url,
    question_url: Url,
}

impl OpenTriviaApi {
    pub fn new(base_url: &Url) -> Self {
        let join = |path: &str| {
            base_url
                .join(path)
                .expect("FATAL: trivia api base url cannot be joined with endpoint paths")
        };

        let client = reqwest::Client::builder()
            .user_agent("quizbank/0.1")
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("FATAL: initialize trivia HTTP client failed");

        Self {
            client,
            token_url: join("api_token.php"),
            category_url: join("api_category.php"),
            count_url: join("api_count.php"),
            question_url: join("api.php"),
        }
    }

    async fn get_json<T>(&self, url: &Url, query: &[(&str, String)]) -> Result<T, SourceError>
    where
        T: serde::de::DeserializeOwned,
    {
        let resp = (|| {
            let client = self.client.clone();
            let url = url.clone();

            async move {
                let resp = client.get(url.clone()).query(query).send().await?;

                if resp.status().is_server_error() {
                    let status = resp.status();
                    let err = resp.error_for_status_ref().unwrap_err();
                    tracing::debug!(%status, url = %url, "provider server error (will retry)");
                    return Err(err);
                }

                Ok(resp)
            }
        })
        .retry(*NETWORK_RETRY_POLICY)
        .await?;

        Ok(resp.error_for_status()?.json::<T>().await?)
    }
}

#[async_trait]
impl TriviaApi for OpenTriviaApi {
    async fn request_token(&self) -> Result<TokenResponse, SourceError> {
        self.get_json(&self.token_url, &[("command", "request".to_string())])
            .await
    }

    async fn categories(&self) -> Result<CategoryListResponse, SourceError> {
        self.get_json(&self.category_url, &[]).await
    }

    async fn category_count(
        &self,
        category_id: i64,
    ) -> Result<CategoryCountResponse, SourceError> {
        self.get_json(&self.count_url, &[("category", category_id.to_string())])
            .await
    }

    async fn questions(
        &self,
        amount: u32,
        category_id: i64,
        token: &str,
    ) -> Result<QuestionListResponse, SourceError> {
        self.get_json(
            &self.question_url,
            &[
                ("amount", amount.to_string()),
                ("category", category_id.to_string()),
                ("token", token.to_string()),
            ],
        )
        .await
    }
}
