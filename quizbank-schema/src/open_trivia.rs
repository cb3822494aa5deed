//! Wire schemas for the Open Trivia Database JSON API (opentdb.com).
//!
//! These types mirror the provider payloads verbatim; domain mapping
//! (option shuffling, id newtypes) happens in the consuming crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Response code carried by stateful provider endpoints (token issuance and
/// question fetch). The wire form is a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ResponseCode {
    /// The request completed successfully.
    Success,
    /// The request completed but returned no results.
    NoResults,
    /// The request was rejected due to invalid parameters.
    InvalidParameter,
    /// The session token was not found or expired.
    TokenNotFound,
    /// The session token has returned all available questions and is exhausted.
    TokenEmpty,
    /// Too many requests were made in a short time window.
    RateLimited,
}

impl ResponseCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseCode::Success => "success",
            ResponseCode::NoResults => "no_results",
            ResponseCode::InvalidParameter => "invalid_parameter",
            ResponseCode::TokenNotFound => "token_not_found",
            ResponseCode::TokenEmpty => "token_empty",
            ResponseCode::RateLimited => "rate_limited",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_str(), u8::from(*self))
    }
}

impl TryFrom<u8> for ResponseCode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ResponseCode::Success),
            1 => Ok(ResponseCode::NoResults),
            2 => Ok(ResponseCode::InvalidParameter),
            3 => Ok(ResponseCode::TokenNotFound),
            4 => Ok(ResponseCode::TokenEmpty),
            5 => Ok(ResponseCode::RateLimited),
            other => Err(format!("unknown Open Trivia response code: {other}")),
        }
    }
}

impl From<ResponseCode> for u8 {
    fn from(code: ResponseCode) -> Self {
        match code {
            ResponseCode::Success => 0,
            ResponseCode::NoResults => 1,
            ResponseCode::InvalidParameter => 2,
            ResponseCode::TokenNotFound => 3,
            ResponseCode::TokenEmpty => 4,
            ResponseCode::RateLimited => 5,
        }
    }
}

/// `GET /api_token.php?command=request`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    pub response_code: ResponseCode,
    #[serde(default)]
    pub response_message: String,
    #[serde(default)]
    pub token: String,
}

/// `GET /api_category.php` — the full category set in one call, no pagination.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategoryListResponse {
    pub trivia_categories: Vec<CategoryItem>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategoryItem {
    pub id: i64,
    pub name: String,
}

/// `GET /api_count.php?category={id}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategoryCountResponse {
    pub category_id: i64,
    pub category_question_count: CategoryQuestionCount,
}

/// Question volume for one category. Only the total is used for sizing
/// imports; the per-difficulty breakdown is carried for completeness.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CategoryQuestionCount {
    pub total_question_count: i64,
    #[serde(default)]
    pub total_easy_question_count: i64,
    #[serde(default)]
    pub total_medium_question_count: i64,
    #[serde(default)]
    pub total_hard_question_count: i64,
}

/// `GET /api.php?amount={n}&category={id}&token={token}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuestionListResponse {
    pub response_code: ResponseCode,
    #[serde(default)]
    pub results: Vec<QuestionItem>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuestionItem {
    /// Question kind as reported by the provider (`multiple` or `boolean`).
    #[serde(rename = "type")]
    pub kind: String,
    pub difficulty: String,
    #[serde(default)]
    pub category: String,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_token_response() {
        let raw = r#"{
            "response_code": 0,
            "response_message": "Token Generated Successfully!",
            "token": "a1b2c3"
        }"#;

        let parsed: TokenResponse = serde_json::from_str(raw).expect("parse token response");
        assert_eq!(parsed.response_code, ResponseCode::Success);
        assert_eq!(parsed.token, "a1b2c3");
    }

    #[test]
    fn decodes_question_response_with_results() {
        let raw = r#"{
            "response_code": 0,
            "results": [
                {
                    "type": "multiple",
                    "difficulty": "easy",
                    "category": "Science & Nature",
                    "question": "What is the chemical symbol for iron?",
                    "correct_answer": "Fe",
                    "incorrect_answers": ["Ir", "Fr", "In"]
                }
            ]
        }"#;

        let parsed: QuestionListResponse = serde_json::from_str(raw).expect("parse questions");
        assert_eq!(parsed.response_code, ResponseCode::Success);
        assert_eq!(parsed.results.len(), 1);
        assert_eq!(parsed.results[0].kind, "multiple");
        assert_eq!(parsed.results[0].incorrect_answers.len(), 3);
    }

    #[test]
    fn empty_results_default_when_rate_limited() {
        // The provider omits `results` on non-success codes.
        let raw = r#"{ "response_code": 5 }"#;

        let parsed: QuestionListResponse = serde_json::from_str(raw).expect("parse rate limited");
        assert_eq!(parsed.response_code, ResponseCode::RateLimited);
        assert!(parsed.results.is_empty());
    }

    #[test]
    fn rejects_unknown_response_code() {
        let raw = r#"{ "response_code": 9, "results": [] }"#;

        assert!(serde_json::from_str::<QuestionListResponse>(raw).is_err());
    }

    #[test]
    fn decodes_category_count() {
        let raw = r#"{
            "category_id": 9,
            "category_question_count": {
                "total_question_count": 298,
                "total_easy_question_count": 116,
                "total_medium_question_count": 123,
                "total_hard_question_count": 59
            }
        }"#;

        let parsed: CategoryCountResponse = serde_json::from_str(raw).expect("parse count");
        assert_eq!(parsed.category_id, 9);
        assert_eq!(parsed.category_question_count.total_question_count, 298);
    }
}
