use crate::error::QueryError;
use crate::model::{Category, CategoryId, Question, QuestionId};
use crate::queries::{self, DEFAULT_QUESTION_COUNT};
use crate::server::router::AppState;
use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryBody>,
}

#[derive(Debug, Serialize)]
pub struct CategoryBody {
    pub category_id: i64,
    pub name: String,
}

impl CategoryBody {
    fn from_domain(category: Category) -> Self {
        Self {
            category_id: category.id.0,
            name: category.name,
        }
    }
}

pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, QueryError> {
    let categories = queries::get_categories(state.store.as_ref()).await?;

    Ok(Json(CategoriesResponse {
        categories: categories.into_iter().map(CategoryBody::from_domain).collect(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct RandomQuestionsParams {
    pub count: Option<u32>,
    pub category_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct RandomQuestionsResponse {
    pub questions: Vec<QuestionBody>,
}

/// Question as served to clients. The correct answer is deliberately absent;
/// verification goes through the verify endpoint.
#[derive(Debug, Serialize)]
pub struct QuestionBody {
    pub question_id: i64,
    pub category_id: i64,
    pub text: String,
    pub options: Vec<String>,
    pub difficulty: String,
}

impl QuestionBody {
    fn from_domain(question: Question) -> Self {
        Self {
            question_id: question.id.0,
            category_id: question.category_id.0,
            text: question.text,
            options: question.options,
            difficulty: question.difficulty,
        }
    }
}

pub async fn get_random_questions(
    State(state): State<AppState>,
    Query(params): Query<RandomQuestionsParams>,
) -> Result<Json<RandomQuestionsResponse>, QueryError> {
    let count = params.count.unwrap_or(DEFAULT_QUESTION_COUNT);
    let category_id = params.category_id.map(CategoryId);

    let questions =
        queries::get_random_questions(state.store.as_ref(), count, category_id).await?;

    Ok(Json(RandomQuestionsResponse {
        questions: questions.into_iter().map(QuestionBody::from_domain).collect(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct VerifyAnswerRequest {
    pub question_id: i64,
    pub selected_option_index: i64,
}

#[derive(Debug, Serialize)]
pub struct VerifyAnswerResponse {
    pub is_correct: bool,
}

pub async fn verify_answer(
    State(state): State<AppState>,
    Json(request): Json<VerifyAnswerRequest>,
) -> Result<Json<VerifyAnswerResponse>, QueryError> {
    let is_correct = queries::verify_answer(
        state.store.as_ref(),
        QuestionId(request.question_id),
        request.selected_option_index,
    )
    .await?;

    Ok(Json(VerifyAnswerResponse { is_correct }))
}
