//! Read-side query handlers: input validation over the store's lookups.
//! These never touch the provider; they serve whatever the last successful
//! ingestion pass left behind.

use crate::db::TriviaStore;
use crate::error::QueryError;
use crate::model::{Category, CategoryId, Question, QuestionId};

/// Upper bound on questions served per request.
pub const MAX_QUESTION_COUNT: u32 = 10;

/// Count used when the caller does not specify one.
pub const DEFAULT_QUESTION_COUNT: u32 = 5;

pub async fn get_categories(store: &dyn TriviaStore) -> Result<Vec<Category>, QueryError> {
    Ok(store.get_categories().await?)
}

pub async fn get_random_questions(
    store: &dyn TriviaStore,
    count: u32,
    category_id: Option<CategoryId>,
) -> Result<Vec<Question>, QueryError> {
    if count == 0 || count > MAX_QUESTION_COUNT {
        return Err(QueryError::InvalidCount);
    }

    if let Some(id) = category_id {
        if !store.category_exists(id).await? {
            return Err(QueryError::UnknownCategory);
        }
    }

    Ok(store.get_random_questions(count, category_id).await?)
}

pub async fn verify_answer(
    store: &dyn TriviaStore,
    question_id: QuestionId,
    selected_option_index: i64,
) -> Result<bool, QueryError> {
    let Some(question) = store.get_question(question_id).await? else {
        return Err(QueryError::UnknownQuestion);
    };

    let index =
        usize::try_from(selected_option_index).map_err(|_| QueryError::InvalidOptionIndex)?;

    question
        .evaluate_answer(index)
        .ok_or(QueryError::InvalidOptionIndex)
}
