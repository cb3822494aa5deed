use crate::error::StoreError;
use crate::model::{Category, CategoryId, Question, QuestionId};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct CategoryRow {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl CategoryRow {
    pub fn into_category(self) -> Category {
        Category {
            id: CategoryId(self.id),
            name: self.name,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct QuestionRow {
    pub id: i64,
    pub category_id: i64,
    pub question: String,
    pub correct_answer: String,
    /// JSON-encoded ordered option list.
    pub options: String,
    pub difficulty: String,
    pub created_at: DateTime<Utc>,
}

impl QuestionRow {
    pub fn into_question(self) -> Result<Question, StoreError> {
        let options: Vec<String> = serde_json::from_str(&self.options)?;
        Ok(Question {
            id: QuestionId(self.id),
            category_id: CategoryId(self.category_id),
            text: self.question,
            correct_answer: self.correct_answer,
            options,
            difficulty: self.difficulty,
        })
    }
}
