//! The persistence boundary for trivia data.
//!
//! Writes happen under an explicit unit of work ([`StoreTx`]) so the
//! ingestion workflow can scope one transaction per category. Dropping an
//! uncommitted unit of work rolls it back.

use crate::db::models::{CategoryRow, QuestionRow};
use crate::error::StoreError;
use crate::model::{Category, CategoryId, NewQuestion, Question, QuestionId};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};

/// Persistence contract consumed by the ingestion workflow and the read-side
/// query handlers.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// Removes all categories and questions, resetting identity, so the next
    /// pass repopulates from a clean baseline.
    async fn truncate(&self) -> Result<(), StoreError>;

    /// Opens a transactional unit of work for one category's writes.
    async fn begin(&self) -> Result<Box<dyn StoreTx>, StoreError>;

    async fn get_categories(&self) -> Result<Vec<Category>, StoreError>;

    /// Random sample of questions, optionally restricted to one category.
    async fn get_random_questions(
        &self,
        count: u32,
        category_id: Option<CategoryId>,
    ) -> Result<Vec<Question>, StoreError>;

    async fn get_question(&self, id: QuestionId) -> Result<Option<Question>, StoreError>;

    async fn category_exists(&self, id: CategoryId) -> Result<bool, StoreError>;
}

/// One category's transactional scope. Commit by value; anything not
/// committed rolls back when the value is dropped.
#[async_trait]
pub trait StoreTx: Send {
    /// Inserts the category under its provider-assigned id, or refreshes its
    /// name if the id already exists. Idempotent under identical input.
    async fn upsert_category(&mut self, category: &Category) -> Result<Category, StoreError>;

    /// Bulk-inserts a batch of questions; returns the inserted count. Empty
    /// input is a no-op returning 0. Does not deduplicate — a truncated
    /// baseline is assumed.
    async fn insert_questions(
        &mut self,
        category_id: CategoryId,
        questions: &[NewQuestion],
    ) -> Result<u64, StoreError>;

    async fn commit(self: Box<Self>) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct SqliteTriviaStore {
    pool: SqlitePool,
}

impl SqliteTriviaStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for SqliteTriviaStore {
    async fn truncate(&self) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        // Questions first so the category FK never dangles mid-transaction.
        sqlx::query("DELETE FROM questions")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM categories")
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn begin(&self) -> Result<Box<dyn StoreTx>, StoreError> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(SqliteStoreTx { tx }))
    }

    async fn get_categories(&self) -> Result<Vec<Category>, StoreError> {
        let rows: Vec<CategoryRow> =
            sqlx::query_as("SELECT id, name, created_at FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(CategoryRow::into_category).collect())
    }

    async fn get_random_questions(
        &self,
        count: u32,
        category_id: Option<CategoryId>,
    ) -> Result<Vec<Question>, StoreError> {
        let rows: Vec<QuestionRow> = match category_id {
            Some(id) => {
                sqlx::query_as(
                    "SELECT id, category_id, question, correct_answer, options, difficulty, created_at \
                     FROM questions WHERE category_id = ? ORDER BY RANDOM() LIMIT ?",
                )
                .bind(id.0)
                .bind(i64::from(count))
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as(
                    "SELECT id, category_id, question, correct_answer, options, difficulty, created_at \
                     FROM questions ORDER BY RANDOM() LIMIT ?",
                )
                .bind(i64::from(count))
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.into_iter().map(QuestionRow::into_question).collect()
    }

    async fn get_question(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        let row: Option<QuestionRow> = sqlx::query_as(
            "SELECT id, category_id, question, correct_answer, options, difficulty, created_at \
             FROM questions WHERE id = ?",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await?;

        row.map(QuestionRow::into_question).transpose()
    }

    async fn category_exists(&self, id: CategoryId) -> Result<bool, StoreError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?)")
                .bind(id.0)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}

pub struct SqliteStoreTx {
    tx: Transaction<'static, Sqlite>,
}

#[async_trait]
impl StoreTx for SqliteStoreTx {
    async fn upsert_category(&mut self, category: &Category) -> Result<Category, StoreError> {
        let row: CategoryRow = sqlx::query_as(
            "INSERT INTO categories (id, name, created_at) VALUES (?, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET name = excluded.name \
             RETURNING id, name, created_at",
        )
        .bind(category.id.0)
        .bind(&category.name)
        .bind(Utc::now())
        .fetch_one(&mut *self.tx)
        .await?;

        Ok(row.into_category())
    }

    async fn insert_questions(
        &mut self,
        category_id: CategoryId,
        questions: &[NewQuestion],
    ) -> Result<u64, StoreError> {
        if questions.is_empty() {
            return Ok(0);
        }

        let now = Utc::now();
        let mut inserted = 0u64;
        for question in questions {
            let options = serde_json::to_string(&question.options)?;
            inserted += sqlx::query(
                "INSERT INTO questions \
                 (category_id, question, correct_answer, options, difficulty, created_at) \
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(category_id.0)
            .bind(&question.text)
            .bind(&question.correct_answer)
            .bind(options)
            .bind(&question.difficulty)
            .bind(now)
            .execute(&mut *self.tx)
            .await?
            .rows_affected();
        }

        Ok(inserted)
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        self.tx.commit().await?;
        Ok(())
    }
}
