//! Ingestion orchestration: one pass wipes the store and repopulates it from
//! the trivia provider, one transactional scope per category.

pub mod worker;

use crate::db::TriviaStore;
use crate::error::IngestError;
use crate::model::Category;
use crate::source::TriviaSource;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Maximum question count requested per single provider fetch call.
pub const MAX_BATCH_SIZE: u32 = 50;

/// Summary of one completed pass, for operator logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub categories: usize,
    pub questions: u64,
}

/// Drives one full reload: truncate, discover categories and their volumes,
/// then import each category sequentially under its own transaction.
pub struct IngestionWorkflow<S, R> {
    source: S,
    store: R,
    max_per_category: u32,
}

impl<S: TriviaSource, R: TriviaStore> IngestionWorkflow<S, R> {
    pub fn new(source: S, store: R, max_per_category: u32) -> Self {
        Self {
            source,
            store,
            max_per_category,
        }
    }

    pub async fn run(&mut self, cancel: &CancellationToken) -> Result<IngestReport, IngestError> {
        // The pass reloads the full dataset every time; incremental updates
        // are out of scope. There is no safe partial state to continue from
        // if the wipe fails.
        self.store.truncate().await?;

        let categories = self.source.list_categories().await?;

        let mut totals = Vec::with_capacity(categories.len());
        for category in &categories {
            if cancel.is_cancelled() {
                return Err(IngestError::Cancelled);
            }

            let total = self.source.category_question_count(category.id).await?;
            info!(
                category = %category.id,
                name = %category.name,
                total,
                "category discovered"
            );
            totals.push(total);
        }

        let mut report = IngestReport::default();
        for (category, total) in categories.iter().zip(totals) {
            if cancel.is_cancelled() {
                return Err(IngestError::Cancelled);
            }

            let imported = self
                .import_category(category, total, cancel)
                .await
                .map_err(|err| err.for_category(category))?;

            report.categories += 1;
            report.questions += imported;
        }

        Ok(report)
    }

    /// Imports one category inside its own transaction. Earlier categories
    /// stay committed even if this one fails, which bounds the blast radius
    /// of a mid-pass failure.
    async fn import_category(
        &mut self,
        category: &Category,
        total: i64,
        cancel: &CancellationToken,
    ) -> Result<u64, IngestError> {
        let mut tx = self.store.begin().await?;
        tx.upsert_category(category).await?;

        let target = u64::from(self.max_per_category).min(u64::try_from(total).unwrap_or(0));
        let mut inserted = 0u64;

        while inserted < target {
            if cancel.is_cancelled() {
                return Err(IngestError::Cancelled);
            }

            let remaining = target - inserted;
            let amount = MAX_BATCH_SIZE.min(u32::try_from(remaining).unwrap_or(u32::MAX));
            let questions = self
                .source
                .fetch_questions(amount, category.id, cancel)
                .await?;

            if questions.is_empty() {
                warn!(
                    category = %category.id,
                    name = %category.name,
                    inserted,
                    target,
                    "provider exhausted before target; keeping what we have"
                );
                break;
            }

            inserted += tx.insert_questions(category.id, &questions).await?;
            debug!(
                category = %category.id,
                inserted,
                target,
                "insert progress"
            );
        }

        tx.commit().await?;
        Ok(inserted)
    }
}
