use super::{SourceError, StoreError};
use crate::model::{Category, CategoryId};
use thiserror::Error as ThisError;

/// Fatal conditions that abort an ingestion pass. Categories committed before
/// the failure remain in the store; the pass itself is never retried here —
/// rerunning is the scheduler's decision.
#[derive(Debug, ThisError)]
pub enum IngestError {
    #[error("store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("trivia source failed: {0}")]
    Source(#[from] SourceError),

    /// A fatal error raised while processing one category, annotated with the
    /// category identity for operator diagnosis.
    #[error("category {id} ({name}): {source}")]
    Category {
        id: CategoryId,
        name: String,
        #[source]
        source: Box<IngestError>,
    },

    #[error("ingestion cancelled")]
    Cancelled,
}

impl IngestError {
    /// Attaches category context to a fatal error. Cancellation stays as-is
    /// and already-annotated errors are not wrapped twice.
    pub(crate) fn for_category(self, category: &Category) -> Self {
        match self {
            err @ (IngestError::Cancelled | IngestError::Category { .. }) => err,
            IngestError::Source(SourceError::Cancelled) => IngestError::Cancelled,
            other => IngestError::Category {
                id: category.id,
                name: category.name.clone(),
                source: Box::new(other),
            },
        }
    }
}
