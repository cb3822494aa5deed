//! Domain model shared by the ingestion pipeline and the read path.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider-assigned category identifier, preserved verbatim in the store so
/// repeated ingestion passes map to the same category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize,
)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Store-assigned question identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize,
)]
#[serde(transparent)]
pub struct QuestionId(pub i64);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// A question as fetched from the provider, before it has a store identity.
/// `options` already contains the correct answer at a shuffled position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub text: String,
    pub correct_answer: String,
    pub options: Vec<String>,
    pub difficulty: String,
}

/// A persisted question. Never mutated after insert; removed only when the
/// store is truncated at the start of the next ingestion pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub category_id: CategoryId,
    pub text: String,
    pub correct_answer: String,
    pub options: Vec<String>,
    pub difficulty: String,
}

impl Question {
    /// Evaluates a selected option index. `None` means the index is out of
    /// range; otherwise the result says whether the option is the correct
    /// answer.
    pub fn evaluate_answer(&self, selected: usize) -> Option<bool> {
        self.options
            .get(selected)
            .map(|option| *option == self.correct_answer)
    }
}
