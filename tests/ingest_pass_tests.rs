//! End-to-end ingestion passes against a real SQLite store, with the
//! provider faked at the `TriviaSource` seam.

use async_trait::async_trait;
use quizbank::db::{self, SqliteTriviaStore, TriviaStore};
use quizbank::error::{IngestError, SourceError};
use quizbank::ingest::IngestionWorkflow;
use quizbank::model::{Category, CategoryId, NewQuestion};
use quizbank::source::TriviaSource;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio_util::sync::CancellationToken;

fn temp_db_path(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut path = std::env::temp_dir();
    path.push(format!(
        "quizbank-ingest-{tag}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));
    path
}

fn cleanup(path: &PathBuf) {
    let wal = PathBuf::from(format!("{}-wal", path.to_string_lossy()));
    let shm = PathBuf::from(format!("{}-shm", path.to_string_lossy()));
    let _ = fs::remove_file(&wal);
    let _ = fs::remove_file(&shm);
    let _ = fs::remove_file(path);
}

struct FakeSource {
    categories: Vec<Category>,
    totals: HashMap<CategoryId, i64>,
    /// Categories whose fetches fail fatally.
    poisoned: Vec<CategoryId>,
}

impl FakeSource {
    fn new(entries: Vec<(Category, i64)>) -> Self {
        let totals = entries
            .iter()
            .map(|(category, total)| (category.id, *total))
            .collect();
        Self {
            categories: entries.into_iter().map(|(category, _)| category).collect(),
            totals,
            poisoned: Vec::new(),
        }
    }

    fn poison(mut self, id: CategoryId) -> Self {
        self.poisoned.push(id);
        self
    }
}

#[async_trait]
impl TriviaSource for FakeSource {
    async fn list_categories(&self) -> Result<Vec<Category>, SourceError> {
        Ok(self.categories.clone())
    }

    async fn category_question_count(
        &self,
        category_id: CategoryId,
    ) -> Result<i64, SourceError> {
        Ok(self.totals.get(&category_id).copied().unwrap_or(0))
    }

    async fn fetch_questions(
        &mut self,
        amount: u32,
        category_id: CategoryId,
        _cancel: &CancellationToken,
    ) -> Result<Vec<NewQuestion>, SourceError> {
        if self.poisoned.contains(&category_id) {
            return Err(SourceError::TokenExhausted);
        }

        Ok((0..amount)
            .map(|n| NewQuestion {
                text: format!("question-{category_id}-{n}"),
                correct_answer: "right".to_string(),
                options: vec!["right".to_string(), "wrong".to_string()],
                difficulty: "easy".to_string(),
            })
            .collect())
    }
}

fn category(id: i64, name: &str) -> Category {
    Category {
        id: CategoryId(id),
        name: name.to_string(),
    }
}

#[tokio::test]
async fn a_full_pass_populates_every_category() {
    let path = temp_db_path("full");
    let pool = db::connect(&format!("sqlite:{}", path.display()))
        .await
        .expect("connect");
    let store = SqliteTriviaStore::new(pool);

    let source = FakeSource::new(vec![
        (category(1, "History"), 2),
        (category(7, "Science"), 3),
    ]);
    let mut workflow = IngestionWorkflow::new(source, store.clone(), 10);

    let report = workflow
        .run(&CancellationToken::new())
        .await
        .expect("pass succeeds");

    assert_eq!(report.categories, 2);
    assert_eq!(report.questions, 5);

    let categories = store.get_categories().await.expect("categories");
    assert_eq!(categories.len(), 2);

    let history = store
        .get_random_questions(10, Some(CategoryId(1)))
        .await
        .expect("history questions");
    let science = store
        .get_random_questions(10, Some(CategoryId(7)))
        .await
        .expect("science questions");
    assert_eq!(history.len(), 2);
    assert_eq!(science.len(), 3);

    cleanup(&path);
}

#[tokio::test]
async fn reruns_replace_the_previous_import() {
    let path = temp_db_path("rerun");
    let pool = db::connect(&format!("sqlite:{}", path.display()))
        .await
        .expect("connect");
    let store = SqliteTriviaStore::new(pool);

    let source = FakeSource::new(vec![(category(1, "History"), 4)]);
    let mut workflow = IngestionWorkflow::new(source, store.clone(), 10);
    workflow
        .run(&CancellationToken::new())
        .await
        .expect("first pass");

    // Second pass sees a smaller provider and a renamed category.
    let source = FakeSource::new(vec![(category(1, "World History"), 2)]);
    let mut workflow = IngestionWorkflow::new(source, store.clone(), 10);
    workflow
        .run(&CancellationToken::new())
        .await
        .expect("second pass");

    let categories = store.get_categories().await.expect("categories");
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "World History");

    let questions = store
        .get_random_questions(10, Some(CategoryId(1)))
        .await
        .expect("questions");
    assert_eq!(questions.len(), 2);

    cleanup(&path);
}

#[tokio::test]
async fn a_mid_pass_failure_keeps_earlier_categories_and_drops_the_rest() {
    let path = temp_db_path("partial");
    let pool = db::connect(&format!("sqlite:{}", path.display()))
        .await
        .expect("connect");
    let store = SqliteTriviaStore::new(pool);

    let source = FakeSource::new(vec![
        (category(1, "History"), 2),
        (category(7, "Science"), 3),
        (category(4, "Sports"), 4),
    ])
    .poison(CategoryId(7));
    let mut workflow = IngestionWorkflow::new(source, store.clone(), 10);

    let err = workflow
        .run(&CancellationToken::new())
        .await
        .expect_err("token exhaustion is fatal");
    assert!(matches!(err, IngestError::Category { id, .. } if id == CategoryId(7)));

    // History committed; Science rolled back; Sports never started.
    let categories = store.get_categories().await.expect("categories");
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].id, CategoryId(1));

    let questions = store.get_random_questions(10, None).await.expect("questions");
    assert_eq!(questions.len(), 2);
    assert!(questions.iter().all(|q| q.category_id == CategoryId(1)));

    cleanup(&path);
}
