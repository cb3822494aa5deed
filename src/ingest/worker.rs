//! Background worker that (re)loads the question bank.
//!
//! Runs one pass immediately, then repeats on the configured interval. A
//! failed pass is logged and retried at the next tick — the read API keeps
//! serving whatever was last imported successfully.

use crate::config::TriviaConfig;
use crate::db::SqliteTriviaStore;
use crate::error::IngestError;
use crate::ingest::IngestionWorkflow;
use crate::source::{OpenTriviaApi, OpenTriviaSource};
use sqlx::SqlitePool;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

pub fn spawn(pool: SqlitePool, cfg: TriviaConfig, cancel: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(run(pool, cfg, cancel))
}

async fn run(pool: SqlitePool, cfg: TriviaConfig, cancel: CancellationToken) {
    loop {
        // A fresh adapter per pass: session tokens are scoped to one pass
        // and must not leak into the next.
        let source = OpenTriviaSource::new(OpenTriviaApi::new(&cfg.api_base_url));
        let store = SqliteTriviaStore::new(pool.clone());
        let mut workflow =
            IngestionWorkflow::new(source, store, cfg.max_questions_per_category);

        match workflow.run(&cancel).await {
            Ok(report) => info!(
                categories = report.categories,
                questions = report.questions,
                "trivia ingestion pass completed"
            ),
            Err(IngestError::Cancelled) => {
                info!("trivia ingestion cancelled");
                return;
            }
            Err(err) => error!(error = %err, "trivia ingestion pass failed"),
        }

        if cfg.reload_interval_secs == 0 {
            return;
        }

        tokio::select! {
            () = cancel.cancelled() => return,
            () = sleep(Duration::from_secs(cfg.reload_interval_secs)) => {}
        }
    }
}
