use crate::db::TriviaStore;
use crate::server::routes;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TriviaStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }
}

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/categories", get(routes::get_categories))
        .route("/api/questions", get(routes::get_random_questions))
        .route("/api/questions/verify", post(routes::verify_answer))
        .with_state(state)
}
