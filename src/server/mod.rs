//! HTTP read API: thin translation between route shapes and the query
//! handlers. The ingestion pipeline never goes through this layer.

pub mod router;
pub mod routes;

pub use router::{AppState, api_router};
