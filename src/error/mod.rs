mod ingest;
mod query;
mod source;
mod store;

pub use ingest::IngestError;
pub use query::QueryError;
pub use source::SourceError;
pub use store::StoreError;
