use async_trait::async_trait;
use mongodb::bson::{Bson, Document, doc};

#[cfg(test)]
use mockall::automock;

/// MongoDB-backed implementation of [`DocumentStore`].
pub mod mongo;

/// In-memory [`DocumentStore`] used as a substitute store in tests.
#[cfg(test)]
pub mod memory;

pub use mongo::MongoStore;

/// Collection holding every recorded status check.
pub const STATUS_CHECKS_COLLECTION: &str = "status_checks";

/// Upper bound on documents returned by a single [`DocumentStore::find_all`]
/// call from the API. Anything beyond it is dropped without notice.
pub const MAX_STATUS_CHECKS: i64 = 1000;

/// Name of the identifier field the document store assigns on insert.
pub const INTERNAL_ID_FIELD: &str = "_id";

/// Errors surfaced by a document store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to connect to MongoDB: {0}")]
    Connect(#[source] mongodb::error::Error),

    #[error("MongoDB liveness check failed: {0}")]
    Ping(#[source] mongodb::error::Error),

    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),

    #[error("connection to the document store is closed")]
    Closed,
}

/// Projection that hides the store-assigned identifier from read results.
pub fn exclude_internal_id() -> Document {
    doc! { INTERNAL_ID_FIELD: 0 }
}

/// # Document Store Gateway
///
/// Append-only persistence used by the API layer. Implementations perform
/// network I/O and may fail regardless of input validity.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Appends one document to `collection`.
    ///
    /// Returns `Ok(None)` when the store accepted the call but assigned no
    /// identifier, meaning the write did not take effect.
    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<Option<Bson>, StoreError>;

    /// Returns every document in `collection` with `projection` applied,
    /// truncated to at most `limit` documents.
    async fn find_all(
        &self,
        collection: &str,
        projection: Document,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError>;

    /// Releases the underlying connection. Calling it more than once is a no-op.
    async fn close(&self);
}
