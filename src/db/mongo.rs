use super::{DocumentStore, StoreError};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Bson, Document, doc};
use mongodb::{Client, Collection, Database};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info};

/// # MongoDB Store
///
/// Holds one long-lived [`Client`] and the selected [`Database`]. The client
/// pools connections internally, so a single instance is shared by every
/// request handler.
pub struct MongoStore {
    client: Client,
    database: Database,
    closed: AtomicBool,
}

impl MongoStore {
    /// Connects to `uri`, selects `database_name` and verifies the connection
    /// with an admin `ping`.
    ///
    /// # Errors
    /// - [`StoreError::Connect`] if the connection string is invalid or the
    ///   client cannot be built
    /// - [`StoreError::Ping`] if the server does not answer the liveness check
    ///
    /// Both are logged before being returned; callers are expected to abort
    /// startup.
    pub async fn connect(uri: &str, database_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await.map_err(|e| {
            error!(error = %e, "failed to connect to MongoDB");
            StoreError::Connect(e)
        })?;
        let database = client.database(database_name);
        info!(database = database_name, "connected to MongoDB");

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| {
                error!(error = %e, "MongoDB liveness check failed");
                StoreError::Ping(e)
            })?;
        info!("MongoDB connection verified");

        Ok(Self {
            client,
            database,
            closed: AtomicBool::new(false),
        })
    }

    fn collection(&self, name: &str) -> Result<Collection<Document>, StoreError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(StoreError::Closed);
        }
        Ok(self.database.collection(name))
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<Option<Bson>, StoreError> {
        let result = self.collection(collection)?.insert_one(document).await?;

        match result.inserted_id {
            Bson::Null | Bson::Undefined => Ok(None),
            id => Ok(Some(id)),
        }
    }

    async fn find_all(
        &self,
        collection: &str,
        projection: Document,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        let cursor = self
            .collection(collection)?
            .find(doc! {})
            .projection(projection)
            .limit(limit)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn close(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        self.client.clone().shutdown().await;
        info!("MongoDB connection closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MAX_STATUS_CHECKS, exclude_internal_id};
    use std::env;

    /// Connects to the MongoDB named by `MONGO_URL`, or skips when unset.
    async fn test_store() -> Option<MongoStore> {
        dotenv::dotenv().ok();
        let uri = env::var("MONGO_URL").ok()?;
        let db_name = env::var("DB_NAME_TEST").unwrap_or_else(|_| "status_checks_test".to_string());
        MongoStore::connect(&uri, &db_name).await.ok()
    }

    #[tokio::test]
    async fn test_connect_rejects_invalid_uri() {
        let result = MongoStore::connect("not-a-mongodb-uri", "test").await;
        assert!(matches!(result, Err(StoreError::Connect(_))));
    }

    #[tokio::test]
    async fn test_connect_fails_liveness_check_without_server() {
        // Nothing listens on port 1; server selection gives up quickly
        let result =
            MongoStore::connect("mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200", "test").await;
        assert!(matches!(result, Err(StoreError::Ping(_))));
    }

    #[tokio::test]
    #[ignore] // Requires a running MongoDB reachable through MONGO_URL
    async fn test_insert_and_find_all_against_mongodb() {
        let Some(store) = test_store().await else {
            return;
        };
        let collection = "status_checks_gateway_test";

        let inserted = store
            .insert_one(collection, doc! { "id": "gateway-test", "client_name": "gw" })
            .await
            .expect("insert should succeed");
        assert!(inserted.is_some(), "MongoDB always assigns an _id");

        let documents = store
            .find_all(collection, exclude_internal_id(), MAX_STATUS_CHECKS)
            .await
            .expect("find should succeed");
        assert!(documents.iter().all(|d| !d.contains_key("_id")));
        assert!(documents.iter().any(|d| matches!(d.get_str("id"), Ok("gateway-test"))));

        // Cleanup
        store
            .database
            .collection::<Document>(collection)
            .delete_many(doc! { "id": "gateway-test" })
            .await
            .expect("Failed to clean up test data");

        store.close().await;
        store.close().await;
        assert!(matches!(
            store.find_all(collection, exclude_internal_id(), 1).await,
            Err(StoreError::Closed)
        ));
    }
}
