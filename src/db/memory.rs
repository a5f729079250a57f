use super::{DocumentStore, INTERNAL_ID_FIELD, StoreError};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Document store kept in process memory.
///
/// Mirrors the driver behaviour the API relies on: inserts get an `_id`
/// when they lack one, exclusion projections (`{field: 0}`) are honoured and
/// a positive limit truncates results (zero or less means no limit). Every operation fails with
/// [`StoreError::Closed`] once [`DocumentStore::close`] has been called.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
    closed: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.closed.load(Ordering::Acquire) {
            Err(StoreError::Closed)
        } else {
            Ok(())
        }
    }
}

fn is_excluded(value: &Bson) -> bool {
    match value {
        Bson::Int32(v) => *v == 0,
        Bson::Int64(v) => *v == 0,
        Bson::Boolean(v) => !*v,
        _ => false,
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<Option<Bson>, StoreError> {
        self.ensure_open()?;

        let id = match document.get(INTERNAL_ID_FIELD) {
            Some(id) => id.clone(),
            None => {
                let id = Bson::ObjectId(ObjectId::new());
                document.insert(INTERNAL_ID_FIELD, id.clone());
                id
            }
        };

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(Some(id))
    }

    async fn find_all(
        &self,
        collection: &str,
        projection: Document,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        self.ensure_open()?;

        let excluded: Vec<&str> = projection
            .iter()
            .filter(|(_, value)| is_excluded(value))
            .map(|(key, _)| key.as_str())
            .collect();
        let limit = usize::try_from(limit)
            .ok()
            .filter(|limit| *limit > 0)
            .unwrap_or(usize::MAX);

        let collections = self.collections.read().await;
        let documents: Vec<Document> = collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .take(limit)
                    .map(|document| {
                        let mut projected = document.clone();
                        for key in &excluded {
                            projected.remove(*key);
                        }
                        projected
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(documents)
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::exclude_internal_id;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn test_insert_assigns_internal_id() {
        let store = MemoryStore::new();

        let id = store
            .insert_one("things", doc! { "name": "a" })
            .await
            .unwrap();

        assert!(matches!(id, Some(Bson::ObjectId(_))));
    }

    #[tokio::test]
    async fn test_find_all_applies_projection_and_limit() {
        let store = MemoryStore::new();
        for n in 0..5 {
            store.insert_one("things", doc! { "n": n }).await.unwrap();
        }

        let all = store
            .find_all("things", exclude_internal_id(), 10)
            .await
            .unwrap();
        assert_eq!(all.len(), 5);
        assert!(all.iter().all(|d| !d.contains_key("_id")));

        let capped = store
            .find_all("things", exclude_internal_id(), 3)
            .await
            .unwrap();
        assert_eq!(capped.len(), 3);

        let unprojected = store.find_all("things", Document::new(), 1).await.unwrap();
        assert!(unprojected[0].contains_key("_id"));
    }

    #[tokio::test]
    async fn test_non_positive_limit_is_unbounded() {
        let store = MemoryStore::new();
        for n in 0..4 {
            store.insert_one("things", doc! { "n": n }).await.unwrap();
        }

        let unlimited = store
            .find_all("things", exclude_internal_id(), 0)
            .await
            .unwrap();
        assert_eq!(unlimited.len(), 4);

        let negative = store
            .find_all("things", exclude_internal_id(), -1)
            .await
            .unwrap();
        assert_eq!(negative.len(), 4);
    }

    #[tokio::test]
    async fn test_unknown_collection_is_empty() {
        let store = MemoryStore::new();
        let documents = store
            .find_all("missing", exclude_internal_id(), 10)
            .await
            .unwrap();
        assert!(documents.is_empty());
    }

    #[tokio::test]
    async fn test_closed_store_rejects_operations() {
        let store = MemoryStore::new();
        store.close().await;
        store.close().await;

        assert!(matches!(
            store.insert_one("things", doc! {}).await,
            Err(StoreError::Closed)
        ));
        assert!(matches!(
            store.find_all("things", exclude_internal_id(), 1).await,
            Err(StoreError::Closed)
        ));
    }
}
