//! In-memory [`RecordStore`] used by tests and demos.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{Document, Filter, RecordStore, StoreError};

type Collections = HashMap<String, Vec<Document>>;

/// Mutex-guarded document store keeping every collection in process
/// memory.
///
/// Insertion order is the store-native order returned by
/// `find_many`. The guard is never held across an await point.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<Collections>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Collections>, StoreError> {
        self.collections
            .lock()
            .map_err(|_| StoreError::backend("store mutex poisoned"))
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.lock()?;
        Ok(collections
            .get(collection)
            .and_then(|documents| documents.iter().find(|doc| filter.matches(doc)).cloned()))
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.lock()?;
        Ok(collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|doc| filter.matches(doc))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), StoreError> {
        let mut collections = self.lock()?;
        collections
            .entry(collection.to_owned())
            .or_default()
            .push(document);
        Ok(())
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        document: Document,
    ) -> Result<(), StoreError> {
        let mut collections = self.lock()?;
        if let Some(documents) = collections.get_mut(collection)
            && let Some(slot) = documents.iter_mut().find(|doc| filter.matches(doc))
        {
            *slot = document;
        }
        Ok(())
    }

    async fn delete_one(&self, collection: &str, filter: &Filter) -> Result<(), StoreError> {
        let mut collections = self.lock()?;
        if let Some(documents) = collections.get_mut(collection)
            && let Some(position) = documents.iter().position(|doc| filter.matches(doc))
        {
            documents.remove(position);
        }
        Ok(())
    }
}
