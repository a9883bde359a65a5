//! InMemoryStore - HashMap-backed record store for tests, demos and seeding.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use super::{RecordStore, StoreError};
use crate::models::Record;

type Collections = HashMap<&'static str, BTreeMap<i64, Vec<u8>>>;

/// In-memory record store backed by a HashMap of collections.
///
/// Records are kept serialized, one id-ordered map per collection.
/// Clone-friendly via Arc: clones share storage.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    storage: Arc<RwLock<Collections>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held in `M`'s collection.
    pub fn len<M: Record>(&self) -> Result<usize, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(storage.get(M::COLLECTION).map_or(0, BTreeMap::len))
    }
}

impl RecordStore for InMemoryStore {
    fn get_record<M: Record>(&self, id: i64) -> Result<Option<M>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;

        match storage.get(M::COLLECTION).and_then(|records| records.get(&id)) {
            Some(bytes) => Ok(Some(serde_json::from_slice(bytes)?)),
            None => Ok(None),
        }
    }

    fn list_records<M: Record>(&self) -> Result<Vec<M>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;

        let Some(records) = storage.get(M::COLLECTION) else {
            return Ok(Vec::new());
        };

        let mut results = Vec::with_capacity(records.len());
        for bytes in records.values() {
            results.push(serde_json::from_slice(bytes)?);
        }
        Ok(results)
    }

    fn upsert<M: Record>(&self, record: &M) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(record)?;
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;

        storage
            .entry(M::COLLECTION)
            .or_default()
            .insert(record.id(), bytes);
        Ok(())
    }

    fn insert<M: Record>(&self, record: &M) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(record)?;
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;

        let records = storage.entry(M::COLLECTION).or_default();
        if records.contains_key(&record.id()) {
            return Err(StoreError::Duplicate {
                collection: M::COLLECTION.to_string(),
                id: record.id(),
            });
        }
        records.insert(record.id(), bytes);
        Ok(())
    }

    fn delete<M: Record>(&self, id: i64) -> Result<bool, StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;

        Ok(storage
            .get_mut(M::COLLECTION)
            .is_some_and(|records| records.remove(&id).is_some()))
    }
}
