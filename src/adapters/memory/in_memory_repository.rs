//! In-Memory Record Repository
//!
//! Stores records of one kind in memory, in insertion order.
//! Backs the HTTP API; nothing is persisted across restarts.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, Record};
use crate::ports::RecordRepository;

/// In-memory storage for one record kind
#[derive(Debug)]
pub struct InMemoryRepository<T: Record> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T: Record> Clone for InMemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T: Record> InMemoryRepository<T> {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a repository pre-filled with records (kept in the given order)
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Get the number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the repository holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> RecordRepository<T> for InMemoryRepository<T> {
    async fn list(&self) -> Result<Vec<T>, DomainError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: &T::Id) -> Result<Option<T>, DomainError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn exists(&self, id: &T::Id) -> Result<bool, DomainError> {
        let records = self.records.read().await;
        Ok(records.iter().any(|r| r.id() == id))
    }

    async fn save(&self, record: &T) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(DomainError::already_exists(T::RESOURCE, record.id()));
        }
        records.push(record.clone());
        Ok(())
    }

    async fn update(&self, record: &T) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| DomainError::not_found(T::RESOURCE, record.id()))?;
        *slot = record.clone();
        Ok(())
    }

    async fn delete(&self, id: &T::Id) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| DomainError::not_found(T::RESOURCE, id))?;
        records.remove(index);
        Ok(())
    }
}
