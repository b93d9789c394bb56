//! Record repository port.
//!
//! One generic contract for persisting every catalog record kind. The HTTP
//! layer holds one `Arc<dyn RecordRepository<T>>` per kind.

use crate::domain::foundation::{DomainError, Record};
use async_trait::async_trait;

/// Repository port for a single record kind.
///
/// Implementations must preserve insertion order for `list`.
#[async_trait]
pub trait RecordRepository<T: Record>: Send + Sync {
    /// All records, in insertion order.
    async fn list(&self) -> Result<Vec<T>, DomainError>;

    /// Find a record by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &T::Id) -> Result<Option<T>, DomainError>;

    /// Check if a record exists.
    async fn exists(&self, id: &T::Id) -> Result<bool, DomainError>;

    /// Save a new record.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if a record with the same id is stored
    async fn save(&self, record: &T) -> Result<(), DomainError>;

    /// Replace an existing record.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no record has the id
    async fn update(&self, record: &T) -> Result<(), DomainError>;

    /// Delete a record.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no record has the id
    async fn delete(&self, id: &T::Id) -> Result<(), DomainError>;
}
