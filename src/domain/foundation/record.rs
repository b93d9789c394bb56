//! The `Record` trait shared by every catalog entity.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A domain record addressable by a typed identifier.
///
/// Implemented by every entity the catalog and the repositories hold, so
/// lookups and CRUD plumbing can be written once.
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Identifier type of this record.
    type Id: Clone
        + Eq
        + fmt::Display
        + fmt::Debug
        + FromStr<Err = ValidationError>
        + Send
        + Sync
        + 'static;

    /// Human-readable resource name used in error messages ("Policy").
    const RESOURCE: &'static str;

    /// Returns the record's identifier.
    fn id(&self) -> &Self::Id;

    /// Replaces the record's identifier.
    fn set_id(&mut self, id: Self::Id);

    /// Generates an identifier for a record created without one.
    fn generate_id() -> Self::Id;
}

/// Returns the first record whose id equals `id`.
pub fn find_by_id<'a, T: Record>(records: &'a [T], id: &T::Id) -> Option<&'a T> {
    records.iter().find(|r| r.id() == id)
}

/// Implements [`Record`] for an entity with an `id` field.
macro_rules! impl_record {
    ($ty:ty, $id:ty, $resource:literal) => {
        impl $crate::domain::foundation::Record for $ty {
            type Id = $id;
            const RESOURCE: &'static str = $resource;

            fn id(&self) -> &Self::Id {
                &self.id
            }

            fn set_id(&mut self, id: Self::Id) {
                self.id = id;
            }

            fn generate_id() -> Self::Id {
                <$id>::generate()
            }
        }
    };
}

pub(crate) use impl_record;
