//! In-memory adapters
//!
//! - **InMemoryRepository** - `RecordRepository` over an ordered `Vec`
//! - **fixtures** - Bundled sample catalog used to seed a fresh server

pub mod fixtures;
mod in_memory_repository;

pub use fixtures::sample_seed;
pub use in_memory_repository::InMemoryRepository;
