//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RecordRepository` - Generic persistence for catalog records

mod record_repository;

pub use record_repository::RecordRepository;
