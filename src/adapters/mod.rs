//! Adapters - Infrastructure implementations of ports.
//!
//! `memory` holds the in-memory repositories and the bundled sample catalog;
//! `http` exposes them as a REST API.

pub mod http;
pub mod memory;
