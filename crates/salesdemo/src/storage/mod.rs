//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository trait
//! defined in `salesdemo_core::storage`. Only the in-memory backend exists;
//! records live for as long as the server process.

pub mod inmemory;

pub use inmemory::InMemoryRepository;
