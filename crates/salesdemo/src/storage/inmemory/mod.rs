//! In-memory storage backend.
//!
//! Sales are kept in a `Vec` wrapped in `Arc<RwLock<_>>`, so insertion order
//! is the listing order and clones of the repository share one collection.
//!
//! # Example
//!
//! ```rust,ignore
//! use salesdemo::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
