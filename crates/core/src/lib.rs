//! salesdemo_core - pure types and functions for the salesdemo service.
//!
//! Nothing in this crate performs I/O. The server crate supplies the
//! storage backend and the HTTP surface.

pub mod sale;
pub mod storage;
