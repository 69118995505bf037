//! # Storage Layer
//!
//! The durable side of the persistence layer: a single-key blob store
//! holding the serialized quote collection. The [`DurableStore`] trait
//! keeps the cache decoupled from where the blob actually lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production file-based storage. One JSON file
//!   (default `quotes.json`) inside a root directory, replaced atomically
//!   on every write so a crash mid-write leaves the previous snapshot
//!   intact.
//! - [`memory::InMemoryStore`]: in-memory storage for testing. Clonable
//!   handle over shared contents, so a test can keep a view on what the
//!   background writer persisted.
//!
//! The store never interprets the payload; parsing (and recovery from a
//! malformed blob) is the cache layer's job.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for the durable quote blob.
///
/// `read` is synchronous and cheap to call once; `write` replaces the whole
/// blob. Implementations must make `write` all-or-nothing: a failed write
/// leaves the previously stored payload readable.
pub trait DurableStore {
    /// The stored payload, or `None` if nothing has been written yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored payload.
    fn write(&mut self, payload: &str) -> Result<()>;
}
