//! # Storage Layer
//!
//! Two halves with a narrow seam between them:
//!
//! 1. [`ContactStore`]: the in-memory, ordered collection. It owns id assignment,
//!    updates with history, batch import and every query (search, date filter,
//!    sort, grouping). Nothing in it touches the disk directly.
//! 2. [`StorageBackend`]: raw read/write of the whole persisted record list.
//!
//! `ContactStore::load` and `ContactStore::save` are the only places the two meet.
//! Saving always rewrites the full list; there is no incremental mode.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: a single JSON file, written atomically (tmp + rename).
//! - [`mem_backend::MemBackend`]: keeps the encoded JSON in memory, for tests.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── contacts.json       # JSON array of contacts, history included
//! ├── config.json         # PhonebookConfig
//! └── phonebook.log       # only when log_to_file is enabled
//! ```
//!
//! ## Id Renumbering
//!
//! A batch import renumbers *every* contact `1..=len` in collection order once the
//! rows are in, so ids held from before the import no longer point at the same
//! contacts.

pub mod backend;
pub mod contact_store;
pub mod fs_backend;
pub mod mem_backend;

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures;

pub use backend::StorageBackend;
pub use contact_store::{ContactStore, DeleteReport, ImportIssue, ImportReport, LoadOutcome};
