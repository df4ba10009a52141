//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for all phonebook operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! - **Opens** the store: loads persisted contacts through the backend once
//! - **Dispatches** to the appropriate command function
//! - **Persists** after any command that changed the collection
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! Business logic lives in `commands/*.rs` and `store/`; presentation lives in the CLI.
//!
//! ## Generic Over StorageBackend
//!
//! `PhonebookApi<B: StorageBackend>` is generic over where contacts are persisted:
//! - Production: `PhonebookApi<FsBackend>`
//! - Testing: `PhonebookApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::model::{ContactId, ContactUpdate, NewContact, SortField};
use crate::store::{ContactStore, LoadOutcome, StorageBackend};
use chrono::{DateTime, Utc};
use std::path::Path;

/// The main API facade for phonebook operations.
pub struct PhonebookApi<B: StorageBackend> {
    store: ContactStore,
    backend: B,
    paths: commands::PhonebookPaths,
    load_outcome: LoadOutcome,
}

impl<B: StorageBackend> PhonebookApi<B> {
    /// Loads whatever `backend` holds. A backend with nothing persisted yet opens
    /// as an empty phone book.
    pub fn open(backend: B, paths: commands::PhonebookPaths) -> Result<Self> {
        let mut store = ContactStore::new();
        let load_outcome = store.load(&backend)?;
        Ok(Self {
            store,
            backend,
            paths,
            load_outcome,
        })
    }

    pub fn create_contact(&mut self, fields: NewContact) -> Result<commands::CmdResult> {
        let result = commands::create::run(&mut self.store, fields)?;
        self.persist_if_changed(result)
    }

    pub fn import_contacts(&mut self, path: &Path) -> Result<commands::CmdResult> {
        let result = commands::import::run(&mut self.store, path)?;
        self.persist_if_changed(result)
    }

    pub fn search_contacts(&self, pattern: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, pattern)
    }

    pub fn contacts_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<commands::CmdResult> {
        commands::filter::run(&self.store, start, end)
    }

    pub fn update_contact(
        &mut self,
        id: ContactId,
        update: ContactUpdate,
    ) -> Result<commands::CmdResult> {
        let result = commands::update::run(&mut self.store, id, update)?;
        self.persist_if_changed(result)
    }

    pub fn delete_contacts(&mut self, ids: &[ContactId]) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.store, ids)?;
        self.persist_if_changed(result)
    }

    pub fn list_contacts(&self, sort: SortField) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, sort)
    }

    pub fn group_contacts(&self) -> Result<commands::CmdResult> {
        commands::group::run(&self.store)
    }

    pub fn view_contacts(&self, ids: &[ContactId]) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, ids)
    }

    pub fn contact_history(&self, id: ContactId) -> Result<commands::CmdResult> {
        commands::history::run(&self.store, id)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn load_outcome(&self) -> LoadOutcome {
        self.load_outcome
    }

    pub fn paths(&self) -> &commands::PhonebookPaths {
        &self.paths
    }

    fn persist_if_changed(&self, result: commands::CmdResult) -> Result<commands::CmdResult> {
        if result.is_mutation() {
            self.store.save(&self.backend)?;
        }
        Ok(result)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ContactGroup, MessageLevel, PhonebookPaths};
