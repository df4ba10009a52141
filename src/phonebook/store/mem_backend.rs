use super::backend::{decode_contacts, encode_contacts, StorageBackend};
use crate::error::{PhonebookError, Result};
use crate::model::Contact;
use std::cell::RefCell;
use std::io;

/// In-memory storage backend for testing.
///
/// Keeps the encoded JSON rather than the contacts themselves, so every
/// save/load cycle goes through the same serialization as the file backend.
/// Uses `RefCell` for interior mutability since phonebook is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    data: RefCell<Option<String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw persisted text, as if a previous session had written it.
    pub fn with_raw(json: impl Into<String>) -> Self {
        Self {
            data: RefCell::new(Some(json.into())),
            simulate_write_error: RefCell::new(false),
        }
    }

    /// The raw persisted text, if anything has been written.
    pub fn raw(&self) -> Option<String> {
        self.data.borrow().clone()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn read_contacts(&self) -> Result<Option<Vec<Contact>>> {
        match self.data.borrow().as_deref() {
            Some(json) => decode_contacts(json, &self.location()).map(Some),
            None => Ok(None),
        }
    }

    fn write_contacts(&self, contacts: &[Contact]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(PhonebookError::Io(io::Error::other("Simulated write error")));
        }
        let json = encode_contacts(contacts)?;
        *self.data.borrow_mut() = Some(json);
        Ok(())
    }

    fn location(&self) -> String {
        "memory://contacts.json".to_string()
    }
}
