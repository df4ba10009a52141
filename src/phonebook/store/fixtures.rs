//! Test fixtures for building populated stores.

use super::contact_store::ContactStore;
use crate::model::NewContact;

pub struct StoreFixture {
    pub store: ContactStore,
}

impl Default for StoreFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreFixture {
    pub fn new() -> Self {
        Self {
            store: ContactStore::new(),
        }
    }

    pub fn with_contacts(mut self, count: usize) -> Self {
        for i in 0..count {
            let fields = NewContact::new(
                format!("First{}", i + 1),
                format!("Last{}", i + 1),
                format!("(555) 000-{:04}", i + 1),
            );
            self.store.create(fields).unwrap();
        }
        self
    }

    pub fn with_contact(mut self, first_name: &str, last_name: &str, phone: &str) -> Self {
        self.store
            .create(NewContact::new(first_name, last_name, phone))
            .unwrap();
        self
    }

    pub fn with_full_contact(mut self, fields: NewContact) -> Self {
        self.store.create(fields).unwrap();
        self
    }
}
