use crate::error::{PhonebookError, Result};
use crate::model::{Contact, ContactId};
use std::collections::HashSet;

/// Abstract interface for raw storage I/O.
///
/// A backend only knows how to read and write the whole persisted record list;
/// `ContactStore` owns everything else (ids, queries, history).
pub trait StorageBackend {
    /// Read the persisted contacts.
    /// Returns `Ok(None)` when nothing has been persisted yet, which is not an error.
    fn read_contacts(&self) -> Result<Option<Vec<Contact>>>;

    /// Replace the persisted contacts with `contacts`, in order.
    fn write_contacts(&self, contacts: &[Contact]) -> Result<()>;

    /// Human-readable location, used in log lines and error messages.
    fn location(&self) -> String;
}

/// Serializes contacts as a pretty-printed JSON array.
pub fn encode_contacts(contacts: &[Contact]) -> Result<String> {
    serde_json::to_string_pretty(contacts).map_err(PhonebookError::Serialization)
}

/// Parses a JSON array of contacts, rejecting malformed records and duplicate ids.
pub fn decode_contacts(content: &str, location: &str) -> Result<Vec<Contact>> {
    let contacts: Vec<Contact> =
        serde_json::from_str(content).map_err(|e| PhonebookError::Deserialization {
            location: location.to_string(),
            reason: e.to_string(),
        })?;

    let mut seen: HashSet<ContactId> = HashSet::with_capacity(contacts.len());
    for contact in &contacts {
        if !seen.insert(contact.id()) {
            return Err(PhonebookError::Deserialization {
                location: location.to_string(),
                reason: format!("duplicate contact id {}", contact.id()),
            });
        }
    }

    Ok(contacts)
}
