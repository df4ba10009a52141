use crate::commands::{not_found, CmdResult};
use crate::error::Result;
use crate::model::ContactId;
use crate::store::ContactStore;

pub fn run(store: &ContactStore, ids: &[ContactId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for &id in ids {
        match store.get_by_id(id) {
            Some(contact) => result.listed_contacts.push(contact.clone()),
            None => result.add_message(not_found(id)),
        }
    }
    Ok(result)
}
