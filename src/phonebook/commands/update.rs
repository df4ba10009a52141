use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::error::{PhonebookError, Result};
use crate::model::{ContactId, ContactUpdate};
use crate::store::ContactStore;

pub fn run(store: &mut ContactStore, id: ContactId, update: ContactUpdate) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if update.is_empty() {
        if store.get_by_id(id).is_none() {
            result.add_message(not_found(id));
        } else {
            result.add_message(CmdMessage::info("Nothing changed."));
        }
        return Ok(result);
    }

    let changes = match store.update(id, update) {
        Ok(changes) => changes,
        Err(PhonebookError::ContactNotFound(id)) => {
            result.add_message(not_found(id));
            return Ok(result);
        }
        Err(e) => return Err(e),
    };

    if let Some(contact) = store.get_by_id(id) {
        result.add_message(CmdMessage::success(format!(
            "Contact updated ({}): {}",
            id,
            contact.full_name()
        )));
        result.affected_contacts.push(contact.clone());
    }
    Ok(result.with_history(changes))
}
