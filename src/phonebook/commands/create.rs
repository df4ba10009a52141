use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewContact;
use crate::store::ContactStore;

pub fn run(store: &mut ContactStore, fields: NewContact) -> Result<CmdResult> {
    let contact = store.create(fields)?.clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact added ({}): {}",
        contact.id(),
        contact.full_name()
    )));
    Ok(result.with_affected_contacts(vec![contact]))
}
