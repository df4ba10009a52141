use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ContactId;
use crate::store::ContactStore;

pub fn run(store: &mut ContactStore, ids: &[ContactId]) -> Result<CmdResult> {
    let report = store.delete_many(ids);
    let mut result = CmdResult::default();

    for contact in &report.deleted {
        result.add_message(CmdMessage::success(format!(
            "Contact deleted ({}): {}",
            contact.id(),
            contact.full_name()
        )));
    }

    if !report.not_found.is_empty() {
        let missing: Vec<String> = report.not_found.iter().map(|id| id.to_string()).collect();
        result.add_message(CmdMessage::warning(format!(
            "The following IDs were not found and could not be deleted: {}",
            missing.join(", ")
        )));
    }

    Ok(result.with_affected_contacts(report.deleted))
}
