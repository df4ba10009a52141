use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ContactId;
use crate::store::ContactStore;

pub fn run(store: &ContactStore, id: ContactId) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let Some(contact) = store.get_by_id(id) else {
        result.add_message(not_found(id));
        return Ok(result);
    };

    if contact.history().is_empty() {
        result.add_message(CmdMessage::info("No history available for this contact."));
    }
    let history = contact.history().to_vec();
    Ok(result
        .with_listed_contacts(vec![contact.clone()])
        .with_history(history))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContactUpdate;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn returns_history_in_recorded_order() {
        let mut store = StoreFixture::new().with_contacts(1).store;
        store
            .update(1, ContactUpdate::new().first_name("One"))
            .unwrap();
        store
            .update(1, ContactUpdate::new().first_name("Two"))
            .unwrap();

        let result = run(&store, 1).unwrap();

        let values: Vec<_> = result
            .history
            .iter()
            .map(|r| r.new_value.clone().unwrap())
            .collect();
        assert_eq!(values, vec!["One", "Two"]);
        assert_eq!(result.history[1].old_value.as_deref(), Some("One"));
    }

    #[test]
    fn empty_history_gets_a_note() {
        let store = StoreFixture::new().with_contacts(1).store;
        let result = run(&store, 1).unwrap();
        assert!(result.history.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn unknown_contact_is_reported() {
        let store = StoreFixture::new().store;
        let result = run(&store, 1).unwrap();
        assert!(result.listed_contacts.is_empty());
        assert!(result.messages[0].content.contains("No contact found"));
    }
}
