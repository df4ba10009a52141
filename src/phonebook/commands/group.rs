use crate::commands::{CmdResult, ContactGroup};
use crate::error::Result;
use crate::store::ContactStore;

pub fn run(store: &ContactStore) -> Result<CmdResult> {
    let groups = store
        .group_by_last_initial()
        .into_iter()
        .map(|(initial, contacts)| ContactGroup {
            initial,
            contacts: contacts.into_iter().cloned().collect(),
        })
        .collect();
    Ok(CmdResult::default().with_groups(groups))
}
