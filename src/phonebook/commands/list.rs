use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::SortField;
use crate::store::ContactStore;

pub fn run(store: &ContactStore, sort: SortField) -> Result<CmdResult> {
    let listed: Vec<_> = store.sort_by(sort).into_iter().cloned().collect();
    Ok(CmdResult::default().with_listed_contacts(listed))
}
