use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ContactStore;
use chrono::{DateTime, Utc};

/// Contacts created between `start` and `end`, inclusive.
pub fn run(store: &ContactStore, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if start > end {
        result.add_message(CmdMessage::warning(
            "Start time is after end time; no contact can match.",
        ));
    }
    let listed: Vec<_> = store
        .filter_by_date(start, end)
        .into_iter()
        .cloned()
        .collect();
    Ok(result.with_listed_contacts(listed))
}
