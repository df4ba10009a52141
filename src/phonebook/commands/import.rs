use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ContactStore;
use std::path::Path;

pub fn run(store: &mut ContactStore, path: &Path) -> Result<CmdResult> {
    let existing = store.len();
    let report = store.batch_import_file(path)?;
    let mut result = CmdResult::default();

    for issue in &report.skipped {
        result.add_message(CmdMessage::warning(format!(
            "Skipped line {}: {}",
            issue.line, issue.reason
        )));
    }

    if report.imported > 0 && existing > 0 {
        result.add_message(CmdMessage::info(
            "Contact IDs have been renumbered; previously noted IDs may have changed.",
        ));
    }

    result.add_message(CmdMessage::success(format!(
        "Imported {} contact(s) from {}",
        report.imported,
        path.display()
    )));
    if !report.skipped.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "{} row(s) could not be imported",
            report.skipped.len()
        )));
    }

    // Every contact is affected: ids were reassigned across the whole store.
    let affected = if report.imported > 0 || existing > 0 {
        store.contacts().to_vec()
    } else {
        Vec::new()
    };
    Ok(result.with_affected_contacts(affected))
}
