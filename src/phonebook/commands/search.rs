use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ContactStore;

pub fn run(store: &ContactStore, pattern: &str) -> Result<CmdResult> {
    let matches: Vec<_> = store.search(pattern)?.into_iter().cloned().collect();
    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!("No contacts match {:?}", pattern)));
    }
    Ok(result.with_listed_contacts(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhonebookError;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn lists_matches_in_store_order() {
        let store = StoreFixture::new()
            .with_contact("Mary", "Smith", "(111) 111-1111")
            .with_contact("Tom", "Jones", "(222) 222-2222")
            .with_contact("SMITH", "Agent", "(333) 333-3333")
            .store;

        let result = run(&store, "Smith").unwrap();
        let ids: Vec<_> = result.listed_contacts.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn no_matches_adds_a_note() {
        let store = StoreFixture::new().with_contacts(2).store;
        let result = run(&store, "zzz").unwrap();
        assert!(result.listed_contacts.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn bad_pattern_is_an_error() {
        let store = StoreFixture::new().with_contacts(1).store;
        assert!(matches!(run(&store, "[a-"), Err(PhonebookError::Pattern(_))));
    }
}
