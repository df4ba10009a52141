use super::backend::StorageBackend;
use crate::error::{PhonebookError, Result};
use crate::model::{ChangeRecord, Contact, ContactField, ContactId, ContactUpdate, NewContact, SortField};
use chrono::{DateTime, Utc};
use regex::RegexBuilder;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// What `ContactStore::load` found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Persisted state existed and held this many contacts.
    Loaded(usize),
    /// Nothing had been persisted yet; the store starts empty.
    Missing,
}

/// A CSV row that was skipped during a batch import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportIssue {
    /// 1-based line number in the source, the header being line 1.
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: Vec<ImportIssue>,
}

#[derive(Debug, Default)]
pub struct DeleteReport {
    pub deleted: Vec<Contact>,
    pub not_found: Vec<ContactId>,
}

/// One CSV row. Ids and timestamps are never taken from the source.
#[derive(Debug, Deserialize)]
struct ImportRow {
    first_name: String,
    last_name: String,
    phone_number: String,
    #[serde(default)]
    email_address: Option<String>,
    #[serde(default)]
    address: Option<String>,
}

impl From<ImportRow> for NewContact {
    fn from(row: ImportRow) -> Self {
        Self {
            first_name: row.first_name,
            last_name: row.last_name,
            phone_number: row.phone_number,
            email_address: row.email_address,
            address: row.address,
        }
    }
}

/// The in-memory, ordered collection of contacts.
///
/// Owns id assignment: `next_id` is always greater than every live id, and is
/// recomputed as `max id + 1` whenever contacts are loaded or renumbered.
#[derive(Debug, Clone)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    next_id: ContactId,
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore {
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
            next_id: 1,
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Replaces the collection with whatever `backend` has persisted.
    pub fn load<B: StorageBackend + ?Sized>(&mut self, backend: &B) -> Result<LoadOutcome> {
        match backend.read_contacts()? {
            Some(contacts) => {
                let count = contacts.len();
                self.contacts = contacts;
                self.refresh_next_id();
                info!(count, location = %backend.location(), "Contacts loaded");
                Ok(LoadOutcome::Loaded(count))
            }
            None => {
                self.contacts.clear();
                self.next_id = 1;
                warn!(
                    location = %backend.location(),
                    "No existing contacts file found. Starting with an empty phone book"
                );
                Ok(LoadOutcome::Missing)
            }
        }
    }

    /// Overwrites the persisted state with every contact, in collection order.
    pub fn save<B: StorageBackend + ?Sized>(&self, backend: &B) -> Result<()> {
        backend.write_contacts(&self.contacts)?;
        info!(count = self.contacts.len(), location = %backend.location(), "Contacts saved");
        Ok(())
    }

    /// Hands out the next id and advances the counter.
    pub fn next_id(&mut self) -> ContactId {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// The id `next_id` would return, without consuming it.
    pub fn peek_next_id(&self) -> ContactId {
        self.next_id
    }

    fn refresh_next_id(&mut self) {
        self.next_id = self.contacts.iter().map(Contact::id).max().unwrap_or(0) + 1;
    }

    /// Appends to the end of the collection. Does not persist.
    ///
    /// Fails with `DuplicateId` when a live contact already holds the same id.
    pub fn add(&mut self, contact: Contact) -> Result<()> {
        if self.get_by_id(contact.id()).is_some() {
            return Err(PhonebookError::DuplicateId(contact.id()));
        }
        info!(id = contact.id(), name = %contact.full_name(), "Added contact");
        // Contact ids never exceed MAX_CONTACT_ID, so this cannot overflow.
        if contact.id() >= self.next_id {
            self.next_id = contact.id() + 1;
        }
        self.contacts.push(contact);
        Ok(())
    }

    /// Validates `fields`, assigns the next id and appends the new contact.
    pub fn create(&mut self, fields: NewContact) -> Result<&Contact> {
        let contact = Contact::new(self.next_id, fields)?;
        self.add(contact)?;
        let index = self.contacts.len() - 1;
        Ok(&self.contacts[index])
    }

    pub fn get_by_id(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id() == id)
    }

    fn get_by_id_mut(&mut self, id: ContactId) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|c| c.id() == id)
    }

    /// Applies `update` to the contact with `id` and returns the recorded changes.
    pub fn update(&mut self, id: ContactId, update: ContactUpdate) -> Result<Vec<ChangeRecord>> {
        let contact = self
            .get_by_id_mut(id)
            .ok_or(PhonebookError::ContactNotFound(id))?;
        let changes = contact.apply_update(update)?;
        for change in &changes {
            info!(
                id,
                field = %change.field,
                old = ?change.old_value,
                new = ?change.new_value,
                "Updated contact"
            );
        }
        Ok(changes)
    }

    pub fn delete(&mut self, id: ContactId) -> Result<Contact> {
        let position = self
            .contacts
            .iter()
            .position(|c| c.id() == id)
            .ok_or(PhonebookError::ContactNotFound(id))?;
        let contact = self.contacts.remove(position);
        info!(id, name = %contact.full_name(), "Deleted contact");
        Ok(contact)
    }

    /// Deletes every id it can, reporting the ones that did not exist.
    pub fn delete_many(&mut self, ids: &[ContactId]) -> DeleteReport {
        let mut report = DeleteReport::default();
        for &id in ids {
            match self.delete(id) {
                Ok(contact) => report.deleted.push(contact),
                Err(_) => report.not_found.push(id),
            }
        }
        report
    }

    pub fn batch_import_file(&mut self, path: &Path) -> Result<ImportReport> {
        let file = File::open(path).map_err(PhonebookError::Io)?;
        self.batch_import(file)
    }

    /// Imports CSV rows (with a header row) as new contacts.
    ///
    /// Rows that fail to parse or validate are skipped and reported; they never
    /// abort the import. Afterwards every contact in the store, including those
    /// that were already present, is renumbered `1..=len` in collection order.
    ///
    /// Rows are staged until the source has been read to the end, so an I/O
    /// error leaves the store exactly as it was.
    pub fn batch_import<R: Read>(&mut self, source: R) -> Result<ImportReport> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        let headers = reader.headers()?.clone();
        let mut report = ImportReport::default();
        let mut staged: Vec<Contact> = Vec::new();

        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(PhonebookError::Csv(e)),
                Err(e) => {
                    let line = e.position().map_or(0, |p| p.line());
                    report.skip(line, e.to_string());
                    continue;
                }
            };
            let line = record.position().map_or(0, |p| p.line());

            let row: ImportRow = match record.deserialize(Some(&headers)) {
                Ok(row) => row,
                Err(e) => {
                    report.skip(line, e.to_string());
                    continue;
                }
            };

            // The id this row ends up with once the store is renumbered.
            let id = (self.contacts.len() + staged.len() + 1) as ContactId;
            match Contact::new(id, row.into()) {
                Ok(contact) => staged.push(contact),
                Err(e) => report.skip(line, e.to_string()),
            }
        }

        report.imported = staged.len();
        self.contacts.extend(staged);
        self.renumber();
        info!(
            imported = report.imported,
            skipped = report.skipped.len(),
            "Batch import finished"
        );
        Ok(report)
    }

    fn renumber(&mut self) {
        for (index, contact) in self.contacts.iter_mut().enumerate() {
            contact.set_id(index as ContactId + 1);
        }
        self.refresh_next_id();
    }

    /// Case-insensitive regex search over first name, last name and phone number.
    pub fn search(&self, pattern: &str) -> Result<Vec<&Contact>> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        let matches: Vec<&Contact> = self
            .contacts
            .iter()
            .filter(|c| {
                regex.is_match(c.first_name())
                    || regex.is_match(c.last_name())
                    || regex.is_match(c.phone_number())
            })
            .collect();
        debug!(pattern, matches = matches.len(), "Searched contacts");
        Ok(matches)
    }

    /// Contacts created within `[start, end]`, both ends inclusive.
    pub fn filter_by_date(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| start <= c.created_at() && c.created_at() <= end)
            .collect()
    }

    /// Contacts whose `field` equals `value` exactly (`None` matches absent values).
    pub fn find(&self, field: ContactField, value: Option<&str>) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| c.field_value(field) == value)
            .collect()
    }

    /// A new ascending ordering by `field`. Ties keep collection order.
    pub fn sort_by(&self, field: SortField) -> Vec<&Contact> {
        let mut sorted: Vec<&Contact> = self.contacts.iter().collect();
        sorted.sort_by(|a, b| field.compare(a, b));
        sorted
    }

    /// Contacts keyed by the uppercase initial of their last name.
    pub fn group_by_last_initial(&self) -> BTreeMap<char, Vec<&Contact>> {
        let mut groups: BTreeMap<char, Vec<&Contact>> = BTreeMap::new();
        for contact in &self.contacts {
            if let Some(initial) = contact.last_name().chars().next() {
                let key = initial.to_uppercase().next().unwrap_or(initial);
                groups.entry(key).or_default().push(contact);
            }
        }
        groups
    }
}

impl ImportReport {
    fn skip(&mut self, line: u64, reason: String) {
        warn!(line, %reason, "Skipping contact row");
        self.skipped.push(ImportIssue { line, reason });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::model::MAX_CONTACT_ID;
    use crate::store::backend::encode_contacts;
    use crate::store::fixtures::StoreFixture;
    use crate::store::mem_backend::MemBackend;
    use chrono::Duration;

    const CSV_HEADER: &str = "first_name,last_name,phone_number,email_address,address\n";

    fn ids(contacts: &[&Contact]) -> Vec<ContactId> {
        contacts.iter().map(|c| c.id()).collect()
    }

    #[test]
    fn new_store_is_empty_and_counts_from_one() {
        let mut store = ContactStore::new();
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 1);
        assert_eq!(store.next_id(), 2);
        assert_eq!(store.peek_next_id(), 3);
    }

    #[test]
    fn load_without_persisted_state_is_not_an_error() {
        let mut store = StoreFixture::new().with_contacts(2).store;
        let outcome = store.load(&MemBackend::new()).unwrap();
        assert_eq!(outcome, LoadOutcome::Missing);
        assert!(store.is_empty());
        assert_eq!(store.peek_next_id(), 1);
    }

    #[test]
    fn save_then_load_round_trips_and_recomputes_next_id() {
        let mut store = StoreFixture::new().with_contacts(3).store;
        store.delete(1).unwrap();
        store
            .update(3, ContactUpdate::new().address("Baker St"))
            .unwrap();
        let backend = MemBackend::new();
        store.save(&backend).unwrap();

        let mut loaded = ContactStore::new();
        assert_eq!(loaded.load(&backend).unwrap(), LoadOutcome::Loaded(2));
        assert_eq!(loaded.contacts(), store.contacts());
        assert_eq!(loaded.peek_next_id(), 4);
    }

    #[test]
    fn load_surfaces_corrupt_state() {
        let mut store = ContactStore::new();
        let backend = MemBackend::with_raw("not json at all");
        assert!(matches!(
            store.load(&backend),
            Err(PhonebookError::Deserialization { .. })
        ));
    }

    #[test]
    fn save_surfaces_write_failures() {
        let store = StoreFixture::new().with_contacts(1).store;
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        assert!(matches!(store.save(&backend), Err(PhonebookError::Io(_))));
        assert!(backend.raw().is_none());
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let mut store = ContactStore::new();
        let first = store
            .create(NewContact::new("A", "Alpha", "(111) 111-1111"))
            .unwrap()
            .id();
        let second = store
            .create(NewContact::new("B", "Beta", "(222) 222-2222"))
            .unwrap()
            .id();
        assert_eq!((first, second), (1, 2));
        assert_eq!(store.peek_next_id(), 3);
    }

    #[test]
    fn create_rejects_invalid_fields_without_consuming_an_id() {
        let mut store = ContactStore::new();
        let err = store
            .create(NewContact::new("A", "Alpha", "bad"))
            .unwrap_err();
        assert!(matches!(err, PhonebookError::Validation(_)));
        assert!(store.is_empty());
        assert_eq!(store.peek_next_id(), 1);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = StoreFixture::new().with_contacts(2).store;
        store.delete(2).unwrap();
        let id = store
            .create(NewContact::new("C", "Gamma", "(333) 333-3333"))
            .unwrap()
            .id();
        assert_eq!(id, 3);
    }

    #[test]
    fn add_rejects_an_id_that_is_already_live() {
        let mut store = ContactStore::new();
        store
            .create(NewContact::new("A", "Alpha", "(111) 111-1111"))
            .unwrap();
        let clash = Contact::new(1, NewContact::new("B", "Beta", "(222) 222-2222")).unwrap();

        let err = store.add(clash).unwrap_err();

        assert!(matches!(err, PhonebookError::DuplicateId(1)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_by_id(1).unwrap().last_name(), "Alpha");

        let backend = MemBackend::new();
        store.save(&backend).unwrap();
        let mut reloaded = ContactStore::new();
        assert_eq!(reloaded.load(&backend).unwrap(), LoadOutcome::Loaded(1));
    }

    #[test]
    fn add_with_a_higher_id_moves_the_counter_past_it() {
        let mut store = ContactStore::new();
        store
            .add(Contact::new(7, NewContact::new("A", "Alpha", "(111) 111-1111")).unwrap())
            .unwrap();
        assert_eq!(store.peek_next_id(), 8);
    }

    #[test]
    fn load_rejects_an_id_at_the_top_of_the_range() {
        let contact =
            Contact::new(MAX_CONTACT_ID, NewContact::new("A", "Alpha", "(111) 111-1111")).unwrap();
        let json = encode_contacts(&[contact])
            .unwrap()
            .replace(&MAX_CONTACT_ID.to_string(), &ContactId::MAX.to_string());
        let backend = MemBackend::with_raw(json);

        let mut store = ContactStore::new();
        let result = store.load(&backend);

        assert!(matches!(
            result,
            Err(PhonebookError::Deserialization { .. })
        ));
    }

    #[test]
    fn store_holding_the_largest_id_refuses_further_creates() {
        let contact =
            Contact::new(MAX_CONTACT_ID, NewContact::new("A", "Alpha", "(111) 111-1111")).unwrap();
        let backend = MemBackend::with_raw(encode_contacts(&[contact]).unwrap());

        let mut store = ContactStore::new();
        store.load(&backend).unwrap();
        assert_eq!(store.peek_next_id(), ContactId::MAX);

        let err = store
            .create(NewContact::new("B", "Beta", "(222) 222-2222"))
            .unwrap_err();
        assert!(matches!(
            err,
            PhonebookError::Validation(ValidationError::InvalidId)
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_by_id_finds_live_contacts_only() {
        let mut store = StoreFixture::new().with_contacts(3).store;
        store.delete(2).unwrap();
        assert_eq!(store.get_by_id(1).map(Contact::id), Some(1));
        assert!(store.get_by_id(2).is_none());
        assert_eq!(store.get_by_id(3).map(Contact::id), Some(3));
        assert!(store.get_by_id(4).is_none());
    }

    #[test]
    fn update_returns_changes_and_reports_unknown_ids() {
        let mut store = StoreFixture::new().with_contacts(1).store;
        let changes = store
            .update(1, ContactUpdate::new().last_name("Moriarty"))
            .unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(store.get_by_id(1).unwrap().last_name(), "Moriarty");

        assert!(matches!(
            store.update(9, ContactUpdate::new().last_name("X")),
            Err(PhonebookError::ContactNotFound(9))
        ));
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let mut store = StoreFixture::new().with_contacts(1).store;
        match store.delete(5) {
            Err(PhonebookError::ContactNotFound(id)) => assert_eq!(id, 5),
            other => panic!("Expected ContactNotFound, got {:?}", other),
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_many_collects_missing_ids() {
        let mut store = StoreFixture::new().with_contacts(3).store;
        let report = store.delete_many(&[1, 7, 3]);
        let deleted: Vec<_> = report.deleted.iter().map(Contact::id).collect();
        assert_eq!(deleted, vec![1, 3]);
        assert_eq!(report.not_found, vec![7]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn batch_import_renumbers_every_contact() {
        let mut store = StoreFixture::new().with_contacts(2).store;
        store.delete(1).unwrap();
        store
            .create(NewContact::new("Extra", "Person", "(999) 999-9999"))
            .unwrap();
        // Existing ids are now [2, 3]
        let csv = format!(
            "{}Ada,Lovelace,(100) 200-3000,ada@engine.org,\nCharles,Babbage,(100) 200-3001,,London\n",
            CSV_HEADER
        );

        let report = store.batch_import(csv.as_bytes()).unwrap();

        assert_eq!(report.imported, 2);
        assert!(report.skipped.is_empty());
        let all: Vec<&Contact> = store.contacts().iter().collect();
        assert_eq!(ids(&all), vec![1, 2, 3, 4]);
        assert_eq!(store.contacts()[2].last_name(), "Lovelace");
        assert_eq!(store.contacts()[2].address(), None);
        assert_eq!(store.contacts()[3].email_address(), None);
        assert_eq!(store.contacts()[3].address(), Some("London"));
        assert_eq!(store.next_id(), 5);
    }

    #[test]
    fn batch_import_skips_invalid_rows_and_keeps_valid_ones() {
        let mut store = ContactStore::new();
        let csv = format!(
            "{}Good,Row,(123) 456-7890,,\nBad,Phone,12345,,\nBad,Email,(123) 456-7890,nope,\n,Blank,(123) 456-7890,,\nAlso,Good,(321) 654-0987,also@good.io,Somewhere\n",
            CSV_HEADER
        );

        let report = store.batch_import(csv.as_bytes()).unwrap();

        assert_eq!(report.imported, 2);
        let lines: Vec<u64> = report.skipped.iter().map(|i| i.line).collect();
        assert_eq!(lines, vec![3, 4, 5]);
        assert!(report.skipped[0].reason.contains("Phone number"));
        assert_eq!(store.len(), 2);
        let all: Vec<&Contact> = store.contacts().iter().collect();
        assert_eq!(ids(&all), vec![1, 2]);
        assert_eq!(store.peek_next_id(), 3);
    }

    #[test]
    fn batch_import_reports_rows_missing_required_columns() {
        let mut store = ContactStore::new();
        let csv = "first_name,last_name\nOnly,Names\n";
        let report = store.batch_import(csv.as_bytes()).unwrap();
        assert_eq!(report.imported, 0);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line, 2);
    }

    /// Yields `data`, then fails every further read.
    struct FailingReader {
        data: std::io::Cursor<Vec<u8>>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let n = self.data.read(buf)?;
            if n == 0 {
                return Err(std::io::Error::other("connection reset"));
            }
            Ok(n)
        }
    }

    #[test]
    fn batch_import_io_error_leaves_store_untouched() {
        let mut store = StoreFixture::new().with_contacts(2).store;
        store.delete(1).unwrap();
        let before: Vec<Contact> = store.contacts().to_vec();
        let source = FailingReader {
            data: std::io::Cursor::new(
                format!("{}Ada,Lovelace,(100) 200-3000,,\n", CSV_HEADER).into_bytes(),
            ),
        };

        let result = store.batch_import(source);

        assert!(matches!(result, Err(PhonebookError::Csv(_))));
        assert_eq!(store.contacts(), before.as_slice());
        assert_eq!(store.peek_next_id(), 3);
    }

    #[test]
    fn batch_import_of_missing_file_is_io_error() {
        let mut store = ContactStore::new();
        let result = store.batch_import_file(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(PhonebookError::Io(_))));
    }

    #[test]
    fn search_is_case_insensitive_substring_over_names_and_phone() {
        let store = StoreFixture::new()
            .with_contact("John", "Smith", "(111) 222-3333")
            .with_contact("Smithy", "Jones", "(444) 555-6666")
            .with_contact("Jane", "Blacksmith", "(777) 888-9999")
            .with_contact("Bob", "Brown", "(123) 456-7890")
            .store;

        let found = store.search("smith").unwrap();
        assert_eq!(ids(&found), vec![1, 2, 3]);

        let by_phone = store.search(r"\(444\)").unwrap();
        assert_eq!(ids(&by_phone), vec![2]);

        let wildcard = store.search("^b.*n$").unwrap();
        assert_eq!(ids(&wildcard), vec![4]);
    }

    #[test]
    fn search_rejects_invalid_patterns() {
        let store = StoreFixture::new().with_contacts(1).store;
        assert!(matches!(
            store.search("(unclosed"),
            Err(PhonebookError::Pattern(_))
        ));
    }

    #[test]
    fn filter_by_date_is_inclusive_at_both_ends() {
        let store = StoreFixture::new().with_contacts(3).store;
        let t0 = store.contacts()[0].created_at();
        let t2 = store.contacts()[2].created_at();

        let all = store.filter_by_date(t0, t2);
        assert_eq!(ids(&all), vec![1, 2, 3]);

        let first_only = store.filter_by_date(t0, t0);
        assert!(first_only.iter().any(|c| c.id() == 1));

        let last_only = store.filter_by_date(t2, t2);
        assert!(last_only.iter().any(|c| c.id() == 3));

        let none = store.filter_by_date(t2 + Duration::seconds(1), t2 + Duration::seconds(60));
        assert!(none.is_empty());
    }

    #[test]
    fn sort_by_last_name_is_stable_and_leaves_store_order() {
        let store = StoreFixture::new()
            .with_contact("Zed", "Young", "(111) 111-1111")
            .with_contact("Amy", "Adams", "(222) 222-2222")
            .with_contact("Bea", "Young", "(333) 333-3333")
            .store;

        let sorted = store.sort_by(SortField::LastName);
        assert_eq!(ids(&sorted), vec![2, 1, 3]);

        let by_first = store.sort_by(SortField::FirstName);
        assert_eq!(ids(&by_first), vec![2, 3, 1]);

        let untouched: Vec<&Contact> = store.contacts().iter().collect();
        assert_eq!(ids(&untouched), vec![1, 2, 3]);
    }

    #[test]
    fn group_by_last_initial_uppercases_and_keeps_order() {
        let store = StoreFixture::new()
            .with_contact("A", "smith", "(111) 111-1111")
            .with_contact("B", "Jones", "(222) 222-2222")
            .with_contact("C", "Stone", "(333) 333-3333")
            .store;

        let groups = store.group_by_last_initial();
        let keys: Vec<char> = groups.keys().copied().collect();
        assert_eq!(keys, vec!['J', 'S']);
        assert_eq!(ids(&groups[&'S']), vec![1, 3]);
        assert_eq!(ids(&groups[&'J']), vec![2]);
    }

    #[test]
    fn find_matches_exact_field_values() {
        let mut store = StoreFixture::new()
            .with_contact("A", "Smith", "(111) 111-1111")
            .with_contact("B", "Smith", "(222) 222-2222")
            .store;
        store
            .update(2, ContactUpdate::new().email_address("b@smith.com"))
            .unwrap();

        assert_eq!(ids(&store.find(ContactField::LastName, Some("Smith"))), vec![1, 2]);
        assert_eq!(ids(&store.find(ContactField::EmailAddress, None)), vec![1]);
        assert!(store.find(ContactField::LastName, Some("smith")).is_empty());
    }
}
