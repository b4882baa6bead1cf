//! # Repository
//!
//! [`BookRepository`] is the only code that mutates an [`AddressBook`]. Every
//! successful mutation is followed by a full [`Storage::save_all`], so the
//! backing file never lags memory by more than one operation.
//!
//! A record that cannot be found is not an error: lookups return empty
//! results and removals of unknown ids do nothing.

use crate::error::Result;
use crate::message::{CmdMessage, CmdResult};
use crate::model::{sort_by_last_name, AddressBook, Record, RecordFields};
use crate::store::Storage;
use tracing::{debug, info};

/// The operations any address book backend must offer.
pub trait Repository {
    /// Append a record and persist.
    fn add(&mut self, record: Record) -> Result<CmdResult>;

    /// Remove the first record with the same id and persist. Unknown ids are a no-op.
    fn delete(&mut self, record: &Record) -> Result<CmdResult>;

    /// Records whose last name starts with `prefix`, ignoring case, sorted by last name.
    fn find(&self, prefix: &str) -> Vec<Record>;
}

pub struct BookRepository<S: Storage> {
    book: AddressBook,
    storage: S,
}

impl<S: Storage> BookRepository<S> {
    /// Builds the repository from whatever `storage` currently holds.
    pub fn open(description: impl Into<String>, storage: S) -> Result<Self> {
        let records = storage.load()?;
        info!(count = records.len(), "Address book opened");
        Ok(Self {
            book: AddressBook::new(description).with_records(records),
            storage,
        })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// All records in display order.
    pub fn sorted(&self) -> Vec<Record> {
        let mut records = self.book.records.clone();
        sort_by_last_name(&mut records);
        records
    }

    pub fn next_id(&self) -> u64 {
        self.book.next_id()
    }

    /// Applies `patch` to the record with `id`, keeping fields the patch leaves blank.
    pub fn update(&mut self, id: u64, patch: &RecordFields) -> Result<CmdResult> {
        let Some(record) = self.book.records.iter_mut().find(|r| r.id == id) else {
            return Ok(CmdResult::default().with_message(CmdMessage::warning("Nothing found")));
        };
        record.apply(patch);
        let updated = record.clone();

        self.storage.save_all(&self.book.records)?;
        debug!(id, "Record updated");

        Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!("Record \"{}\" updated", updated)))
            .with_affected_records(vec![updated]))
    }
}

impl<S: Storage> Repository for BookRepository<S> {
    fn add(&mut self, record: Record) -> Result<CmdResult> {
        self.book.records.push(record.clone());
        self.storage.save_all(&self.book.records)?;
        debug!(id = record.id, total = self.book.records.len(), "Record added");

        Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!("Record \"{}\" saved", record)))
            .with_affected_records(vec![record]))
    }

    fn delete(&mut self, record: &Record) -> Result<CmdResult> {
        let Some(pos) = self.book.records.iter().position(|r| r.id == record.id) else {
            debug!(id = record.id, "Delete requested for unknown record");
            return Ok(CmdResult::default());
        };

        let removed = self.book.records.remove(pos);
        self.storage.save_all(&self.book.records)?;
        debug!(id = removed.id, total = self.book.records.len(), "Record deleted");

        Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!("Record \"{}\" deleted", removed)))
            .with_affected_records(vec![removed]))
    }

    fn find(&self, prefix: &str) -> Vec<Record> {
        let prefix = prefix.to_lowercase();
        let mut found: Vec<Record> = self
            .book
            .records
            .iter()
            .filter(|r| r.last_name.to_lowercase().starts_with(&prefix))
            .cloned()
            .collect();
        sort_by_last_name(&mut found);
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageLevel;
    use crate::store::memory::InMemoryStore;

    fn record(id: u64, last: &str) -> Record {
        Record::new(id, RecordFields::new(last, "John", "A", "555-1111"))
    }

    fn repo_with(records: Vec<Record>) -> BookRepository<InMemoryStore> {
        BookRepository::open("Test book", InMemoryStore::with_records(records)).unwrap()
    }

    #[test]
    fn open_loads_stored_records_in_order() {
        let repo = repo_with(vec![record(2, "Smyth"), record(1, "Smith")]);
        let ids: Vec<u64> = repo.book().records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(repo.book().description, "Test book");
    }

    #[test]
    fn add_appends_and_persists() {
        let mut repo = repo_with(vec![record(1, "Adams")]);
        let result = repo.add(record(1001, "Smith")).unwrap();

        assert_eq!(repo.book().records.iter().filter(|r| r.id == 1001).count(), 1);
        assert_eq!(repo.storage().saved().len(), 2);
        assert_eq!(repo.storage().save_count(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.messages[0].content.contains("1001,Smith,John,A,555-1111"));
    }

    #[test]
    fn add_then_find_by_prefix() {
        let mut repo = repo_with(vec![]);
        repo.add(Record::new(
            1001,
            RecordFields::new("Smith", "John", "A", "555-1111"),
        ))
        .unwrap();

        let found = repo.find("sm");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1001);
    }

    #[test]
    fn find_returns_sorted_case_insensitive_matches() {
        let repo = repo_with(vec![
            record(1, "Smyth"),
            record(2, "Jones"),
            record(3, "smith"),
        ]);

        let found = repo.find("SM");
        let names: Vec<&str> = found.iter().map(|r| r.last_name.as_str()).collect();
        assert_eq!(names, vec!["smith", "Smyth"]);
        assert!(found
            .iter()
            .all(|r| r.last_name.to_lowercase().starts_with("sm")));
    }

    #[test]
    fn find_with_empty_prefix_returns_everything() {
        let repo = repo_with(vec![record(1, "Smyth"), record(2, "Jones")]);
        assert_eq!(repo.find("").len(), 2);
    }

    #[test]
    fn find_without_matches_is_empty() {
        let repo = repo_with(vec![record(1, "Smyth")]);
        assert!(repo.find("x").is_empty());
    }

    #[test]
    fn delete_removes_exactly_one_and_persists() {
        let mut repo = repo_with(vec![record(1, "Smith"), record(2, "Smyth")]);
        let result = repo.delete(&record(1, "ignored")).unwrap();

        assert_eq!(repo.book().records.len(), 1);
        assert_eq!(repo.book().records[0].id, 2);
        assert_eq!(repo.storage().saved().len(), 1);
        assert!(result.messages[0].content.contains("deleted"));
    }

    #[test]
    fn delete_of_unknown_id_changes_nothing() {
        let mut repo = repo_with(vec![record(1, "Smith")]);
        let result = repo.delete(&record(99, "Smith")).unwrap();

        assert_eq!(repo.book().records.len(), 1);
        assert_eq!(repo.storage().save_count(), 0);
        assert!(result.messages.is_empty());
        assert!(result.affected_records.is_empty());
    }

    #[test]
    fn update_keeps_blank_fields_and_persists() {
        let mut repo = repo_with(vec![record(1, "Smith")]);
        repo.update(1, &RecordFields::new("", "Jack", "", ""))
            .unwrap();

        let saved = &repo.storage().saved()[0];
        assert_eq!(saved.id, 1);
        assert_eq!(saved.last_name, "Smith");
        assert_eq!(saved.first_name, "Jack");
        assert_eq!(saved.phone, "555-1111");
    }

    #[test]
    fn update_of_unknown_id_warns_without_saving() {
        let mut repo = repo_with(vec![record(1, "Smith")]);
        let result = repo.update(7, &RecordFields::new("X", "", "", "")).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(repo.storage().save_count(), 0);
    }

    #[test]
    fn sorted_does_not_reorder_storage() {
        let repo = repo_with(vec![record(1, "Smyth"), record(2, "Adams")]);
        assert_eq!(repo.sorted()[0].id, 2);
        assert_eq!(repo.book().records[0].id, 1);
    }
}
