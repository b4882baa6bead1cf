//! # API Facade
//!
//! A **thin facade** over the repository and the single entry point the
//! interactive loop uses. It dispatches, wraps plain values into
//! [`CmdResult`]s where a UI needs messages, and never prints.
//!
//! `AbookApi<S: Storage>` is generic over the storage backend:
//! - Production: `AbookApi<CsvStore>`
//! - Testing: `AbookApi<InMemoryStore>`

use crate::error::Result;
use crate::model::{Record, RecordFields};
use crate::repository::{BookRepository, Repository};
use crate::store::Storage;

pub use crate::message::{CmdMessage, CmdResult, MessageLevel};

pub struct AbookApi<S: Storage> {
    repo: BookRepository<S>,
}

impl<S: Storage> AbookApi<S> {
    pub fn new(repo: BookRepository<S>) -> Self {
        Self { repo }
    }

    /// Loads the book from `storage` and wraps it.
    pub fn open(description: impl Into<String>, storage: S) -> Result<Self> {
        Ok(Self::new(BookRepository::open(description, storage)?))
    }

    pub fn description(&self) -> &str {
        &self.repo.book().description
    }

    pub fn list_records(&self) -> CmdResult {
        CmdResult::default().with_listed_records(self.repo.sorted())
    }

    /// Creates a record with a fresh id and adds it.
    pub fn add_record(&mut self, fields: RecordFields) -> Result<CmdResult> {
        let record = Record::new(self.repo.next_id(), fields);
        self.repo.add(record)
    }

    pub fn find_records(&self, prefix: &str) -> Vec<Record> {
        self.repo.find(prefix)
    }

    pub fn search_records(&self, prefix: &str) -> CmdResult {
        let found = self.repo.find(prefix);
        let mut result = CmdResult::default();
        if found.is_empty() {
            result.add_message(CmdMessage::info("Nothing found"));
        }
        result.with_listed_records(found)
    }

    pub fn delete_record(&mut self, record: &Record) -> Result<CmdResult> {
        self.repo.delete(record)
    }

    pub fn update_record(&mut self, id: u64, patch: &RecordFields) -> Result<CmdResult> {
        self.repo.update(id, patch)
    }

    pub fn repository(&self) -> &BookRepository<S> {
        &self.repo
    }
}
