use chrono::Utc;
use std::fmt;

/// A single contact entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: u64,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub phone: String,
}

impl Record {
    pub fn new(id: u64, fields: RecordFields) -> Self {
        Self {
            id,
            last_name: fields.last_name,
            first_name: fields.first_name,
            middle_name: fields.middle_name,
            phone: fields.phone,
        }
    }

    /// Applies a patch in place. Blank fields keep the current value.
    pub fn apply(&mut self, patch: &RecordFields) {
        fn merge(current: &mut String, incoming: &str) {
            if !incoming.trim().is_empty() {
                *current = incoming.to_string();
            }
        }
        merge(&mut self.last_name, &patch.last_name);
        merge(&mut self.first_name, &patch.first_name);
        merge(&mut self.middle_name, &patch.middle_name);
        merge(&mut self.phone, &patch.phone);
    }

    /// Key used for display and search ordering.
    pub fn sort_key(&self) -> String {
        self.last_name.to_lowercase()
    }

    /// Single listing line: `last first middle | phone`.
    pub fn listing(&self) -> String {
        format!(
            "{} {} {} | {}",
            self.last_name, self.first_name, self.middle_name, self.phone
        )
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.id, self.last_name, self.first_name, self.middle_name, self.phone
        )
    }
}

/// The four user-editable fields of a record.
///
/// Used both for creating records and as an update patch, where a blank field
/// means "keep the old value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFields {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub phone: String,
}

impl RecordFields {
    pub fn new(
        last_name: impl AsRef<str>,
        first_name: impl AsRef<str>,
        middle_name: impl AsRef<str>,
        phone: impl AsRef<str>,
    ) -> Self {
        Self {
            last_name: sanitize(last_name.as_ref()),
            first_name: sanitize(first_name.as_ref()),
            middle_name: sanitize(middle_name.as_ref()),
            phone: sanitize(phone.as_ref()),
        }
    }
}

/// Stored fields never contain the delimiter.
pub fn sanitize(input: &str) -> String {
    input.trim().replace(',', " ")
}

/// The in-memory address book: a label plus records in insertion order.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    pub description: String,
    pub records: Vec<Record>,
}

impl AddressBook {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            records: Vec::new(),
        }
    }

    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    /// Next free identifier.
    ///
    /// Derived from the wall clock, but always above every id already in the
    /// book so that additions within the same second never collide. When the
    /// largest id is `u64::MAX`, the first unused id from the clock upward is taken.
    pub fn next_id(&self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp()).unwrap_or_default();
        let Some(max) = self.records.iter().map(|r| r.id).max() else {
            return now;
        };
        match max.checked_add(1) {
            Some(floor) => now.max(floor),
            None => (now..)
                .find(|id| self.records.iter().all(|r| r.id != *id))
                .unwrap_or(now),
        }
    }
}

/// Sorts records by last name, case-insensitively. Ties keep their order.
pub fn sort_by_last_name(records: &mut [Record]) {
    records.sort_by_cached_key(Record::sort_key);
}
