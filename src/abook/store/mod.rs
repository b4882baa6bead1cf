//! # Storage Layer
//!
//! The [`Storage`] trait is the persistence adapter between the in-memory
//! [`AddressBook`](crate::model::AddressBook) and whatever holds it between runs.
//!
//! ## Implementations
//!
//! - [`csv::CsvStore`]: production flat-file storage
//!   - Header row followed by one comma-separated row per record
//!   - Every save rewrites the whole file
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - No persistence
//!   - Records the last saved snapshot and the number of saves
//!
//! ## Storage Format
//!
//! ```text
//! account_id,last_name,first_name,middle_name,phone
//! 1001,Smith,John,A,555-1111
//! 1002,Smyth,Jane,,555-2222
//! ```
//!
//! Fields are never quoted. Commas are replaced with spaces when a field is
//! entered, so a stored field never contains the delimiter.

use crate::error::Result;
use crate::model::Record;

pub mod csv;
pub mod memory;

/// Column names, in the order they are written.
pub const HEADER: [&str; 5] = [
    "account_id",
    "last_name",
    "first_name",
    "middle_name",
    "phone",
];

/// Abstract interface for address book persistence.
///
/// Implementations hold the whole book: `save_all` replaces everything
/// previously stored.
pub trait Storage {
    /// Read every stored record, in stored order.
    fn load(&self) -> Result<Vec<Record>>;

    /// Replace the stored records with `records`, in the given order.
    fn save_all(&mut self, records: &[Record]) -> Result<()>;
}
