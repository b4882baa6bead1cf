use super::Storage;
use crate::error::Result;
use crate::model::Record;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Vec<Record>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `records`, as if loaded from a file.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self { records, saves: 0 }
    }

    /// The snapshot written by the most recent save.
    pub fn saved(&self) -> &[Record] {
        &self.records
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl Storage for InMemoryStore {
    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }

    fn save_all(&mut self, records: &[Record]) -> Result<()> {
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }
}
