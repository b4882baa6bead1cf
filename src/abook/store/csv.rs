use super::{Storage, HEADER};
use crate::error::{AbookError, Result};
use crate::model::Record;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info};

const DELIMITER: char = ',';

/// Flat-file storage. An empty path makes the store memory-only.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_detached(&self) -> bool {
        self.path.as_os_str().is_empty()
    }
}

impl Storage for CsvStore {
    fn load(&self) -> Result<Vec<Record>> {
        if self.is_detached() {
            debug!("No address book file configured, starting empty");
            return Ok(Vec::new());
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "Address book file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(AbookError::Io(e)),
        };

        let records = parse(&content)?;
        debug!(path = %self.path.display(), count = records.len(), "Loaded records");
        Ok(records)
    }

    fn save_all(&mut self, records: &[Record]) -> Result<()> {
        if self.is_detached() {
            debug!("No address book file configured, skipping save");
            return Ok(());
        }

        fs::write(&self.path, render(records))?;
        debug!(path = %self.path.display(), count = records.len(), "Saved records");
        Ok(())
    }
}

/// Parses the header-plus-rows format. Columns are matched by header name.
pub fn parse(content: &str) -> Result<Vec<Record>> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((header_line, header)) = lines.next() else {
        return Ok(Vec::new());
    };

    let columns: Vec<&str> = header.split(DELIMITER).map(str::trim).collect();
    let mut positions = [0usize; HEADER.len()];
    for (slot, name) in positions.iter_mut().zip(HEADER) {
        *slot = columns
            .iter()
            .position(|c| *c == name)
            .ok_or_else(|| AbookError::Parse {
                line: header_line,
                message: format!("missing column `{}`", name),
            })?;
    }

    lines
        .map(|(line_no, line)| {
            let fields: Vec<&str> = line.split(DELIMITER).collect();
            if fields.len() != columns.len() {
                return Err(AbookError::Parse {
                    line: line_no,
                    message: format!(
                        "expected {} fields, found {}",
                        columns.len(),
                        fields.len()
                    ),
                });
            }

            let [id, last, first, middle, phone] = positions.map(|p| fields[p]);
            let id = id.trim().parse().map_err(|_| AbookError::Parse {
                line: line_no,
                message: format!("invalid account id `{}`", id),
            })?;

            Ok(Record {
                id,
                last_name: last.to_string(),
                first_name: first.to_string(),
                middle_name: middle.to_string(),
                phone: phone.to_string(),
            })
        })
        .collect()
}

/// Renders the header and one row per record.
pub fn render(records: &[Record]) -> String {
    let mut out = HEADER.join(",");
    out.push('\n');
    for record in records {
        out.push_str(&record.to_string());
        out.push('\n');
    }
    out
}
