//! Calendar scan: per-day JSON files into one flattened row table

use crate::error::TabulatorError;
use sanctoral_domain::{DayKey, Record};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// One flattened output row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Composite identifier `MM-DD-NN`
    pub id: String,
    /// Place column
    pub lieu: String,
    /// Era column
    pub epoque: String,
    /// Name column
    pub nom: String,
    /// Principal title column
    pub titre: String,
}

/// The flattened, globally ordered record table
///
/// Row order is day order (chronological) then in-day order (the order the
/// model returned the records).
#[derive(Debug, Default)]
pub struct RecordTable {
    rows: Vec<Row>,
}

impl RecordTable {
    /// Build a table from pre-flattened rows
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Scan the full 12x31 calendar grid under `json_dir`.
    ///
    /// Days without an extraction file, including impossible dates like
    /// 02-31, are skipped and contribute zero rows. A file that exists but
    /// is not a JSON array of records is a fatal error.
    pub fn scan(json_dir: &Path) -> Result<Self, TabulatorError> {
        let mut rows = Vec::new();

        for day in DayKey::calendar() {
            let path = json_dir.join(format!("{}.json", day));
            let body = match fs::read_to_string(&path) {
                Ok(body) => body,
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            };

            let records: Vec<Record> = serde_json::from_str(&body)
                .map_err(|e| TabulatorError::Json(day.to_string(), e.to_string()))?;
            debug!("{}: {} records", day, records.len());

            for (idx, record) in records.into_iter().enumerate() {
                let titre = record.primary_title().to_string();
                rows.push(Row {
                    id: day.record_id(idx),
                    lieu: record.lieu,
                    epoque: record.epoque,
                    nom: record.nom,
                    titre,
                });
            }
        }

        Ok(Self { rows })
    }

    /// All rows, in global order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Total row count
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the scan found no records at all
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
