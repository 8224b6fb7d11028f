//! Slice the flattened table into fixed-capacity CSV pages

use crate::error::TabulatorError;
use crate::table::RecordTable;
use csv::{QuoteStyle, WriterBuilder};
use std::fs;
use std::path::Path;
use tracing::info;

/// Data rows per CSV page
pub const DEFAULT_ROWS_PER_PAGE: usize = 298;

const HEADERS: [&str; 5] = ["ID", "Lieu", "Epoque", "Nom", "Titre"];

/// Write the table as consecutive pages of up to `rows_per_page` data rows.
///
/// Pages are named `00.csv`, `01.csv`, ... in slice order; each gets the
/// header row. Only the final page may be short, and no empty page is
/// created. Fields are written without quote-escaping; a value containing a
/// comma corrupts its row.
///
/// Returns the number of pages written.
pub fn write_pages(
    table: &RecordTable,
    csv_dir: &Path,
    rows_per_page: usize,
) -> Result<usize, TabulatorError> {
    if rows_per_page == 0 {
        return Err(TabulatorError::Config(
            "rows_per_page must be greater than 0".to_string(),
        ));
    }

    fs::create_dir_all(csv_dir)?;

    let mut pages = 0;
    for (page_idx, chunk) in table.rows().chunks(rows_per_page).enumerate() {
        let path = csv_dir.join(format!("{:02}.csv", page_idx));
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Never)
            .from_path(&path)?;

        writer.write_record(HEADERS)?;
        for row in chunk {
            writer.write_record([&row.id, &row.lieu, &row.epoque, &row.nom, &row.titre])?;
        }
        writer.flush()?;
        pages += 1;
    }

    info!("wrote {} rows across {} pages", table.len(), pages);
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Row;

    fn synthetic_table(count: usize) -> RecordTable {
        let rows = (0..count)
            .map(|i| Row {
                id: format!("01-01-{:02}", i),
                lieu: String::new(),
                epoque: String::new(),
                nom: format!("Saint {}", i),
                titre: "aucun".to_string(),
            })
            .collect();
        RecordTable::from_rows(rows)
    }

    #[test]
    fn test_exact_page_boundary() {
        let dir = tempfile::tempdir().unwrap();
        let table = synthetic_table(DEFAULT_ROWS_PER_PAGE);

        let pages = write_pages(&table, dir.path(), DEFAULT_ROWS_PER_PAGE).unwrap();
        assert_eq!(pages, 1);

        let body = fs::read_to_string(dir.path().join("00.csv")).unwrap();
        assert_eq!(body.lines().count(), DEFAULT_ROWS_PER_PAGE + 1);
        assert!(!dir.path().join("01.csv").exists());
    }

    #[test]
    fn test_one_past_boundary_spills_to_second_page() {
        let dir = tempfile::tempdir().unwrap();
        let table = synthetic_table(DEFAULT_ROWS_PER_PAGE + 1);

        let pages = write_pages(&table, dir.path(), DEFAULT_ROWS_PER_PAGE).unwrap();
        assert_eq!(pages, 2);

        let first = fs::read_to_string(dir.path().join("00.csv")).unwrap();
        assert_eq!(first.lines().count(), DEFAULT_ROWS_PER_PAGE + 1);
        let second = fs::read_to_string(dir.path().join("01.csv")).unwrap();
        assert_eq!(second.lines().count(), 2);
    }

    #[test]
    fn test_empty_table_writes_no_pages() {
        let dir = tempfile::tempdir().unwrap();
        let pages = write_pages(&RecordTable::default(), dir.path(), 10).unwrap();
        assert_eq!(pages, 0);
        assert!(!dir.path().join("00.csv").exists());
    }

    #[test]
    fn test_header_row_on_every_page() {
        let dir = tempfile::tempdir().unwrap();
        let table = synthetic_table(3);

        write_pages(&table, dir.path(), 2).unwrap();

        for page in ["00.csv", "01.csv"] {
            let body = fs::read_to_string(dir.path().join(page)).unwrap();
            assert_eq!(body.lines().next(), Some("ID,Lieu,Epoque,Nom,Titre"));
        }
    }

    #[test]
    fn test_zero_rows_per_page_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = write_pages(&RecordTable::default(), dir.path(), 0);
        assert!(matches!(result, Err(TabulatorError::Config(_))));
    }
}
