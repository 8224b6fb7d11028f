//! Integration tests for the tabulator

#[cfg(test)]
mod tests {
    use crate::{Tabulator, TabulatorConfig, DEFAULT_ROWS_PER_PAGE};
    use serde_json::json;
    use std::fs;
    use std::path::Path;

    fn test_config(root: &Path) -> TabulatorConfig {
        TabulatorConfig {
            json_dir: root.join("json"),
            csv_dir: root.join("csv"),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }

    fn write_day(dir: &Path, day: &str, count: usize) {
        let records: Vec<_> = (0..count)
            .map(|i| json!({"lieu": "", "epoque": "", "nom": format!("Saint {}", i), "titre": "martyr"}))
            .collect();
        fs::write(
            dir.join(format!("{}.json", day)),
            serde_json::to_string(&records).unwrap(),
        )
        .unwrap();
    }

    #[test]
    fn test_three_day_synthetic_calendar() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        fs::create_dir_all(&config.json_dir).unwrap();

        // 5, 0 and 301 records across three days; every other day missing.
        write_day(&config.json_dir, "01-01", 5);
        write_day(&config.json_dir, "01-02", 0);
        write_day(&config.json_dir, "01-03", 301);

        let summary = Tabulator::new(config.clone()).run().unwrap();
        assert_eq!(summary.rows, 306);
        assert_eq!(summary.pages, 2);

        let first = fs::read_to_string(config.csv_dir.join("00.csv")).unwrap();
        let second = fs::read_to_string(config.csv_dir.join("01.csv")).unwrap();
        let data_rows = |body: &str| body.lines().count() - 1;
        assert_eq!(data_rows(&first) + data_rows(&second), 306);
        assert_eq!(data_rows(&first), DEFAULT_ROWS_PER_PAGE);

        // Day order then in-day order, with the index resetting per day.
        let first_ids: Vec<String> = first
            .lines()
            .skip(1)
            .map(|l| l.split(',').next().unwrap().to_string())
            .collect();
        assert_eq!(first_ids[0], "01-01-00");
        assert_eq!(first_ids[4], "01-01-04");
        assert_eq!(first_ids[5], "01-03-00");
        for (i, id) in first_ids.iter().enumerate().skip(5) {
            assert_eq!(id, &format!("01-03-{:02}", i - 5));
        }
    }

    #[test]
    fn test_exactly_one_full_page() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        fs::create_dir_all(&config.json_dir).unwrap();
        write_day(&config.json_dir, "06-15", DEFAULT_ROWS_PER_PAGE);

        let summary = Tabulator::new(config.clone()).run().unwrap();
        assert_eq!(summary.rows, DEFAULT_ROWS_PER_PAGE);
        assert_eq!(summary.pages, 1);
    }

    #[test]
    fn test_single_record_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        fs::create_dir_all(&config.json_dir).unwrap();
        fs::write(
            config.json_dir.join("01-01.json"),
            json!([{"lieu": "Tours", "epoque": "IVe siècle", "nom": "Martin", "titre": "évêque"}])
                .to_string(),
        )
        .unwrap();

        Tabulator::new(config.clone()).run().unwrap();

        let body = fs::read_to_string(config.csv_dir.join("00.csv")).unwrap();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines[0], "ID,Lieu,Epoque,Nom,Titre");
        assert_eq!(lines[1], "01-01-00,Tours,IVe siècle,Martin,évêque");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_empty_calendar_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        fs::create_dir_all(&config.json_dir).unwrap();

        let summary = Tabulator::new(config.clone()).run().unwrap();
        assert_eq!(summary.rows, 0);
        assert_eq!(summary.pages, 0);
        assert!(!config.csv_dir.join("00.csv").exists());
    }
}
