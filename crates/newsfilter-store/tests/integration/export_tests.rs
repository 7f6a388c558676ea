use chrono::NaiveDate;
use newsfilter_core::HeadlineRecord;
use newsfilter_core::traits::Exporter;
use newsfilter_store::CsvExporter;

use crate::common::workdir;

#[tokio::test]
async fn export_creates_directory_and_single_file() {
    let tmp = workdir();
    let exporter = CsvExporter::new(tmp.path().join("exports"));
    let headlines = vec![
        HeadlineRecord::new("A", "Market rallies"),
        HeadlineRecord::new("X", "Storm warning issued"),
    ];

    let path = exporter.export(&headlines).await.unwrap();

    let entries: Vec<_> = std::fs::read_dir(exporter.dir())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(entries, vec![path.clone()]);

    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("news_export_"));
    assert!(name.ends_with(".csv"));
    // news_export_YYYYMMDD_HHMMSS.csv
    assert_eq!(name.len(), "news_export_".len() + 15 + ".csv".len());

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(
        lines,
        vec!["source,headline", "A,Market rallies", "X,Storm warning issued"]
    );
}

#[tokio::test]
async fn export_at_uses_timestamp_in_name() {
    let tmp = workdir();
    let exporter = CsvExporter::new(tmp.path().join("exports"));
    let at = NaiveDate::from_ymd_opt(2024, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 58)
        .unwrap();

    let path = exporter
        .export_at(&[HeadlineRecord::new("A", "Year ends")], at)
        .await
        .unwrap();

    assert_eq!(
        path,
        tmp.path().join("exports/news_export_20241231_235958.csv")
    );
}

#[tokio::test]
async fn same_second_exports_share_a_file() {
    let tmp = workdir();
    let exporter = CsvExporter::new(tmp.path().join("exports"));
    let at = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let first = exporter
        .export_at(&[HeadlineRecord::new("A", "First")], at)
        .await
        .unwrap();
    let second = exporter
        .export_at(&[HeadlineRecord::new("B", "Second")], at)
        .await
        .unwrap();

    assert_eq!(first, second);
    let contents = std::fs::read_to_string(&second).unwrap();
    assert_eq!(contents, "source,headline\nB,Second\n");
}

#[tokio::test]
async fn export_into_a_file_path_fails() {
    let tmp = workdir();
    let blocker = tmp.path().join("exports");
    std::fs::write(&blocker, "not a directory").unwrap();

    let err = CsvExporter::new(&blocker)
        .export(&[HeadlineRecord::new("A", "x")])
        .await
        .unwrap_err();

    assert!(matches!(err, newsfilter_core::AppError::ExportError(_)));
}
