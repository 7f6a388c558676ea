use newsfilter_core::models::HeadlineRecord;
use tempfile::TempDir;

/// Headlines with non-ASCII text, quotes and a duplicate, in a fixed order.
pub fn sample_headlines() -> Vec<HeadlineRecord> {
    vec![
        HeadlineRecord::new("Wire", "NASA launches probe"),
        HeadlineRecord::new("Daily", "Zürich café reopens"),
        HeadlineRecord::new("Wire", "Senator says \"no comment\""),
        HeadlineRecord::new("Daily", "NASA launches probe"),
    ]
}

/// Temporary working directory; dropping it removes everything inside.
pub fn workdir() -> TempDir {
    TempDir::new().expect("failed to create temp dir")
}
