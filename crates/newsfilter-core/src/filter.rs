use crate::models::HeadlineRecord;

/// Keep the headlines containing `keyword`, ignoring case.
///
/// An empty keyword matches everything. Relative order is preserved.
pub fn filter_headlines(headlines: &[HeadlineRecord], keyword: &str) -> Vec<HeadlineRecord> {
    let needle = keyword.to_lowercase();
    headlines
        .iter()
        .filter(|h| h.headline.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
