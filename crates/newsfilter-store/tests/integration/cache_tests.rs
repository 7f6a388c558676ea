use newsfilter_core::traits::HeadlineCache;
use newsfilter_core::{HeadlineRecord, filter_headlines};
use newsfilter_store::JsonFileCache;

use crate::common::{sample_headlines, workdir};

#[tokio::test]
async fn save_then_load_preserves_content_and_order() {
    let tmp = workdir();
    let cache = JsonFileCache::new(tmp.path().join("cached_news.json"));
    let headlines = sample_headlines();

    cache.save(&headlines).await.unwrap();
    let loaded = cache.load().await.unwrap();

    assert_eq!(loaded, Some(headlines));
}

#[tokio::test]
async fn empty_collection_round_trips_as_present_cache() {
    let tmp = workdir();
    let cache = JsonFileCache::new(tmp.path().join("cached_news.json"));

    cache.save(&[]).await.unwrap();

    assert_eq!(cache.load().await.unwrap(), Some(vec![]));
}

#[tokio::test]
async fn save_overwrites_previous_contents() {
    let tmp = workdir();
    let cache = JsonFileCache::new(tmp.path().join("cached_news.json"));

    cache.save(&sample_headlines()).await.unwrap();
    let replacement = vec![HeadlineRecord::new("X", "Only one left")];
    cache.save(&replacement).await.unwrap();

    assert_eq!(cache.load().await.unwrap(), Some(replacement));
}

#[tokio::test]
async fn save_creates_missing_parent_directory() {
    let tmp = workdir();
    let cache = JsonFileCache::new(tmp.path().join("state/nested/cached_news.json"));

    cache.save(&sample_headlines()).await.unwrap();

    assert!(cache.path().exists());
}

#[tokio::test]
async fn reads_hand_written_cache_file() {
    let tmp = workdir();
    let path = tmp.path().join("cached_news.json");
    std::fs::write(
        &path,
        r#"[{"source":"X","headline":"Storm warning issued"}]"#,
    )
    .unwrap();

    let loaded = JsonFileCache::new(&path).load().await.unwrap().unwrap();
    let filtered = filter_headlines(&loaded, "storm");

    assert_eq!(
        filtered,
        vec![HeadlineRecord::new("X", "Storm warning issued")]
    );
}

#[tokio::test]
async fn cache_file_is_a_json_array_of_records() {
    let tmp = workdir();
    let cache = JsonFileCache::new(tmp.path().join("cached_news.json"));
    cache
        .save(&[HeadlineRecord::new("A", "Market rallies")])
        .await
        .unwrap();

    let raw = std::fs::read_to_string(cache.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(
        value,
        serde_json::json!([{"source": "A", "headline": "Market rallies"}])
    );
}
