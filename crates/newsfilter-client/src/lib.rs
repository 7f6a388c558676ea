pub mod extractor;
pub mod fetcher;

pub use extractor::ScraperExtractor;
pub use fetcher::{FETCH_TIMEOUT, ReqwestFetcher};
