pub mod cache;
pub mod export;

pub use cache::JsonFileCache;
pub use export::CsvExporter;
