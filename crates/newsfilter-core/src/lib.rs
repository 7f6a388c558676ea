pub mod aggregate;
pub mod error;
pub mod filter;
pub mod models;
pub mod registry;
pub mod report;
pub mod session;
#[cfg(any(test, feature = "testutil"))]
pub mod testutil;
pub mod traits;

pub use aggregate::{AggregateEvent, AggregateReporter, Aggregator, TracingAggregateReporter};
pub use error::AppError;
pub use filter::filter_headlines;
pub use models::{HeadlineOrigin, HeadlineRecord, SourceDescriptor};
pub use registry::load_sources;
pub use session::{SessionOutcome, run_session};
pub use traits::{Decisions, Exporter, Extractor, Fetcher, HeadlineCache};
