//! Grab engine: feed listing fetch, download pipeline and progress aggregation.
mod admission;
mod aggregator;
mod config;
mod coordinator;
mod feed;
mod fetch;
mod listing;
mod metadata;
mod persist;
mod queue;
mod types;
mod worker;

pub use admission::{AdmissionController, AdmissionPermit};
pub use aggregator::{aggregate, event_stream, EventSender, LogProgressSink, ProgressSink};
pub use config::{
    FetchSettings, ScrapeConfig, DEFAULT_LIMIT, DEFAULT_MAX_CONCURRENT, DEFAULT_QUEUE_CAPACITY,
    MAX_LIMIT,
};
pub use coordinator::run;
pub use feed::Feed;
pub use fetch::{Fetcher, ReqwestFetcher};
pub use listing::{parse_listing, Child, ChildData, Listing, ListingData};
pub use persist::{create_destination, destination_taken, ensure_output_dir};
pub use queue::{download_queue, QueueClosed, QueueConsumer, QueueProducer};
pub use types::{FailureKind, FeedReport, FetchError, GrabError, RunSummary};
