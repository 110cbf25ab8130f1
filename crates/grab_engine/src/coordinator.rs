use std::sync::Arc;

use grab_core::{Phase, ProgressTotals};
use grab_logging::{grab_error, grab_info};
use tokio::task::JoinSet;

use crate::admission::AdmissionController;
use crate::aggregator::{aggregate, event_stream, EventSender, ProgressSink};
use crate::metadata::fetch_feed;
use crate::queue::download_queue;
use crate::worker::run_workers;
use crate::{Feed, Fetcher, GrabError, RunSummary, ScrapeConfig};

/// Everything a stage needs, built once per run and shared by reference count.
pub(crate) struct PipelineContext {
    pub(crate) config: ScrapeConfig,
    pub(crate) fetcher: Arc<dyn Fetcher>,
    pub(crate) events: EventSender,
}

/// Runs the whole pipeline and returns once the summary has been reported.
///
/// Shutdown is staged: the download queue closes only after every metadata
/// fetcher has returned, and the message stream closes only after every
/// download has finished. Only configuration errors are returned; feed and
/// item failures end up in the totals.
pub async fn run(
    config: ScrapeConfig,
    fetcher: Arc<dyn Fetcher>,
    sink: Box<dyn ProgressSink>,
) -> Result<RunSummary, GrabError> {
    config.validate()?;
    let limit = config.effective_limit();
    let feeds: Vec<Feed> = config
        .resolved_feeds()
        .into_iter()
        .map(|name| Feed::new(name, config.page_type, limit))
        .collect();

    let (events, event_rx) = event_stream();
    let aggregator = tokio::spawn(aggregate(event_rx, sink));

    let admission = AdmissionController::new(config.max_concurrent_downloads);
    let (producer, consumer) = download_queue(config.queue_capacity);
    let ctx = Arc::new(PipelineContext {
        config,
        fetcher,
        events,
    });

    grab_info!(
        "fetching {} feed(s), page type {}, limit {}, up to {} concurrent downloads",
        feeds.len(),
        ctx.config.page_type,
        limit,
        admission.capacity()
    );
    let workers = tokio::spawn(run_workers(ctx.clone(), consumer, admission));

    let mut fetchers = JoinSet::new();
    for (index, feed) in feeds.into_iter().enumerate() {
        let ctx = ctx.clone();
        let producer = producer.clone();
        fetchers.spawn(async move { (index, fetch_feed(ctx, feed, producer).await) });
    }
    let mut reports = Vec::new();
    while let Some(result) = fetchers.join_next().await {
        match result {
            Ok(report) => reports.push(report),
            Err(err) => grab_error!("metadata fetcher task failed: {}", err),
        }
    }
    reports.sort_by_key(|(index, _)| *index);
    let feeds: Vec<_> = reports.into_iter().map(|(_, report)| report).collect();

    // Every fetcher has returned, so nothing can enqueue any more.
    producer.close();
    ctx.events.phase(Phase::Downloading);
    grab_info!("metadata done, draining download queue");

    let dispatched = workers.await.unwrap_or_else(|err| {
        grab_error!("download dispatcher failed: {}", err);
        0
    });
    grab_info!("{} download(s) finished", dispatched);

    // All fetchers and workers are gone; this is the last sender, and dropping
    // it lets the aggregator report.
    drop(ctx);
    let totals = aggregator.await.unwrap_or_else(|err| {
        grab_error!("progress aggregator failed: {}", err);
        ProgressTotals::default()
    });

    Ok(RunSummary { totals, feeds })
}
