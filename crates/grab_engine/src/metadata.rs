use std::sync::Arc;

use grab_core::{feed_label, DedupSet, Image};
use grab_logging::{grab_debug, grab_error, grab_info, grab_warn};

use crate::coordinator::PipelineContext;
use crate::listing::{parse_listing, Listing};
use crate::persist::ensure_output_dir;
use crate::queue::QueueProducer;
use crate::{Feed, FeedReport, GrabError};

/// Fetches one feed's listing and enqueues its new candidates in listing order.
///
/// Never fails: a listing that cannot be fetched or parsed counts as empty, so
/// sibling feeds are unaffected. The feed's [`DedupSet`] is created here and
/// handed back in the report.
pub(crate) async fn fetch_feed(
    ctx: Arc<PipelineContext>,
    feed: Feed,
    queue: QueueProducer,
) -> FeedReport {
    let label = feed_label(&feed.name);
    let candidates = match load_listing(&ctx, &feed).await {
        Ok(listing) => listing.candidates(),
        Err(err) => {
            grab_warn!("{}: {}; treating listing as empty", label, err);
            Vec::new()
        }
    };

    let mut seen = DedupSet::new(feed.name.clone());
    let found = candidates.len();
    let survivors: Vec<Image> = candidates
        .into_iter()
        .filter(|image| seen.insert(&image.image_id))
        .map(|mut image| {
            // Front-page items carry their own subreddit; they belong to this feed's folder.
            image.feed = feed.name.clone();
            image
        })
        .collect();

    let dir = ctx.config.feed_dir(&feed.name);
    if let Err(err) = ensure_output_dir(&dir).await {
        grab_warn!("{}: {}", label, err);
    }

    grab_info!(
        "{}: {} candidates, {} scheduled",
        label,
        found,
        survivors.len()
    );
    ctx.events.scheduled(&feed.name, survivors.len() as u64);

    let mut scheduled = 0;
    for image in survivors {
        if let Err(err) = queue.enqueue(image).await {
            grab_error!("{}: {}", label, err);
            break;
        }
        scheduled += 1;
    }

    FeedReport {
        feed: feed.name,
        scheduled,
        seen,
    }
}

async fn load_listing(ctx: &PipelineContext, feed: &Feed) -> Result<Listing, GrabError> {
    let url = feed.listing_url(&ctx.config.fetch.listing_host)?;
    grab_debug!("fetching listing {}", url);
    let bytes = ctx.fetcher.fetch_listing(url.as_str()).await?;
    Ok(parse_listing(&bytes)?)
}
