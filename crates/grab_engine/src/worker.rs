use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use grab_core::{DownloadState, Image};
use grab_logging::{grab_debug, grab_error, grab_warn};
use tokio::task::JoinSet;

use crate::admission::AdmissionController;
use crate::coordinator::PipelineContext;
use crate::persist::{create_destination, destination_taken};
use crate::queue::QueueConsumer;
use crate::GrabError;

/// Drains the queue, admitting one download per unit of capacity, until the
/// queue is closed and empty and every admitted download has finished.
/// Returns how many images were dispatched.
pub(crate) async fn run_workers(
    ctx: Arc<PipelineContext>,
    mut queue: QueueConsumer,
    admission: AdmissionController,
) -> usize {
    let mut workers = JoinSet::new();
    let mut dispatched = 0;

    while let Some(image) = queue.next().await {
        let permit = admission.admit().await;
        let ctx = ctx.clone();
        workers.spawn(async move {
            let _permit = permit;
            download_guarded(&ctx, image).await;
        });
        dispatched += 1;

        while let Some(result) = workers.try_join_next() {
            log_join(result);
        }
    }

    while let Some(result) = workers.join_next().await {
        log_join(result);
    }
    dispatched
}

fn log_join(result: Result<(), tokio::task::JoinError>) {
    if let Err(err) = result {
        grab_error!("download task failed: {}", err);
    }
}

/// Runs one download; a panic still produces the image's terminal message.
async fn download_guarded(ctx: &PipelineContext, image: Image) {
    let fallback = image.clone();
    if AssertUnwindSafe(download_image(ctx, image))
        .catch_unwind()
        .await
        .is_err()
    {
        grab_error!("download of {} panicked", fallback.link);
        ctx.events.transition(fallback, DownloadState::Failed);
    }
}

/// Emits `Pending`, then exactly one terminal state for `image`.
pub(crate) async fn download_image(ctx: &PipelineContext, mut image: Image) {
    ctx.events.transition(image.clone(), DownloadState::Pending);

    image.apply_rewrite();
    let state = match transfer(ctx, &image).await {
        Ok(state) => state,
        Err(err) => {
            grab_warn!("failed to download {}: {}", image.download_link(), err);
            DownloadState::Failed
        }
    };
    grab_debug!("{} {}", state.label(), image.download_link());
    ctx.events.transition(image, state);
}

async fn transfer(ctx: &PipelineContext, image: &Image) -> Result<DownloadState, GrabError> {
    let path = ctx.config.feed_dir(&image.feed).join(image.file_name());
    if destination_taken(&path).await? {
        return Ok(DownloadState::Skipped);
    }

    let mut file = create_destination(&path).await?;
    let written = ctx.fetcher.download(image.download_link(), &mut file).await?;
    grab_debug!("wrote {} bytes to {:?}", written, path);
    Ok(DownloadState::Success)
}
