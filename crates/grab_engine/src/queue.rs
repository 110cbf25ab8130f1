use grab_core::Image;
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("download queue closed before image {image_id} could be enqueued")]
pub struct QueueClosed {
    pub image_id: String,
}

/// Creates the FIFO between metadata fetchers and the download dispatcher.
///
/// The queue closes once every producer handle has been dropped or closed;
/// the consumer then drains what is left and sees `None`.
pub fn download_queue(capacity: usize) -> (QueueProducer, QueueConsumer) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (QueueProducer { tx }, QueueConsumer { rx })
}

#[derive(Debug, Clone)]
pub struct QueueProducer {
    tx: mpsc::Sender<Image>,
}

impl QueueProducer {
    /// Waits for room in the queue, then enqueues `image`.
    pub async fn enqueue(&self, image: Image) -> Result<(), QueueClosed> {
        self.tx.send(image).await.map_err(|err| QueueClosed {
            image_id: err.0.image_id,
        })
    }

    /// Gives up this handle. The queue closes when the last handle goes.
    pub fn close(self) {}
}

#[derive(Debug)]
pub struct QueueConsumer {
    rx: mpsc::Receiver<Image>,
}

impl QueueConsumer {
    /// Next candidate, or `None` once the queue is closed and empty.
    pub async fn next(&mut self) -> Option<Image> {
        self.rx.recv().await
    }
}
