use grab_core::{
    update, DownloadState, Effect, Image, Msg, Phase, ProgressState, ProgressTotals, ProgressView,
    StateMessage,
};
use grab_logging::{grab_debug, grab_info};
use tokio::sync::mpsc;

/// Renders progress. Owned by the aggregator for the whole run.
pub trait ProgressSink: Send {
    /// Called after every state change; `counter_delta` is how many items
    /// just reached a terminal state (0 or 1).
    fn update(&mut self, view: &ProgressView, counter_delta: u64);

    /// Called once, after the message stream closed.
    fn finish(&mut self, view: &ProgressView);
}

/// Reports progress through the logger only.
#[derive(Debug, Default)]
pub struct LogProgressSink;

impl ProgressSink for LogProgressSink {
    fn update(&mut self, view: &ProgressView, counter_delta: u64) {
        if counter_delta > 0 {
            let (len, pos) = view.bar();
            grab_debug!("[{}/{}] {}", pos, len, view.description);
        }
    }

    fn finish(&mut self, view: &ProgressView) {
        grab_info!("{}", view.description);
    }
}

/// Sending half of the state message stream. Cloned into every fetcher and
/// worker; the stream closes when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<Msg>,
}

impl EventSender {
    pub fn phase(&self, phase: Phase) {
        self.send(Msg::PhaseChanged(phase));
    }

    pub fn scheduled(&self, feed: &str, count: u64) {
        self.send(Msg::Scheduled {
            feed: feed.to_string(),
            count,
        });
    }

    pub fn transition(&self, image: Image, state: DownloadState) {
        self.send(Msg::Image(StateMessage::new(image, state)));
    }

    fn send(&self, msg: Msg) {
        // The aggregator outlives every sender, so a failed send means the
        // run is already being torn down.
        let _ = self.tx.send(msg);
    }
}

pub fn event_stream() -> (EventSender, mpsc::UnboundedReceiver<Msg>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EventSender { tx }, rx)
}

/// Consumes messages until the stream closes, then reports the summary.
/// This task is the only writer of the totals.
pub async fn aggregate(
    mut rx: mpsc::UnboundedReceiver<Msg>,
    mut sink: Box<dyn ProgressSink>,
) -> ProgressTotals {
    let mut state = ProgressState::new();
    while let Some(msg) = rx.recv().await {
        state = apply(state, msg, sink.as_mut());
    }
    state = apply(state, Msg::StreamClosed, sink.as_mut());
    state.totals()
}

fn apply(state: ProgressState, msg: Msg, sink: &mut dyn ProgressSink) -> ProgressState {
    let (state, effects) = update(state, msg);
    for effect in effects {
        match effect {
            Effect::Render { counter_delta } => sink.update(&state.view(), counter_delta),
            Effect::ReportSummary(_) => sink.finish(&state.view()),
        }
    }
    state
}
