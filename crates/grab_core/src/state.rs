use crate::view_model::ProgressView;
use crate::Image;

/// Coordinator lifecycle, in the only order it can advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Phase {
    #[default]
    FetchingMetadata,
    Downloading,
    ReportingDone,
}

/// Per-image lifecycle: one optional `Pending`, then exactly one terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadState {
    Pending,
    Success,
    Skipped,
    Failed,
}

impl DownloadState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, DownloadState::Pending)
    }

    pub fn label(self) -> &'static str {
        match self {
            DownloadState::Pending => "Downloading",
            DownloadState::Success => "Downloaded",
            DownloadState::Skipped => "Skipped",
            DownloadState::Failed => "Failed downloading",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateMessage {
    pub image: Image,
    pub state: DownloadState,
}

impl StateMessage {
    pub fn new(image: Image, state: DownloadState) -> Self {
        Self { image, state }
    }
}

/// Running counters; every field only ever grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressTotals {
    pub scheduled: u64,
    pub downloaded: u64,
    pub skipped: u64,
    pub failed: u64,
}

impl ProgressTotals {
    pub fn finished(&self) -> u64 {
        self.downloaded + self.skipped + self.failed
    }

    pub fn summary_line(&self) -> String {
        format!(
            "{} images processed. Downloaded {}, skipped {} and failed {}.",
            self.scheduled, self.downloaded, self.skipped, self.failed
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressState {
    phase: Phase,
    totals: ProgressTotals,
    description: String,
    complete: bool,
}

impl ProgressState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ProgressView {
        ProgressView {
            phase: self.phase,
            description: self.description.clone(),
            totals: self.totals,
            complete: self.complete,
        }
    }

    pub fn totals(&self) -> ProgressTotals {
        self.totals
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub(crate) fn advance_phase(&mut self, phase: Phase) -> bool {
        if phase <= self.phase {
            return false;
        }
        self.phase = phase;
        true
    }

    pub(crate) fn add_scheduled(&mut self, feed: &str, count: u64) {
        self.totals.scheduled += count;
        self.description = format!("Scheduled {count} images from {}...", feed_label(feed));
    }

    /// Records one transition and returns how far the counters moved.
    pub(crate) fn apply_transition(&mut self, message: &StateMessage) -> u64 {
        self.description = format!(
            "{} image {} from {}...",
            message.state.label(),
            message.image.image_id,
            feed_label(&message.image.feed)
        );
        match message.state {
            DownloadState::Pending => return 0,
            DownloadState::Success => self.totals.downloaded += 1,
            DownloadState::Skipped => self.totals.skipped += 1,
            DownloadState::Failed => self.totals.failed += 1,
        }
        1
    }

    pub(crate) fn finish(&mut self) {
        self.phase = Phase::ReportingDone;
        self.description = self.totals.summary_line();
        self.complete = true;
    }
}

/// Human-readable feed name: `frontpage` as is, anything else as `r/<name>`.
pub fn feed_label(feed: &str) -> String {
    if feed == crate::FRONTPAGE {
        feed.to_string()
    } else {
        format!("r/{feed}")
    }
}
