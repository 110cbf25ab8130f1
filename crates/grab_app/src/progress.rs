use grab_core::{Phase, ProgressView};
use grab_engine::ProgressSink;
use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}";

/// Terminal progress bar whose length follows the scheduled count.
pub struct TerminalProgress {
    bar: ProgressBar,
}

impl TerminalProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        bar.set_message("Fetching feed listings...");
        Self { bar }
    }
}

impl Default for TerminalProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for TerminalProgress {
    fn update(&mut self, view: &ProgressView, counter_delta: u64) {
        let (len, _) = view.bar();
        self.bar.set_length(len);
        self.bar.inc(counter_delta);
        if view.description.is_empty() {
            if view.phase == Phase::Downloading {
                self.bar.set_message("Downloading...");
            }
        } else {
            self.bar.set_message(view.description.clone());
        }
    }

    fn finish(&mut self, view: &ProgressView) {
        let (len, pos) = view.bar();
        self.bar.set_length(len);
        self.bar.set_position(pos);
        self.bar.finish_with_message(view.description.clone());
    }
}
