use crate::{Phase, ProgressTotals};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressView {
    pub phase: Phase,
    /// Latest per-item line, or the summary once complete.
    pub description: String,
    pub totals: ProgressTotals,
    pub complete: bool,
}

impl ProgressView {
    /// Bar length and position for a renderer.
    pub fn bar(&self) -> (u64, u64) {
        (self.totals.scheduled, self.totals.finished())
    }
}
