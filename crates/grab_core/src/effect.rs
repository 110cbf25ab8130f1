use crate::ProgressTotals;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Redraw progress; `counter_delta` is how far the position advanced.
    Render { counter_delta: u64 },
    /// Emit the final summary and mark progress complete.
    ReportSummary(ProgressTotals),
}
