use crate::{Phase, StateMessage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Coordinator moved to another lifecycle phase.
    PhaseChanged(Phase),
    /// A fetcher is about to enqueue `count` candidates for `feed`.
    Scheduled { feed: String, count: u64 },
    /// A worker reported a state transition for one image.
    Image(StateMessage),
    /// The message stream was closed; no further transitions will arrive.
    StreamClosed,
}
