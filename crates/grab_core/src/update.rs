use crate::{Effect, Msg, ProgressState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ProgressState, msg: Msg) -> (ProgressState, Vec<Effect>) {
    // Once the summary is out the totals are final.
    if state.is_complete() {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::PhaseChanged(phase) => {
            if state.advance_phase(phase) {
                vec![Effect::Render { counter_delta: 0 }]
            } else {
                Vec::new()
            }
        }
        Msg::Scheduled { feed, count } => {
            if count == 0 {
                return (state, Vec::new());
            }
            state.add_scheduled(&feed, count);
            vec![Effect::Render { counter_delta: 0 }]
        }
        Msg::Image(message) => {
            let counter_delta = state.apply_transition(&message);
            vec![Effect::Render { counter_delta }]
        }
        Msg::StreamClosed => {
            state.finish();
            vec![Effect::ReportSummary(state.totals())]
        }
    };

    (state, effects)
}
