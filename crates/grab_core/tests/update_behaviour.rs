use std::sync::Once;

use grab_core::{
    update, DownloadState, Effect, Image, Msg, Phase, ProgressState, ProgressTotals, StateMessage,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(grab_logging::initialize_for_tests);
}

fn image(feed: &str, image_id: &str) -> Image {
    Image {
        image_id: image_id.to_string(),
        link: format!("https://i.imgur.com/{image_id}.jpg"),
        feed: feed.to_string(),
        ..Image::default()
    }
}

fn transition(
    state: ProgressState,
    feed: &str,
    id: &str,
    s: DownloadState,
) -> (ProgressState, Vec<Effect>) {
    update(state, Msg::Image(StateMessage::new(image(feed, id), s)))
}

fn scheduled(state: ProgressState, count: u64) -> ProgressState {
    update(
        state,
        Msg::Scheduled {
            feed: "pics".to_string(),
            count,
        },
    )
    .0
}

#[test]
fn pending_updates_description_only() {
    init_logging();
    let state = scheduled(ProgressState::new(), 1);

    let (state, effects) = transition(state, "pics", "abc", DownloadState::Pending);

    assert_eq!(effects, vec![Effect::Render { counter_delta: 0 }]);
    let view = state.view();
    assert_eq!(view.description, "Downloading image abc from r/pics...");
    assert_eq!(
        view.totals,
        ProgressTotals {
            scheduled: 1,
            ..ProgressTotals::default()
        }
    );
}

#[test]
fn each_terminal_state_bumps_exactly_one_counter() {
    init_logging();
    let state = scheduled(ProgressState::new(), 3);

    let (state, effects) = transition(state, "pics", "a", DownloadState::Success);
    assert_eq!(effects, vec![Effect::Render { counter_delta: 1 }]);
    let (state, _) = transition(state, "pics", "b", DownloadState::Skipped);
    let (state, _) = transition(state, "frontpage", "c", DownloadState::Failed);

    let view = state.view();
    assert_eq!(
        view.totals,
        ProgressTotals {
            scheduled: 3,
            downloaded: 1,
            skipped: 1,
            failed: 1,
        }
    );
    assert_eq!(view.description, "Failed downloading image c from frontpage...");
    assert_eq!(view.bar(), (3, 3));
}

#[test]
fn scheduled_accumulates_across_feeds_and_ignores_zero() {
    init_logging();
    let state = scheduled(ProgressState::new(), 2);
    let (state, effects) = update(
        state,
        Msg::Scheduled {
            feed: "empty".to_string(),
            count: 0,
        },
    );
    assert!(effects.is_empty());
    let state = scheduled(state, 5);

    assert_eq!(state.totals().scheduled, 7);
}

#[test]
fn scheduled_names_the_feed_in_the_description() {
    init_logging();
    let state = scheduled(ProgressState::new(), 4);
    assert_eq!(state.view().description, "Scheduled 4 images from r/pics...");

    let (state, _) = update(
        state,
        Msg::Scheduled {
            feed: grab_core::FRONTPAGE.to_string(),
            count: 2,
        },
    );
    assert_eq!(state.view().description, "Scheduled 2 images from frontpage...");
}

#[test]
fn stream_closed_reports_summary_and_completes() {
    init_logging();
    let state = scheduled(ProgressState::new(), 2);
    let (state, _) = transition(state, "pics", "a", DownloadState::Success);
    let (state, _) = transition(state, "pics", "b", DownloadState::Skipped);

    let (state, effects) = update(state, Msg::StreamClosed);

    let totals = ProgressTotals {
        scheduled: 2,
        downloaded: 1,
        skipped: 1,
        failed: 0,
    };
    assert_eq!(effects, vec![Effect::ReportSummary(totals)]);
    let view = state.view();
    assert!(view.complete);
    assert_eq!(view.phase, Phase::ReportingDone);
    assert_eq!(
        view.description,
        "2 images processed. Downloaded 1, skipped 1 and failed 0."
    );
}

#[test]
fn messages_after_completion_are_ignored() {
    init_logging();
    let (state, _) = update(ProgressState::new(), Msg::StreamClosed);
    let before = state.clone();

    let (state, effects) = transition(state, "pics", "late", DownloadState::Success);

    assert_eq!(state, before);
    assert!(effects.is_empty());
}

#[test]
fn phase_only_moves_forward() {
    init_logging();
    let (state, effects) = update(ProgressState::new(), Msg::PhaseChanged(Phase::Downloading));
    assert_eq!(effects.len(), 1);
    assert_eq!(state.view().phase, Phase::Downloading);

    let (state, effects) = update(state, Msg::PhaseChanged(Phase::FetchingMetadata));
    assert!(effects.is_empty());
    assert_eq!(state.view().phase, Phase::Downloading);
}
