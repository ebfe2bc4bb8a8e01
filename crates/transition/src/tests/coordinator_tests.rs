use super::*;
use crate::test_support::{HostCall, RecordingHost};

fn coordinator() -> TransitionCoordinator<RecordingHost> {
    let mut coordinator = TransitionCoordinator::new(RecordingHost::mounted(), "/");
    coordinator.content_delivered("/", "home".to_string());
    coordinator.host_mut().calls.clear();
    coordinator
}

#[test]
fn same_path_request_never_reaches_router() {
    let mut coordinator = TransitionCoordinator::new(RecordingHost::mounted(), "/about");
    assert!(!coordinator.request_navigate("/about/"));
    assert!(coordinator.host().calls.is_empty());
    assert_eq!(coordinator.state(), TransitionState::Idle);
}

#[test]
fn route_push_is_not_deferred_behind_cover() {
    let mut coordinator = coordinator();
    assert!(coordinator.request_navigate("/works"));
    assert_eq!(
        coordinator.host().calls,
        vec![HostCall::Push("/works".into()), HostCall::BeginCover]
    );
    assert!(coordinator.is_transitioning());
}

#[test]
fn slow_route_holds_cover_until_delivery() {
    let mut coordinator = coordinator();
    coordinator.request_navigate("/works");
    coordinator.cover_complete();
    assert_eq!(coordinator.state(), TransitionState::Covered);
    assert!(coordinator.host().position(&HostCall::SnapToRest).is_none());

    coordinator.content_delivered("/works", "works".into());
    assert_eq!(coordinator.state(), TransitionState::Revealing);
    assert!(coordinator
        .host()
        .calls
        .ends_with(&[HostCall::Display("works".into()), HostCall::SnapToRest, HostCall::RequestFrame]));
}

#[test]
fn fast_route_is_held_until_cover_completes() {
    let mut coordinator = coordinator();
    coordinator.request_navigate("/blog");
    coordinator.content_delivered("/blog", "blog".into());

    assert_eq!(coordinator.state(), TransitionState::Covering);
    assert!(coordinator.host().position(&HostCall::Display("blog".into())).is_none());

    coordinator.cover_complete();
    assert_eq!(coordinator.state(), TransitionState::Revealing);
    assert!(coordinator.host().position(&HostCall::Display("blog".into())).is_some());
}

#[test]
fn complete_cycle_orders_host_calls() {
    let mut coordinator = coordinator();
    coordinator.request_navigate("/works");
    coordinator.content_delivered("/works", "works".into());
    coordinator.cover_complete();
    coordinator.frame_ready();
    coordinator.reveal_complete();

    assert_eq!(
        coordinator.host().calls,
        vec![
            HostCall::Push("/works".into()),
            HostCall::BeginCover,
            HostCall::Display("works".into()),
            HostCall::SnapToRest,
            HostCall::RequestFrame,
            HostCall::ScrollToTop,
            HostCall::BeginReveal,
            HostCall::HideOverlay,
        ]
    );
    assert_eq!(coordinator.state(), TransitionState::Idle);
    assert_eq!(coordinator.pending_target(), None);
}

#[test]
fn clicks_during_transition_only_trigger_the_first() {
    let mut coordinator = coordinator();
    assert!(coordinator.request_navigate("/works"));
    assert!(!coordinator.request_navigate("/blog"));
    assert!(!coordinator.request_navigate("/contact"));

    let pushes: Vec<_> = coordinator
        .host()
        .calls
        .iter()
        .filter(|call| matches!(call, HostCall::Push(_)))
        .collect();
    assert_eq!(pushes, vec![&HostCall::Push("/works".into())]);
    assert_eq!(coordinator.pending_target(), Some("/works"));
}

#[test]
fn revealing_ignores_clicks_and_holds_late_content() {
    let mut coordinator = coordinator();
    coordinator.request_navigate("/works");
    coordinator.cover_complete();
    coordinator.content_delivered("/works", "works".into());
    let calls_at_reveal = coordinator.host().calls.len();

    assert!(!coordinator.request_navigate("/blog"));
    coordinator.content_delivered("/about", "about".into());
    coordinator.frame_ready();
    assert!(!coordinator.request_navigate("/contact"));

    let after: Vec<_> = coordinator.host().calls[calls_at_reveal..].to_vec();
    assert_eq!(after, vec![HostCall::ScrollToTop, HostCall::BeginReveal]);
    assert_eq!(coordinator.state(), TransitionState::Revealing);
    assert_eq!(coordinator.pending_target(), Some("/works"));
}

#[test]
fn unmounted_surfaces_degrade_to_plain_navigation() {
    let mut coordinator = TransitionCoordinator::new(RecordingHost::unmounted(), "/");
    assert!(coordinator.request_navigate("/skills"));
    assert_eq!(coordinator.state(), TransitionState::Idle);

    coordinator.content_delivered("/skills", "skills".into());
    assert_eq!(
        coordinator.host().calls,
        vec![
            HostCall::Push("/skills".into()),
            HostCall::Display("skills".into())
        ]
    );
}

#[test]
fn first_load_content_passes_straight_through() {
    let mut coordinator = TransitionCoordinator::new(RecordingHost::mounted(), "/");
    coordinator.content_delivered("/", "home".into());
    assert_eq!(coordinator.host().calls, vec![HostCall::Display("home".into())]);
    assert!(!coordinator.is_transitioning());
}

#[test]
fn custom_timing_is_kept() {
    let timing = TransitionTiming {
        cover: std::time::Duration::from_millis(250),
        reveal: std::time::Duration::from_millis(400),
    };
    let coordinator = TransitionCoordinator::new(RecordingHost::mounted(), "/").with_timing(timing);
    assert_eq!(coordinator.timing(), &timing);
}
