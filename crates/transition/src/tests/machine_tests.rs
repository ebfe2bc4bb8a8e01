use super::*;

fn navigate(href: &str) -> TransitionEvent {
    TransitionEvent::Navigate {
        href: href.to_string(),
        animated: true,
    }
}

fn delivered(path: &str) -> TransitionEvent {
    TransitionEvent::RouteDelivered {
        path: path.to_string(),
    }
}

#[test]
fn navigating_to_current_path_is_a_no_op() {
    let mut machine = TransitionMachine::new("/about");
    for href in ["/about", "/about/", "/about?ref=nav"] {
        assert!(machine.handle(navigate(href)).is_empty(), "{href}");
        assert_eq!(machine.state(), TransitionState::Idle);
        assert_eq!(machine.pending_target(), None);
    }
}

#[test]
fn navigate_pushes_route_and_starts_cover_together() {
    let mut machine = TransitionMachine::new("/");
    let effects = machine.handle(navigate("/works/?tab=all"));
    assert_eq!(
        effects,
        vec![
            Effect::PushRoute("/works/?tab=all".to_string()),
            Effect::BeginCover
        ]
    );
    assert_eq!(machine.state(), TransitionState::Covering);
    assert_eq!(machine.pending_target(), Some("/works"));
}

#[test]
fn requests_while_transitioning_are_dropped() {
    let mut machine = TransitionMachine::new("/");
    machine.handle(navigate("/works"));

    for state_driver in [None, Some(TransitionEvent::CoverComplete)] {
        if let Some(event) = state_driver {
            machine.handle(event);
        }
        let before = (machine.state(), machine.pending_target().map(str::to_string));
        assert!(machine.handle(navigate("/blog")).is_empty());
        assert_eq!(
            (machine.state(), machine.pending_target().map(str::to_string)),
            before
        );
    }
}

#[test]
fn navigation_and_deliveries_while_revealing_change_nothing() {
    let mut machine = TransitionMachine::new("/");
    machine.handle(navigate("/works"));
    machine.handle(TransitionEvent::CoverComplete);
    machine.handle(delivered("/works"));
    assert_eq!(machine.state(), TransitionState::Revealing);

    // Before the deferred frame, then after it.
    for frame_ready in [false, true] {
        if frame_ready {
            assert_eq!(
                machine.handle(TransitionEvent::FrameReady),
                vec![Effect::ScrollToTop, Effect::BeginReveal]
            );
        }
        assert!(machine.handle(navigate("/blog")).is_empty(), "frame_ready={frame_ready}");
        assert!(machine.handle(delivered("/about")).is_empty(), "frame_ready={frame_ready}");
        assert_eq!(machine.state(), TransitionState::Revealing);
        assert_eq!(machine.pending_target(), Some("/works"));
        assert_eq!(machine.current_path(), "/about");
    }

    assert_eq!(
        machine.handle(TransitionEvent::RevealComplete),
        vec![Effect::HideOverlay]
    );
    assert_eq!(machine.state(), TransitionState::Idle);
}

#[test]
fn cover_finishing_first_waits_in_covered_for_the_route() {
    let mut machine = TransitionMachine::new("/");
    machine.handle(navigate("/works"));

    assert!(machine.handle(TransitionEvent::CoverComplete).is_empty());
    assert_eq!(machine.state(), TransitionState::Covered);

    // A different route arriving does not release the cover.
    assert!(machine.handle(delivered("/about")).is_empty());
    assert_eq!(machine.state(), TransitionState::Covered);

    let effects = machine.handle(delivered("/works"));
    assert_eq!(
        effects,
        vec![
            Effect::DisplayLatest,
            Effect::SnapContentToRest,
            Effect::RequestFrame
        ]
    );
    assert_eq!(machine.state(), TransitionState::Revealing);
}

#[test]
fn route_arriving_first_reveals_as_soon_as_cover_completes() {
    let mut machine = TransitionMachine::new("/");
    machine.handle(navigate("/blog"));

    assert!(machine.handle(delivered("/blog/")).is_empty());
    assert_eq!(machine.state(), TransitionState::Covering);

    let effects = machine.handle(TransitionEvent::CoverComplete);
    assert_eq!(effects[0], Effect::DisplayLatest);
    assert_eq!(machine.state(), TransitionState::Revealing);
}

#[test]
fn snap_to_rest_precedes_deferred_scroll_and_reveal() {
    let mut machine = TransitionMachine::new("/");
    machine.handle(navigate("/works"));
    machine.handle(delivered("/works"));
    let reveal_start = machine.handle(TransitionEvent::CoverComplete);

    let snap = reveal_start
        .iter()
        .position(|effect| *effect == Effect::SnapContentToRest)
        .expect("snap");
    let frame = reveal_start
        .iter()
        .position(|effect| *effect == Effect::RequestFrame)
        .expect("frame request");
    assert!(snap < frame);
    assert!(!reveal_start.contains(&Effect::ScrollToTop));
    assert!(!reveal_start.contains(&Effect::BeginReveal));

    assert_eq!(
        machine.handle(TransitionEvent::FrameReady),
        vec![Effect::ScrollToTop, Effect::BeginReveal]
    );
}

#[test]
fn full_cycle_returns_to_idle_and_clears_pending_target() {
    let mut machine = TransitionMachine::new("/");
    machine.handle(navigate("/works"));
    machine.handle(TransitionEvent::CoverComplete);
    machine.handle(delivered("/works"));
    machine.handle(TransitionEvent::FrameReady);
    assert_eq!(machine.pending_target(), Some("/works"));

    assert_eq!(
        machine.handle(TransitionEvent::RevealComplete),
        vec![Effect::HideOverlay]
    );
    assert_eq!(machine.state(), TransitionState::Idle);
    assert_eq!(machine.pending_target(), None);
    assert_eq!(machine.current_path(), "/works");
}

#[test]
fn delivery_while_idle_displays_immediately() {
    let mut machine = TransitionMachine::new("/");
    assert_eq!(machine.handle(delivered("/contact")), vec![Effect::DisplayLatest]);
    assert_eq!(machine.state(), TransitionState::Idle);
}

#[test]
fn unanimated_navigation_stays_idle() {
    let mut machine = TransitionMachine::new("/");
    let effects = machine.handle(TransitionEvent::Navigate {
        href: "/skills".into(),
        animated: false,
    });
    assert_eq!(effects, vec![Effect::PushRoute("/skills".into())]);
    assert_eq!(machine.state(), TransitionState::Idle);
    assert_eq!(machine.pending_target(), None);
}

#[test]
fn stale_completion_signals_are_ignored() {
    let mut machine = TransitionMachine::new("/");
    assert!(machine.handle(TransitionEvent::CoverComplete).is_empty());
    assert!(machine.handle(TransitionEvent::FrameReady).is_empty());
    assert!(machine.handle(TransitionEvent::RevealComplete).is_empty());
    assert_eq!(machine.state(), TransitionState::Idle);

    machine.handle(navigate("/works"));
    machine.handle(delivered("/works"));
    machine.handle(TransitionEvent::CoverComplete);
    // Reveal cannot complete before the deferred frame started it.
    assert!(machine.handle(TransitionEvent::RevealComplete).is_empty());
    machine.handle(TransitionEvent::FrameReady);
    assert!(machine.handle(TransitionEvent::FrameReady).is_empty());
    assert_eq!(machine.state(), TransitionState::Revealing);
}
