use tracing::debug;

use crate::{
    machine::{Effect, TransitionEvent, TransitionMachine, TransitionState},
    surface::TransitionTiming,
};

/// The router plus the two visual handles a coordinator drives. Animation
/// methods only start work; the host reports each completion back through
/// the matching `TransitionCoordinator` method.
pub trait TransitionHost {
    type Content: Clone;

    fn surfaces_mounted(&self) -> bool;

    fn push_route(&mut self, href: &str);

    fn begin_cover(&mut self, timing: &TransitionTiming);

    fn display(&mut self, content: Self::Content);

    fn snap_content_to_rest(&mut self);

    fn request_frame(&mut self);

    fn scroll_to_top(&mut self);

    fn begin_reveal(&mut self, timing: &TransitionTiming);

    fn hide_overlay(&mut self);
}

pub trait PageTransitions {
    fn request_navigate(&mut self, href: &str) -> bool;

    fn is_transitioning(&self) -> bool;
}

pub struct TransitionCoordinator<H: TransitionHost> {
    machine: TransitionMachine,
    host: H,
    timing: TransitionTiming,
    latest: Option<H::Content>,
}

impl<H: TransitionHost> TransitionCoordinator<H> {
    pub fn new(host: H, current_path: impl Into<String>) -> Self {
        Self {
            machine: TransitionMachine::new(current_path),
            host,
            timing: TransitionTiming::default(),
            latest: None,
        }
    }

    pub fn with_timing(mut self, timing: TransitionTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn state(&self) -> TransitionState {
        self.machine.state()
    }

    pub fn pending_target(&self) -> Option<&str> {
        self.machine.pending_target()
    }

    pub fn current_path(&self) -> &str {
        self.machine.current_path()
    }

    pub fn timing(&self) -> &TransitionTiming {
        &self.timing
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn cover_complete(&mut self) {
        self.dispatch(TransitionEvent::CoverComplete);
    }

    pub fn content_delivered(&mut self, path: impl Into<String>, content: H::Content) {
        self.latest = Some(content);
        self.dispatch(TransitionEvent::RouteDelivered { path: path.into() });
    }

    pub fn frame_ready(&mut self) {
        self.dispatch(TransitionEvent::FrameReady);
    }

    pub fn reveal_complete(&mut self) {
        self.dispatch(TransitionEvent::RevealComplete);
    }

    fn dispatch(&mut self, event: TransitionEvent) -> bool {
        let before = self.machine.state();
        let effects = self.machine.handle(event);
        let after = self.machine.state();
        if before != after {
            debug!(
                from = ?before,
                to = ?after,
                pending = self.machine.pending_target().unwrap_or_default(),
                "page transition state changed"
            );
        }

        let applied = !effects.is_empty();
        for effect in effects {
            self.apply(effect);
        }
        applied
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::PushRoute(href) => self.host.push_route(&href),
            Effect::BeginCover => self.host.begin_cover(&self.timing),
            Effect::DisplayLatest => {
                if let Some(content) = self.latest.clone() {
                    self.host.display(content);
                }
            }
            Effect::SnapContentToRest => self.host.snap_content_to_rest(),
            Effect::RequestFrame => self.host.request_frame(),
            Effect::ScrollToTop => self.host.scroll_to_top(),
            Effect::BeginReveal => self.host.begin_reveal(&self.timing),
            Effect::HideOverlay => self.host.hide_overlay(),
        }
    }
}

impl<H: TransitionHost> PageTransitions for TransitionCoordinator<H> {
    fn request_navigate(&mut self, href: &str) -> bool {
        let animated = self.host.surfaces_mounted();
        let accepted = self.dispatch(TransitionEvent::Navigate {
            href: href.to_string(),
            animated,
        });
        if accepted && !animated {
            debug!(href, "transition surfaces not mounted, navigated without animation");
        }
        accepted
    }

    fn is_transitioning(&self) -> bool {
        self.machine.is_transitioning()
    }
}

#[cfg(test)]
#[path = "tests/coordinator_tests.rs"]
mod tests;
