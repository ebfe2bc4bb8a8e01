use serde::Serialize;
use shared::path::{normalize_path, path_matches};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionState {
    #[default]
    Idle,
    Covering,
    Covered,
    Revealing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionEvent {
    Navigate { href: String, animated: bool },
    CoverComplete,
    RouteDelivered { path: String },
    FrameReady,
    RevealComplete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PushRoute(String),
    BeginCover,
    DisplayLatest,
    SnapContentToRest,
    RequestFrame,
    ScrollToTop,
    BeginReveal,
    HideOverlay,
}

#[derive(Debug, Clone)]
pub struct TransitionMachine {
    state: TransitionState,
    pending_target: Option<String>,
    current_path: String,
    awaiting_frame: bool,
}

impl TransitionMachine {
    pub fn new(current_path: impl Into<String>) -> Self {
        Self {
            state: TransitionState::Idle,
            pending_target: None,
            current_path: current_path.into(),
            awaiting_frame: false,
        }
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    pub fn pending_target(&self) -> Option<&str> {
        self.pending_target.as_deref()
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn is_transitioning(&self) -> bool {
        self.state != TransitionState::Idle
    }

    /// Applies one event. Events that do not apply in the current state
    /// produce no effects and leave the machine untouched.
    pub fn handle(&mut self, event: TransitionEvent) -> Vec<Effect> {
        match event {
            TransitionEvent::Navigate { href, animated } => self.navigate(href, animated),
            TransitionEvent::CoverComplete => self.cover_complete(),
            TransitionEvent::RouteDelivered { path } => self.route_delivered(path),
            TransitionEvent::FrameReady => self.frame_ready(),
            TransitionEvent::RevealComplete => self.reveal_complete(),
        }
    }

    fn navigate(&mut self, href: String, animated: bool) -> Vec<Effect> {
        if self.state != TransitionState::Idle {
            return Vec::new();
        }
        let target = normalize_path(&href);
        if target == normalize_path(&self.current_path) {
            return Vec::new();
        }
        if !animated {
            return vec![Effect::PushRoute(href)];
        }

        self.pending_target = Some(target);
        self.state = TransitionState::Covering;
        // Route push and cover start in the same step.
        vec![Effect::PushRoute(href), Effect::BeginCover]
    }

    fn cover_complete(&mut self) -> Vec<Effect> {
        if self.state != TransitionState::Covering {
            return Vec::new();
        }
        self.state = TransitionState::Covered;
        if self.delivered_pending_route() {
            self.begin_reveal()
        } else {
            Vec::new()
        }
    }

    fn route_delivered(&mut self, path: String) -> Vec<Effect> {
        self.current_path = path;
        match self.state {
            TransitionState::Idle => vec![Effect::DisplayLatest],
            TransitionState::Covered if self.delivered_pending_route() => self.begin_reveal(),
            _ => Vec::new(),
        }
    }

    fn frame_ready(&mut self) -> Vec<Effect> {
        if self.state != TransitionState::Revealing || !self.awaiting_frame {
            return Vec::new();
        }
        self.awaiting_frame = false;
        vec![Effect::ScrollToTop, Effect::BeginReveal]
    }

    fn reveal_complete(&mut self) -> Vec<Effect> {
        if self.state != TransitionState::Revealing || self.awaiting_frame {
            return Vec::new();
        }
        self.state = TransitionState::Idle;
        self.pending_target = None;
        vec![Effect::HideOverlay]
    }

    fn delivered_pending_route(&self) -> bool {
        self.pending_target
            .as_deref()
            .is_some_and(|pending| path_matches(&self.current_path, pending))
    }

    fn begin_reveal(&mut self) -> Vec<Effect> {
        self.state = TransitionState::Revealing;
        self.awaiting_frame = true;
        vec![
            Effect::DisplayLatest,
            Effect::SnapContentToRest,
            Effect::RequestFrame,
        ]
    }
}

#[cfg(test)]
#[path = "tests/machine_tests.rs"]
mod tests;
