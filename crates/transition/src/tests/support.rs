use crate::{TransitionHost, TransitionTiming};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HostCall {
    Push(String),
    BeginCover,
    Display(String),
    SnapToRest,
    RequestFrame,
    ScrollToTop,
    BeginReveal,
    HideOverlay,
}

#[derive(Debug)]
pub(crate) struct RecordingHost {
    pub(crate) mounted: bool,
    pub(crate) calls: Vec<HostCall>,
}

impl RecordingHost {
    pub(crate) fn mounted() -> Self {
        Self {
            mounted: true,
            calls: Vec::new(),
        }
    }

    pub(crate) fn unmounted() -> Self {
        Self {
            mounted: false,
            calls: Vec::new(),
        }
    }

    pub(crate) fn position(&self, call: &HostCall) -> Option<usize> {
        self.calls.iter().position(|c| c == call)
    }
}

impl TransitionHost for RecordingHost {
    type Content = String;

    fn surfaces_mounted(&self) -> bool {
        self.mounted
    }

    fn push_route(&mut self, href: &str) {
        self.calls.push(HostCall::Push(href.to_string()));
    }

    fn begin_cover(&mut self, _timing: &TransitionTiming) {
        self.calls.push(HostCall::BeginCover);
    }

    fn display(&mut self, content: String) {
        self.calls.push(HostCall::Display(content));
    }

    fn snap_content_to_rest(&mut self) {
        self.calls.push(HostCall::SnapToRest);
    }

    fn request_frame(&mut self) {
        self.calls.push(HostCall::RequestFrame);
    }

    fn scroll_to_top(&mut self) {
        self.calls.push(HostCall::ScrollToTop);
    }

    fn begin_reveal(&mut self, _timing: &TransitionTiming) {
        self.calls.push(HostCall::BeginReveal);
    }

    fn hide_overlay(&mut self) {
        self.calls.push(HostCall::HideOverlay);
    }
}
