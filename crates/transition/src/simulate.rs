use std::{fmt, time::Duration};

use tokio::{sync::mpsc, time::Instant};

use crate::{
    coordinator::TransitionHost, driver::TransitionSignaller, surface::TransitionTiming,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceStep {
    RoutePushed(String),
    RouteDelivered(String),
    CoverStarted,
    Displayed(String),
    SnappedToRest,
    FrameRequested,
    ScrolledToTop,
    RevealStarted,
    OverlayHidden,
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoutePushed(path) => write!(f, "route pushed {path}"),
            Self::RouteDelivered(path) => write!(f, "route delivered {path}"),
            Self::CoverStarted => f.write_str("cover started"),
            Self::Displayed(content) => write!(f, "displayed {content}"),
            Self::SnappedToRest => f.write_str("content snapped to rest"),
            Self::FrameRequested => f.write_str("frame requested"),
            Self::ScrolledToTop => f.write_str("scrolled to top"),
            Self::RevealStarted => f.write_str("reveal started"),
            Self::OverlayHidden => f.write_str("overlay hidden"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    pub at: Duration,
    pub step: TraceStep,
}

pub struct SimulatedHost {
    signaller: TransitionSignaller<String>,
    route_latency: Duration,
    frame_interval: Duration,
    mounted: bool,
    trace: mpsc::UnboundedSender<TraceEntry>,
    started: Instant,
}

impl SimulatedHost {
    pub fn new(
        signaller: TransitionSignaller<String>,
        route_latency: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<TraceEntry>) {
        let (trace, trace_rx) = mpsc::unbounded_channel();
        (
            Self {
                signaller,
                route_latency,
                frame_interval: Duration::from_millis(16),
                mounted: true,
                trace,
                started: Instant::now(),
            },
            trace_rx,
        )
    }

    pub fn with_surfaces_mounted(mut self, mounted: bool) -> Self {
        self.mounted = mounted;
        self
    }

    fn record(&self, step: TraceStep) {
        let _ = self.trace.send(TraceEntry {
            at: self.started.elapsed(),
            step,
        });
    }

    fn after<F>(&self, delay: Duration, signal: F)
    where
        F: FnOnce(&TransitionSignaller<String>) + Send + 'static,
    {
        let signaller = self.signaller.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            signal(&signaller);
        });
    }
}

impl TransitionHost for SimulatedHost {
    type Content = String;

    fn surfaces_mounted(&self) -> bool {
        self.mounted
    }

    fn push_route(&mut self, href: &str) {
        self.record(TraceStep::RoutePushed(href.to_string()));
        let path = href.split('?').next().unwrap_or(href).to_string();
        let trace = self.trace.clone();
        let started = self.started;
        self.after(self.route_latency, move |signaller| {
            let _ = trace.send(TraceEntry {
                at: started.elapsed(),
                step: TraceStep::RouteDelivered(path.clone()),
            });
            let content = format!("page:{path}");
            let _ = signaller.deliver(path, content);
        });
    }

    fn begin_cover(&mut self, timing: &TransitionTiming) {
        self.record(TraceStep::CoverStarted);
        self.after(timing.cover, |signaller| {
            let _ = signaller.cover_complete();
        });
    }

    fn display(&mut self, content: String) {
        self.record(TraceStep::Displayed(content));
    }

    fn snap_content_to_rest(&mut self) {
        self.record(TraceStep::SnappedToRest);
    }

    fn request_frame(&mut self) {
        self.record(TraceStep::FrameRequested);
        self.after(self.frame_interval, |signaller| {
            let _ = signaller.frame_ready();
        });
    }

    fn scroll_to_top(&mut self) {
        self.record(TraceStep::ScrolledToTop);
    }

    fn begin_reveal(&mut self, timing: &TransitionTiming) {
        self.record(TraceStep::RevealStarted);
        self.after(timing.reveal, |signaller| {
            let _ = signaller.reveal_complete();
        });
    }

    fn hide_overlay(&mut self) {
        self.record(TraceStep::OverlayHidden);
    }
}
