use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tracing::debug;

use crate::{
    coordinator::{PageTransitions, TransitionCoordinator, TransitionHost},
    machine::TransitionState,
};

#[derive(Debug, Error)]
#[error("transition driver has shut down")]
pub struct DriverClosed;

#[derive(Debug)]
pub enum TransitionSignal<C> {
    Navigate(String),
    CoverComplete,
    Delivered { path: String, content: C },
    FrameReady,
    RevealComplete,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionSnapshot {
    pub state: TransitionState,
    pub pending_target: Option<String>,
}

impl TransitionSnapshot {
    pub fn is_transitioning(&self) -> bool {
        self.state != TransitionState::Idle
    }
}

pub struct TransitionHandle<C> {
    signals: mpsc::UnboundedSender<TransitionSignal<C>>,
    snapshot: watch::Receiver<TransitionSnapshot>,
}

impl<C> Clone for TransitionHandle<C> {
    fn clone(&self) -> Self {
        Self {
            signals: self.signals.clone(),
            snapshot: self.snapshot.clone(),
        }
    }
}

impl<C> TransitionHandle<C> {
    pub fn navigate(&self, href: impl Into<String>) -> Result<(), DriverClosed> {
        send(&self.signals, TransitionSignal::Navigate(href.into()))
    }

    pub fn deliver(&self, path: impl Into<String>, content: C) -> Result<(), DriverClosed> {
        send(
            &self.signals,
            TransitionSignal::Delivered {
                path: path.into(),
                content,
            },
        )
    }

    pub fn snapshot(&self) -> TransitionSnapshot {
        self.snapshot.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<TransitionSnapshot> {
        self.snapshot.clone()
    }

    /// Signal sender for the host. It does not keep the driver alive, so a
    /// host owned by the coordinator cannot prevent shutdown.
    pub fn signaller(&self) -> TransitionSignaller<C> {
        TransitionSignaller {
            signals: self.signals.downgrade(),
        }
    }
}

impl<C> PageTransitions for TransitionHandle<C> {
    fn request_navigate(&mut self, href: &str) -> bool {
        self.navigate(href).is_ok()
    }

    fn is_transitioning(&self) -> bool {
        self.snapshot.borrow().is_transitioning()
    }
}

pub struct TransitionSignaller<C> {
    signals: mpsc::WeakUnboundedSender<TransitionSignal<C>>,
}

impl<C> Clone for TransitionSignaller<C> {
    fn clone(&self) -> Self {
        Self {
            signals: self.signals.clone(),
        }
    }
}

impl<C> TransitionSignaller<C> {
    pub fn cover_complete(&self) -> Result<(), DriverClosed> {
        self.send(TransitionSignal::CoverComplete)
    }

    pub fn deliver(&self, path: impl Into<String>, content: C) -> Result<(), DriverClosed> {
        self.send(TransitionSignal::Delivered {
            path: path.into(),
            content,
        })
    }

    pub fn frame_ready(&self) -> Result<(), DriverClosed> {
        self.send(TransitionSignal::FrameReady)
    }

    pub fn reveal_complete(&self) -> Result<(), DriverClosed> {
        self.send(TransitionSignal::RevealComplete)
    }

    fn send(&self, signal: TransitionSignal<C>) -> Result<(), DriverClosed> {
        let signals = self.signals.upgrade().ok_or(DriverClosed)?;
        send(&signals, signal)
    }
}

fn send<C>(
    signals: &mpsc::UnboundedSender<TransitionSignal<C>>,
    signal: TransitionSignal<C>,
) -> Result<(), DriverClosed> {
    signals.send(signal).map_err(|_| DriverClosed)
}

pub struct TransitionInbox<C> {
    signals: mpsc::UnboundedReceiver<TransitionSignal<C>>,
    snapshot: watch::Sender<TransitionSnapshot>,
}

pub fn channel<C>() -> (TransitionHandle<C>, TransitionInbox<C>) {
    let (signal_tx, signal_rx) = mpsc::unbounded_channel();
    let (snapshot_tx, snapshot_rx) = watch::channel(TransitionSnapshot::default());
    (
        TransitionHandle {
            signals: signal_tx,
            snapshot: snapshot_rx,
        },
        TransitionInbox {
            signals: signal_rx,
            snapshot: snapshot_tx,
        },
    )
}

impl<C> TransitionInbox<C> {
    /// Applies signals until every [`TransitionHandle`] is dropped, then
    /// returns the coordinator.
    pub async fn run<H>(mut self, mut coordinator: TransitionCoordinator<H>) -> TransitionCoordinator<H>
    where
        H: TransitionHost<Content = C>,
    {
        self.publish(&coordinator);
        while let Some(signal) = self.signals.recv().await {
            match signal {
                TransitionSignal::Navigate(href) => {
                    let accepted = coordinator.request_navigate(&href);
                    debug!(%href, accepted, "navigation requested");
                }
                TransitionSignal::CoverComplete => coordinator.cover_complete(),
                TransitionSignal::Delivered { path, content } => {
                    coordinator.content_delivered(path, content)
                }
                TransitionSignal::FrameReady => coordinator.frame_ready(),
                TransitionSignal::RevealComplete => coordinator.reveal_complete(),
            }
            self.publish(&coordinator);
        }
        debug!("transition driver stopped");
        coordinator
    }

    fn publish<H: TransitionHost>(&self, coordinator: &TransitionCoordinator<H>) {
        let next = TransitionSnapshot {
            state: coordinator.state(),
            pending_target: coordinator.pending_target().map(str::to_string),
        };
        self.snapshot.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
