//! Playback Tracker & Notifier.
//!
//! Owns [`PlaybackStatus`] and [`VideoMetadata`], consumes adapter events
//! strictly in arrival order, and decides when the outbound notification
//! fires. The display layer observes everything read-only through a watch
//! channel; nothing else may mutate the view.

pub mod reducer;

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::metadata::{PlaybackStatus, PlayerView, VideoMetadata};
use crate::notify::NotificationTransport;
use crate::runtime::{TaskSpawner, TokioSpawner};
use crate::widget::adapter::AdapterEvent;
use crate::widget::handle::PlayerHandle;

use reducer::{reduce, DispatchPolicy};

/// Tracks playback state and dispatches now-playing notifications.
///
/// There is one logical writer: the adapter's callback stream, consumed by
/// the single task started with [`Self::start`]. Dispatch is fire-and-forget
/// through the injected transport; a slow or failing delivery never stalls
/// status updates or metadata extraction.
pub struct PlaybackTracker {
    transport: Arc<dyn NotificationTransport>,
    policy: DispatchPolicy,
    spawner: TokioSpawner,
    view_tx: watch::Sender<PlayerView>,
}

impl PlaybackTracker {
    /// Creates a tracker dispatching through `transport` under `policy`.
    pub fn new(
        transport: Arc<dyn NotificationTransport>,
        policy: DispatchPolicy,
        spawner: TokioSpawner,
    ) -> Self {
        let (view_tx, _) = watch::channel(PlayerView::default());
        Self {
            transport,
            policy,
            spawner,
            view_tx,
        }
    }

    /// Observes the read model; re-broadcast on every change.
    pub fn view(&self) -> watch::Receiver<PlayerView> {
        self.view_tx.subscribe()
    }

    /// Snapshot of the current view.
    pub fn current(&self) -> PlayerView {
        self.view_tx.borrow().clone()
    }

    /// Current playback status.
    pub fn status(&self) -> PlaybackStatus {
        self.view_tx.borrow().status
    }

    /// Most recently captured metadata, if any.
    pub fn metadata(&self) -> Option<VideoMetadata> {
        self.view_tx.borrow().metadata.clone()
    }

    /// Starts the single consumer task for the adapter's event channel.
    ///
    /// One receiver, one task: arrival order is processing order.
    pub fn start(self: &Arc<Self>, mut events: mpsc::UnboundedReceiver<AdapterEvent>) {
        let tracker = Arc::clone(self);
        self.spawner.spawn(async move {
            while let Some(event) = events.recv().await {
                tracker.apply(event);
            }
        });
    }

    /// Applies one adapter event.
    ///
    /// Exposed for hosts that drive events themselves; events must be
    /// applied in arrival order.
    pub fn apply(&self, event: AdapterEvent) {
        match event {
            AdapterEvent::Ready { handle } => {
                let metadata = capture_metadata(handle.as_ref());
                tracing::debug!(video_id = %metadata.video_id, "player ready");
                // Readiness stores metadata but never notifies.
                self.view_tx
                    .send_modify(|view| view.metadata = Some(metadata));
            }
            AdapterEvent::StateChanged { handle, state } => {
                let prior = self.view_tx.borrow().status;
                let transition = reduce(state, prior, self.policy);
                tracing::debug!(
                    raw = state.code(),
                    status = ?transition.status,
                    notify = transition.notify,
                    "state change"
                );
                if transition.status == PlaybackStatus::Playing {
                    // Re-extract on every entry into Playing: duration may
                    // only be known once decoding begins.
                    let metadata = capture_metadata(handle.as_ref());
                    self.view_tx.send_modify(|view| {
                        view.status = transition.status;
                        view.metadata = Some(metadata.clone());
                    });
                    if transition.notify {
                        self.dispatch(metadata);
                    }
                } else {
                    self.view_tx
                        .send_modify(|view| view.status = transition.status);
                }
            }
        }
    }

    /// Returns the view to its initial value ahead of a player
    /// reconstruction: status Paused, no metadata.
    pub fn reset(&self) {
        self.view_tx.send_replace(PlayerView::default());
    }

    fn dispatch(&self, metadata: VideoMetadata) {
        let transport = Arc::clone(&self.transport);
        self.spawner.spawn(async move {
            let video_id = metadata.video_id.clone();
            if let Err(err) = transport.dispatch(metadata).await {
                // Diagnostics only; the view is never touched on failure.
                tracing::warn!(%err, %video_id, "notification dispatch failed");
            }
        });
    }
}

/// Queries the handle for a fresh metadata snapshot.
///
/// Whatever the handle reports is stored as-is; partial fields are not
/// validated or defaulted.
fn capture_metadata(handle: &dyn PlayerHandle) -> VideoMetadata {
    let data = handle.video_data();
    VideoMetadata {
        video_id: data.video_id,
        title: data.title,
        author: data.author,
        duration_seconds: handle.duration_seconds(),
    }
}
