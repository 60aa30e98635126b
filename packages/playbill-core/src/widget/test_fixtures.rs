//! Shared test fakes for the widget boundary and the notification transport.
//!
//! Used by adapter, tracker and session tests to drive the callback protocol
//! without a live widget.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::config::PlayerParams;
use crate::error::{PlayerError, PlayerResult};
use crate::metadata::VideoMetadata;
use crate::notify::NotificationTransport;
use crate::widget::adapter::RawPlayerState;
use crate::widget::handle::{PlayerHandle, VideoData};
use crate::widget::runtime::{PlayerCallbacks, RuntimeReadyFn, ScriptHost, WidgetRuntime};

/// Fake player instance with mutable reported data.
pub struct FakePlayer {
    data: Mutex<VideoData>,
    duration: Mutex<f64>,
    destroyed: AtomicBool,
}

impl FakePlayer {
    pub fn new(data: VideoData, duration: f64) -> Self {
        Self {
            data: Mutex::new(data),
            duration: Mutex::new(duration),
            destroyed: AtomicBool::new(false),
        }
    }

    /// Replaces what the player reports, simulating the widget learning more
    /// about the video (e.g. duration once decoding begins).
    pub fn set_reported(&self, data: VideoData, duration: f64) {
        *self.data.lock() = data;
        *self.duration.lock() = duration;
    }

    pub fn destroyed(&self) -> bool {
        self.destroyed.load(Ordering::SeqCst)
    }
}

impl PlayerHandle for FakePlayer {
    fn video_data(&self) -> VideoData {
        self.data.lock().clone()
    }

    fn duration_seconds(&self) -> f64 {
        *self.duration.lock()
    }

    fn destroy(&self) {
        self.destroyed.store(true, Ordering::SeqCst);
    }
}

/// One construction recorded by [`FakeRuntime`], with the registered
/// callbacks so tests can drive the event protocol.
pub struct ConstructedPlayer {
    pub mount_id: String,
    pub params: PlayerParams,
    pub player: Arc<FakePlayer>,
    callbacks: PlayerCallbacks,
}

impl ConstructedPlayer {
    pub fn fire_ready(&self) {
        (self.callbacks.on_ready)(self.player.clone());
    }

    pub fn fire_state(&self, state: RawPlayerState) {
        (self.callbacks.on_state_change)(self.player.clone(), state);
    }
}

/// Fake widget runtime recording every construction.
#[derive(Default)]
pub struct FakeRuntime {
    constructed: Mutex<Vec<Arc<ConstructedPlayer>>>,
    next_data: Mutex<Option<(VideoData, f64)>>,
}

impl FakeRuntime {
    /// Sets what the next constructed player will report.
    pub fn report_next(&self, data: VideoData, duration: f64) {
        *self.next_data.lock() = Some((data, duration));
    }

    pub fn constructed(&self) -> Vec<Arc<ConstructedPlayer>> {
        self.constructed.lock().clone()
    }
}

impl WidgetRuntime for FakeRuntime {
    fn construct_player(
        &self,
        mount_id: &str,
        params: PlayerParams,
        callbacks: PlayerCallbacks,
    ) -> PlayerResult<Arc<dyn PlayerHandle>> {
        let (data, duration) = self.next_data.lock().take().unwrap_or_default();
        let player = Arc::new(FakePlayer::new(data, duration));
        self.constructed.lock().push(Arc::new(ConstructedPlayer {
            mount_id: mount_id.to_string(),
            params,
            player: player.clone(),
            callbacks,
        }));
        Ok(player)
    }
}

/// Fake script host capturing the injected ready callback.
#[derive(Default)]
pub struct FakeHost {
    existing: Mutex<Option<Arc<dyn WidgetRuntime>>>,
    pending: Mutex<Option<RuntimeReadyFn>>,
    injections: AtomicUsize,
}

impl FakeHost {
    /// Host whose runtime is already present at mount time.
    pub fn with_runtime(runtime: Arc<dyn WidgetRuntime>) -> Self {
        Self {
            existing: Mutex::new(Some(runtime)),
            ..Self::default()
        }
    }

    /// How many times the bootstrap script was injected.
    pub fn injections(&self) -> usize {
        self.injections.load(Ordering::SeqCst)
    }

    /// Fires the captured ready callback, completing the bootstrap.
    pub fn finish_load(&self, runtime: Arc<dyn WidgetRuntime>) {
        if let Some(on_ready) = self.pending.lock().take() {
            on_ready(runtime);
        }
    }

    /// Drops the captured callback without firing it (a script that loaded
    /// but never announced itself).
    pub fn drop_pending_callback(&self) {
        self.pending.lock().take();
    }
}

impl ScriptHost for FakeHost {
    fn existing_runtime(&self) -> Option<Arc<dyn WidgetRuntime>> {
        self.existing.lock().clone()
    }

    fn inject_script(&self, on_ready: RuntimeReadyFn) {
        self.injections.fetch_add(1, Ordering::SeqCst);
        *self.pending.lock() = Some(on_ready);
    }
}

/// Transport that records every dispatched metadata snapshot.
#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<VideoMetadata>>,
}

impl RecordingTransport {
    pub fn sent(&self) -> Vec<VideoMetadata> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl NotificationTransport for RecordingTransport {
    async fn dispatch(&self, metadata: VideoMetadata) -> PlayerResult<()> {
        self.sent.lock().push(metadata);
        Ok(())
    }
}

/// Transport that always fails, for exercising the failure-containment path.
pub struct FailingTransport;

#[async_trait]
impl NotificationTransport for FailingTransport {
    async fn dispatch(&self, _metadata: VideoMetadata) -> PlayerResult<()> {
        Err(PlayerError::Dispatch("endpoint unreachable".into()))
    }
}
