//! Composition root for one mounted player.
//!
//! [`PlayerSession`] wires the loader, adapter and tracker together and owns
//! the mount lifecycle: construction, config-change re-initialization and
//! teardown. Wiring order matters: the tracker's consumer task starts
//! before the adapter mounts, so no callback can arrive without a consumer.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio_stream::wrappers::WatchStream;

use crate::config::PlayerConfig;
use crate::error::PlayerResult;
use crate::metadata::{PlaybackStatus, PlayerView, VideoMetadata};
use crate::notify::NotificationTransport;
use crate::runtime::TokioSpawner;
use crate::tracker::reducer::DispatchPolicy;
use crate::tracker::PlaybackTracker;
use crate::widget::adapter::WidgetAdapter;
use crate::widget::runtime::{LoadPhase, RuntimeLoader};

/// One mounted player: adapter plus tracker, wired to a shared loader.
///
/// Dropping the session destroys the embedded instance.
pub struct PlayerSession {
    adapter: Arc<WidgetAdapter>,
    tracker: Arc<PlaybackTracker>,
}

impl PlayerSession {
    /// Mounts the widget at `mount_id` and starts tracking.
    ///
    /// The loader is shared across mounts, so only the first session in the
    /// process pays for the script load. Must be called within a Tokio
    /// runtime context.
    pub async fn mount(
        config: PlayerConfig,
        mount_id: impl Into<String>,
        loader: Arc<RuntimeLoader>,
        transport: Arc<dyn NotificationTransport>,
        policy: DispatchPolicy,
    ) -> PlayerResult<Self> {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let tracker = Arc::new(PlaybackTracker::new(
            transport,
            policy,
            TokioSpawner::current(),
        ));
        tracker.start(events_rx);

        let adapter = Arc::new(WidgetAdapter::new(loader, mount_id, events_tx));
        adapter.mount(config).await?;

        Ok(Self { adapter, tracker })
    }

    /// Observes the display read model.
    pub fn view(&self) -> watch::Receiver<PlayerView> {
        self.tracker.view()
    }

    /// The read model as a stream, for hosts that re-render per change.
    pub fn view_stream(&self) -> WatchStream<PlayerView> {
        WatchStream::new(self.tracker.view())
    }

    /// Current playback status.
    pub fn status(&self) -> PlaybackStatus {
        self.tracker.status()
    }

    /// Most recently captured metadata, if any.
    pub fn metadata(&self) -> Option<VideoMetadata> {
        self.tracker.metadata()
    }

    /// Observes the widget handshake phase.
    pub fn load_phase(&self) -> watch::Receiver<LoadPhase> {
        self.adapter.phase()
    }

    /// Applies a config change.
    ///
    /// A config with the same video/playlist identity is a no-op, since the
    /// config is immutable per mount. A changed identity destroys the old
    /// instance first, resets the tracker to its initial state, and
    /// reconstructs from `ScriptReady` (the script is not reloaded).
    pub async fn set_config(&self, config: PlayerConfig) -> PlayerResult<()> {
        if self.adapter.same_source(&config) {
            tracing::debug!("config keeps the same playback source; nothing to do");
            return Ok(());
        }
        self.adapter.teardown();
        self.tracker.reset();
        self.adapter.mount(config).await
    }

    /// Destroys the embedded instance. The session can not be remounted.
    pub fn unmount(&self) {
        self.adapter.teardown();
    }
}
