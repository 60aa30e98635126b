//! Callback normalization and the per-mount handshake.
//!
//! The adapter turns the widget's two callbacks into [`AdapterEvent`]s on an
//! unbounded channel. The channel has a single producer side (one live player
//! instance at a time) and a single consumer (the tracker task), so events
//! are processed strictly in arrival order, never reordered or batched.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{mpsc, watch};

use crate::config::PlayerConfig;
use crate::error::PlayerResult;

use super::handle::PlayerHandle;
use super::runtime::{LoadPhase, PlayerCallbacks, RuntimeLoader, WidgetRuntime};

/// Raw playback states reported by the embedded widget, by wire code.
///
/// `Other` preserves codes a future widget version might add; they fold into
/// the not-playing side of the status mapping like everything except
/// `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawPlayerState {
    /// -1: loaded but never started.
    Unstarted,
    /// 0: playback reached the end.
    Ended,
    /// 1: actively playing.
    Playing,
    /// 2: paused by the user or the engine.
    Paused,
    /// 3: waiting for data.
    Buffering,
    /// 5: a video is cued and ready to start.
    Cued,
    /// Any code this crate does not know about.
    Other(i32),
}

impl RawPlayerState {
    /// Maps a wire code to a state.
    pub fn from_code(code: i32) -> Self {
        match code {
            -1 => Self::Unstarted,
            0 => Self::Ended,
            1 => Self::Playing,
            2 => Self::Paused,
            3 => Self::Buffering,
            5 => Self::Cued,
            other => Self::Other(other),
        }
    }

    /// The wire code for this state.
    pub fn code(self) -> i32 {
        match self {
            Self::Unstarted => -1,
            Self::Ended => 0,
            Self::Playing => 1,
            Self::Paused => 2,
            Self::Buffering => 3,
            Self::Cued => 5,
            Self::Other(code) => code,
        }
    }

    /// Whether this is the widget's "actively playing" value.
    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }
}

/// Normalized widget events forwarded to the tracker.
///
/// Each event carries the handle it originated from so the consumer can
/// query that instance for metadata.
pub enum AdapterEvent {
    /// The player finished initializing.
    Ready {
        /// The live instance.
        handle: Arc<dyn PlayerHandle>,
    },
    /// The player's raw state changed.
    StateChanged {
        /// The live instance.
        handle: Arc<dyn PlayerHandle>,
        /// The raw state, forwarded verbatim.
        state: RawPlayerState,
    },
}

impl fmt::Debug for AdapterEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready { .. } => f.debug_struct("Ready").finish_non_exhaustive(),
            Self::StateChanged { state, .. } => f
                .debug_struct("StateChanged")
                .field("state", state)
                .finish_non_exhaustive(),
        }
    }
}

/// Bridges the host environment to the widget's load protocol and event
/// model for one mount point.
///
/// The adapter performs no business logic: it resolves the runtime,
/// constructs the player, and forwards callbacks. Status and notification
/// decisions live in [`crate::tracker::PlaybackTracker`].
pub struct WidgetAdapter {
    loader: Arc<RuntimeLoader>,
    mount_id: String,
    events: mpsc::UnboundedSender<AdapterEvent>,
    handle: Mutex<Option<Arc<dyn PlayerHandle>>>,
    config: Mutex<Option<PlayerConfig>>,
    phase_tx: watch::Sender<LoadPhase>,
}

impl WidgetAdapter {
    /// Creates an adapter for `mount_id`, forwarding events into `events`.
    pub fn new(
        loader: Arc<RuntimeLoader>,
        mount_id: impl Into<String>,
        events: mpsc::UnboundedSender<AdapterEvent>,
    ) -> Self {
        let (phase_tx, _) = watch::channel(LoadPhase::Unloaded);
        Self {
            loader,
            mount_id: mount_id.into(),
            events,
            handle: Mutex::new(None),
            config: Mutex::new(None),
            phase_tx,
        }
    }

    /// Observes the handshake phase for this mount.
    ///
    /// A mount whose script never loads stays visible in `ScriptLoading`
    /// here; no error is surfaced beyond that.
    pub fn phase(&self) -> watch::Receiver<LoadPhase> {
        self.phase_tx.subscribe()
    }

    /// The config currently driving the player, if mounted.
    pub fn config(&self) -> Option<PlayerConfig> {
        self.config.lock().clone()
    }

    /// Whether `config` selects the same video/playlist identity as the
    /// currently mounted one.
    pub fn same_source(&self, config: &PlayerConfig) -> bool {
        self.config
            .lock()
            .as_ref()
            .is_some_and(|current| current.same_source(config))
    }

    /// Runs the load handshake and constructs the embedded player.
    ///
    /// If the runtime is already available the handshake short-circuits to
    /// `ScriptReady`; on a remount after [`Self::teardown`] this is the
    /// normal path, since the script is never reloaded. The wait in
    /// `ScriptLoading` is unbounded.
    pub async fn mount(&self, config: PlayerConfig) -> PlayerResult<()> {
        // Config errors surface at the boundary, before any widget work.
        let params = config.player_params()?;

        let runtime = match self.loader.try_resolve() {
            Some(runtime) => {
                self.phase_tx.send_replace(LoadPhase::ScriptReady);
                runtime
            }
            None => {
                self.phase_tx.send_replace(LoadPhase::ScriptLoading);
                let runtime = self.loader.load().await;
                self.phase_tx.send_replace(LoadPhase::ScriptReady);
                runtime
            }
        };

        tracing::debug!(mount_id = %self.mount_id, "constructing embedded player");
        let handle = runtime.construct_player(&self.mount_id, params, self.callbacks())?;
        *self.handle.lock() = Some(handle);
        *self.config.lock() = Some(config);
        self.phase_tx.send_replace(LoadPhase::PlayerConstructed);
        Ok(())
    }

    /// Destroys the current player instance, if any.
    ///
    /// Must complete before a replacement is constructed so two instances
    /// never emit interleaved callbacks against one tracker.
    pub fn teardown(&self) {
        if let Some(handle) = self.handle.lock().take() {
            tracing::debug!(mount_id = %self.mount_id, "destroying embedded player");
            handle.destroy();
        }
        self.config.lock().take();
    }

    /// The live handle, if a player is constructed.
    pub fn handle(&self) -> Option<Arc<dyn PlayerHandle>> {
        self.handle.lock().clone()
    }

    fn callbacks(&self) -> PlayerCallbacks {
        let ready_tx = self.events.clone();
        let state_tx = self.events.clone();
        PlayerCallbacks {
            // Send failures mean the tracker is gone; nothing left to notify.
            on_ready: Box::new(move |handle| {
                let _ = ready_tx.send(AdapterEvent::Ready { handle });
            }),
            on_state_change: Box::new(move |handle, state| {
                let _ = state_tx.send(AdapterEvent::StateChanged { handle, state });
            }),
        }
    }
}

impl Drop for WidgetAdapter {
    fn drop(&mut self) {
        self.teardown();
    }
}
