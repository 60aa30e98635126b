//! The global widget runtime and its deferred load protocol.
//!
//! The widget's bootstrap script historically signalled availability through
//! a single process-wide callback slot, which multiple mounts could clobber.
//! [`RuntimeLoader`] replaces that with an explicit load operation: the
//! script is injected at most once, the resolved runtime is cached for the
//! lifetime of the process, and every mount shares the same wait.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tokio::sync::Notify;

use crate::config::PlayerParams;
use crate::error::PlayerResult;

use super::adapter::RawPlayerState;
use super::handle::PlayerHandle;

/// Handshake states for widget bootstrap, observable per mount via
/// [`crate::widget::adapter::WidgetAdapter::phase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LoadPhase {
    /// Nothing has happened yet.
    #[default]
    Unloaded,
    /// The bootstrap script was injected; waiting for the ready callback.
    ///
    /// A blocked or failing script leaves the mount parked here forever.
    /// That is a non-fatal degraded state: no player, no notifications, no
    /// surfaced error. A host that wants a timeout layers its own.
    ScriptLoading,
    /// The runtime is available; a player can be constructed.
    ScriptReady,
    /// The embedded player instance exists and callbacks are registered.
    PlayerConstructed,
}

/// Callback invoked once the widget runtime becomes available.
pub type RuntimeReadyFn = Box<dyn FnOnce(Arc<dyn WidgetRuntime>) + Send>;

/// Callbacks registered with the runtime when constructing a player.
///
/// Invoked by the widget's internal playback engine at arbitrary times; the
/// adapter forwards each invocation verbatim to the tracker.
pub struct PlayerCallbacks {
    /// The player finished initializing and can be queried.
    pub on_ready: Box<dyn Fn(Arc<dyn PlayerHandle>) + Send + Sync>,
    /// The player's raw state changed.
    pub on_state_change: Box<dyn Fn(Arc<dyn PlayerHandle>, RawPlayerState) + Send + Sync>,
}

/// The widget's global runtime object: a player constructor.
pub trait WidgetRuntime: Send + Sync {
    /// Constructs an embedded player attached to `mount_id`, registering the
    /// two callbacks the adapter forwards.
    fn construct_player(
        &self,
        mount_id: &str,
        params: PlayerParams,
        callbacks: PlayerCallbacks,
    ) -> PlayerResult<Arc<dyn PlayerHandle>>;
}

/// Host capability for the bootstrap protocol.
///
/// Implemented by the shell embedding the widget; the core never touches the
/// document directly.
pub trait ScriptHost: Send + Sync {
    /// Returns the runtime if the bootstrap script has already run.
    fn existing_runtime(&self) -> Option<Arc<dyn WidgetRuntime>>;

    /// Injects the bootstrap script and registers `on_ready`, to be invoked
    /// once the runtime is available. May never be called back.
    fn inject_script(&self, on_ready: RuntimeReadyFn);
}

/// Resolved-runtime slot shared between the loader and the injected callback.
#[derive(Default)]
struct RuntimeSlot {
    runtime: Mutex<Option<Arc<dyn WidgetRuntime>>>,
    ready: Notify,
}

/// Process-wide loader for the widget runtime.
///
/// One loader is shared by every mount. `load` resolves once and every later
/// call returns the cached runtime immediately; concurrent first calls share
/// a single script injection and wait.
pub struct RuntimeLoader {
    host: Arc<dyn ScriptHost>,
    slot: Arc<RuntimeSlot>,
    injected: AtomicBool,
}

impl RuntimeLoader {
    /// Creates a loader backed by the given host.
    pub fn new(host: Arc<dyn ScriptHost>) -> Self {
        Self {
            host,
            slot: Arc::new(RuntimeSlot::default()),
            injected: AtomicBool::new(false),
        }
    }

    /// Returns the runtime without waiting, if it is already available.
    ///
    /// Checks the cache first, then the host (the script may have been loaded
    /// by something else entirely); a host-provided runtime is cached so the
    /// handshake short-circuits for every subsequent mount.
    pub fn try_resolve(&self) -> Option<Arc<dyn WidgetRuntime>> {
        if let Some(runtime) = self.slot.runtime.lock().clone() {
            return Some(runtime);
        }
        if let Some(runtime) = self.host.existing_runtime() {
            *self.slot.runtime.lock() = Some(Arc::clone(&runtime));
            return Some(runtime);
        }
        None
    }

    /// Whether the runtime has been resolved.
    pub fn is_resolved(&self) -> bool {
        self.slot.runtime.lock().is_some()
    }

    /// Resolves the widget runtime, injecting the bootstrap script on first
    /// call.
    ///
    /// The wait is unbounded: if the script never calls back, this future
    /// never resolves and the caller stays in `ScriptLoading`. Cancelling a
    /// waiting call is safe; the injection still happens at most once and a
    /// later call picks the wait back up.
    pub async fn load(&self) -> Arc<dyn WidgetRuntime> {
        if let Some(runtime) = self.try_resolve() {
            return runtime;
        }

        if !self.injected.swap(true, Ordering::SeqCst) {
            tracing::debug!("injecting widget bootstrap script");
            let slot = Arc::clone(&self.slot);
            self.host.inject_script(Box::new(move |runtime| {
                *slot.runtime.lock() = Some(runtime);
                slot.ready.notify_waiters();
            }));
        }

        loop {
            // Register for the wakeup before re-checking the slot, so a
            // callback firing in between cannot be missed.
            let ready = self.slot.ready.notified();
            if let Some(runtime) = self.slot.runtime.lock().clone() {
                return runtime;
            }
            ready.await;
        }
    }
}
