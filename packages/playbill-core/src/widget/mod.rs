//! Widget Adapter: the bridge to the third-party embeddable player.
//!
//! This module owns the asynchronous script-load handshake and the
//! normalization of widget callbacks into the small internal event set
//! consumed by the tracker. It performs no business logic: playback status
//! and notification dispatch are decided in [`crate::tracker`].
//!
//! - [`handle`]: the narrow capability surface of one constructed instance
//! - [`runtime`]: the global widget runtime and its deferred load protocol
//! - [`adapter`]: callback normalization and the per-mount handshake

pub mod adapter;
pub mod handle;
pub mod runtime;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use adapter::{AdapterEvent, RawPlayerState, WidgetAdapter};
pub use handle::{PlayerHandle, VideoData};
pub use runtime::{
    LoadPhase, PlayerCallbacks, RuntimeLoader, RuntimeReadyFn, ScriptHost, WidgetRuntime,
};
