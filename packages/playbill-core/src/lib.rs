//! Playbill Core - embedded video player state library.
//!
//! This crate tracks an embedded iframe video widget through its asynchronous
//! bootstrap, folds the widget's raw playback callbacks into a simple
//! Paused/Playing read model with video metadata, and fires a now-playing
//! notification through an injected transport.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`runtime`]: Task spawning abstraction for async runtime independence
//! - [`config`]: Player configuration and widget construction parameters
//! - [`widget`]: Script bootstrap, player construction and the callback feed
//! - [`tracker`]: Playback status, metadata capture and dispatch decisions
//! - [`notify`]: Outbound now-playing notification transport
//! - [`session`]: Composition root wiring one mounted player together
//! - [`error`]: Centralized error types
//!
//! # Abstraction Traits
//!
//! The crate defines several traits to decouple core logic from the embedding
//! environment:
//!
//! - [`ScriptHost`](widget::ScriptHost): Injecting the widget bootstrap script
//! - [`WidgetRuntime`](widget::WidgetRuntime): Constructing player instances
//! - [`PlayerHandle`](widget::PlayerHandle): Querying a live player instance
//! - [`NotificationTransport`](notify::NotificationTransport): Delivering
//!   now-playing notifications
//! - [`TaskSpawner`](runtime::TaskSpawner): Spawning background tasks
//!
//! The embedding shell implements the widget-side traits against its actual
//! webview; tests drive the same traits with in-process fakes.

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod metadata;
pub mod notify;
pub mod runtime;
pub mod session;
pub mod tracker;
pub mod widget;

// Re-export commonly used types at the crate root
pub use config::{PlaybackSource, PlayerConfig, PlayerParams, PlayerVars};
pub use error::{PlayerError, PlayerResult};
pub use metadata::{PlaybackStatus, PlayerView, VideoMetadata};
pub use notify::{LoggingTransport, NoopTransport, NotificationTransport};
pub use runtime::{TaskSpawner, TokioSpawner};
pub use session::PlayerSession;
pub use tracker::reducer::{reduce, DispatchPolicy, Transition};
pub use tracker::PlaybackTracker;
pub use widget::{
    AdapterEvent, LoadPhase, PlayerCallbacks, PlayerHandle, RawPlayerState, RuntimeLoader,
    RuntimeReadyFn, ScriptHost, VideoData, WidgetAdapter, WidgetRuntime,
};
