//! Centralized error types for the Playbill core library.
//!
//! Nothing here is fatal to the host shell: widget-load failures are a silent
//! degraded state (see [`crate::widget::runtime::RuntimeLoader`]) and dispatch
//! failures are logged at the spawn site, so the variants below cover the few
//! places an error actually crosses an API boundary.

use serde::Serialize;
use thiserror::Error;

/// Application-wide error type for the Playbill core.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum PlayerError {
    /// Neither a video id nor a playlist id was provided.
    ///
    /// Raised at the configuration boundary before any widget work starts;
    /// a player with no playback target cannot be constructed.
    #[error("no playback target: config needs a video id or a playlist id")]
    NoPlaybackTarget,

    /// The widget runtime refused to construct the embedded player.
    #[error("player construction failed: {0}")]
    Construction(String),

    /// The notification transport failed to deliver a message.
    ///
    /// Only ever observed inside the fire-and-forget dispatch task; it is
    /// logged there and never reaches playback-state processing.
    #[error("notification dispatch failed: {0}")]
    Dispatch(String),
}

impl PlayerError {
    /// Returns a machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoPlaybackTarget => "no_playback_target",
            Self::Construction(_) => "construction_failed",
            Self::Dispatch(_) => "dispatch_failed",
        }
    }
}

/// Convenient Result alias for crate-wide operations.
pub type PlayerResult<T> = Result<T, PlayerError>;
