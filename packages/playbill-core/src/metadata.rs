//! Playback status and metadata owned by the tracker.
//!
//! [`PlaybackStatus`] and [`VideoMetadata`] are mutated only by
//! [`crate::tracker::PlaybackTracker`] in response to adapter events; the
//! display layer sees them read-only through [`PlayerView`].

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Coarse playback status derived solely from the widget's reported state.
///
/// Buffering, ended, cued and error states all fold into `Paused`; the
/// notification policy only distinguishes "actively playing" from "not".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaybackStatus {
    /// Not actively playing (initial state).
    #[default]
    Paused,
    /// The widget reported its playing state.
    Playing,
}

/// Most recently observed video metadata, queried from a live player handle.
///
/// Captured on initial readiness and on every entry into `Playing` (duration
/// in particular may only be known once decoding begins). Each capture
/// replaces the previous snapshot wholesale; fields are stored exactly as the
/// widget reports them, without validation or defensive defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadata {
    /// Identifier of the current video.
    pub video_id: String,
    /// Video title.
    pub title: String,
    /// Channel / uploader name.
    pub author: String,
    /// Duration in seconds, as reported by the widget.
    pub duration_seconds: f64,
}

/// Read-only model exposed to the display layer.
///
/// Re-broadcast on every change via the tracker's watch channel. `metadata`
/// is `None` until the first readiness callback.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    /// Current playback status.
    pub status: PlaybackStatus,
    /// Last captured metadata, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<VideoMetadata>,
}

impl PlayerView {
    /// Serializes the view to JSON for shell-facing surfaces.
    ///
    /// Unlike the `Serialize` impl, `metadata` is present (as `null`) even
    /// before the first readiness callback.
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "status": self.status,
            "metadata": self.metadata,
        })
    }
}
