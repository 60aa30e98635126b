//! Pure playback-state policy.
//!
//! The status mapping and the dispatch decision are a pure function of the
//! incoming raw state, the prior status and the configured policy, so they
//! are testable without a live widget or a running tracker.

use serde::{Deserialize, Serialize};

use crate::metadata::PlaybackStatus;
use crate::widget::adapter::RawPlayerState;

/// When the tracker fires an outbound notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DispatchPolicy {
    /// Fire on every playing-valued callback, including repeats the widget
    /// emits for a single continuous session (e.g. buffering-resume).
    /// Duplicate notifications are reproducible, not silently deduplicated.
    #[default]
    EveryPlaying,
    /// Fire only on a Paused to Playing transition.
    EdgeTriggered,
}

/// Result of applying one state-changed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The replacement status. Always applied, regardless of `notify`.
    pub status: PlaybackStatus,
    /// Whether a notification should be dispatched for this event.
    pub notify: bool,
}

/// Maps a raw widget state to the new status and the dispatch decision.
///
/// The status side is a pure function of the last input: `Playing` iff the
/// raw state is the widget's playing value, `Paused` for everything else
/// (buffering, ended, cued, errors, unknown codes).
pub fn reduce(raw: RawPlayerState, prior: PlaybackStatus, policy: DispatchPolicy) -> Transition {
    let status = if raw.is_playing() {
        PlaybackStatus::Playing
    } else {
        PlaybackStatus::Paused
    };
    let notify = match policy {
        DispatchPolicy::EveryPlaying => status == PlaybackStatus::Playing,
        DispatchPolicy::EdgeTriggered => {
            status == PlaybackStatus::Playing && prior == PlaybackStatus::Paused
        }
    };
    Transition { status, notify }
}
