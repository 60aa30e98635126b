//! Per-mount player configuration and widget construction parameters.
//!
//! [`PlayerConfig`] is fixed for the component's mounted lifetime: a changed
//! video/playlist identity forces a full re-initialization of the underlying
//! widget rather than an in-place update (see
//! [`crate::session::PlayerSession::set_config`]).

use serde::{Deserialize, Serialize};

use crate::error::{PlayerError, PlayerResult};

const DEFAULT_WIDTH: u32 = 300;
const DEFAULT_HEIGHT: u32 = 200;

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

/// Immutable per-mount configuration for one embedded player.
///
/// Exactly one playback source must be resolvable: a present `playlist_id`
/// loads that playlist (optionally seeking to `video_id` within it);
/// otherwise `video_id` alone selects a single video. Both absent is a
/// configuration error at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerConfig {
    /// Single video to play, or the video to seek to within a playlist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    /// Playlist to load. Takes precedence over `video_id` as the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlist_id: Option<String>,
    /// Widget width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Widget height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            video_id: None,
            playlist_id: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl PlayerConfig {
    /// Config for a single video.
    pub fn video(video_id: impl Into<String>) -> Self {
        Self {
            video_id: Some(video_id.into()),
            ..Self::default()
        }
    }

    /// Config for a playlist.
    pub fn playlist(playlist_id: impl Into<String>) -> Self {
        Self {
            playlist_id: Some(playlist_id.into()),
            ..Self::default()
        }
    }

    /// Resolves the playback source, or fails if there is none.
    pub fn source(&self) -> PlayerResult<PlaybackSource> {
        if let Some(playlist_id) = &self.playlist_id {
            return Ok(PlaybackSource::Playlist {
                playlist_id: playlist_id.clone(),
                seek_video_id: self.video_id.clone(),
            });
        }
        if let Some(video_id) = &self.video_id {
            return Ok(PlaybackSource::Video {
                video_id: video_id.clone(),
            });
        }
        Err(PlayerError::NoPlaybackTarget)
    }

    /// Whether `other` selects the same video/playlist identity.
    ///
    /// Only the source identity matters for re-initialization; width and
    /// height are fixed per mount and do not participate.
    pub fn same_source(&self, other: &PlayerConfig) -> bool {
        self.video_id == other.video_id && self.playlist_id == other.playlist_id
    }

    /// Builds the widget constructor parameters for this config.
    pub fn player_params(&self) -> PlayerResult<PlayerParams> {
        let mut vars = PlayerVars::default();
        let video_id = match self.source()? {
            PlaybackSource::Playlist {
                playlist_id,
                seek_video_id,
            } => {
                vars.list_type = Some("playlist".into());
                vars.list = Some(playlist_id);
                seek_video_id
            }
            PlaybackSource::Video { video_id } => Some(video_id),
        };
        Ok(PlayerParams {
            width: self.width,
            height: self.height,
            player_vars: vars,
            video_id,
        })
    }
}

/// The single resolvable playback source of a config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackSource {
    /// One video, selected by its id.
    Video {
        /// The video id.
        video_id: String,
    },
    /// A playlist, optionally seeking to a video within it.
    Playlist {
        /// The playlist id.
        playlist_id: String,
        /// Video within the playlist to start at, if any.
        seek_video_id: Option<String>,
    },
}

/// Constructor argument for the embedded player.
///
/// The serialized shape mirrors the widget's JS-facing config object, so a
/// shell can hand it to the widget boundary verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerParams {
    /// Widget width in pixels.
    pub width: u32,
    /// Widget height in pixels.
    pub height: u32,
    /// Player behavior flags.
    pub player_vars: PlayerVars,
    /// Top-level video id (single video, or seek target within a playlist).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

/// Widget behavior flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerVars {
    /// 0 = wait for user interaction before playing.
    pub autoplay: u8,
    /// 1 = show the widget's own controls.
    pub controls: u8,
    /// Set to "playlist" when a playlist source is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_type: Option<String>,
    /// The playlist id, when a playlist source is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<String>,
}

impl Default for PlayerVars {
    fn default() -> Self {
        Self {
            autoplay: 0,
            controls: 1,
            list_type: None,
            list: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_size_matches_widget_defaults() {
        let config = PlayerConfig::default();
        assert_eq!(config.width, 300);
        assert_eq!(config.height, 200);
    }

    #[test]
    fn missing_source_is_a_boundary_error() {
        let config = PlayerConfig::default();
        assert!(matches!(
            config.source(),
            Err(PlayerError::NoPlaybackTarget)
        ));
        assert!(config.player_params().is_err());
    }

    #[test]
    fn playlist_config_builds_list_vars_without_video_id() {
        let params = PlayerConfig::playlist("PL123").player_params().unwrap();
        let json = serde_json::to_value(&params).unwrap();

        assert_eq!(json["playerVars"]["listType"], "playlist");
        assert_eq!(json["playerVars"]["list"], "PL123");
        assert!(json.get("videoId").is_none());
    }

    #[test]
    fn video_config_builds_top_level_video_id() {
        let params = PlayerConfig::video("abc").player_params().unwrap();
        let json = serde_json::to_value(&params).unwrap();

        assert_eq!(json["videoId"], "abc");
        assert!(json["playerVars"].get("listType").is_none());
        assert!(json["playerVars"].get("list").is_none());
    }

    #[test]
    fn playlist_with_video_seeks_within_playlist() {
        let config = PlayerConfig {
            video_id: Some("abc".into()),
            playlist_id: Some("PL123".into()),
            ..PlayerConfig::default()
        };
        let params = config.player_params().unwrap();

        assert_eq!(params.video_id.as_deref(), Some("abc"));
        assert_eq!(params.player_vars.list.as_deref(), Some("PL123"));
        assert_eq!(params.player_vars.list_type.as_deref(), Some("playlist"));
    }

    #[test]
    fn player_vars_default_to_no_autoplay_with_controls() {
        let vars = PlayerVars::default();
        assert_eq!(vars.autoplay, 0);
        assert_eq!(vars.controls, 1);
    }

    #[test]
    fn same_source_ignores_size() {
        let a = PlayerConfig::video("abc");
        let mut b = PlayerConfig::video("abc");
        b.width = 640;
        b.height = 360;
        assert!(a.same_source(&b));

        let c = PlayerConfig::video("xyz");
        assert!(!a.same_source(&c));

        let d = PlayerConfig::playlist("PL123");
        assert!(!a.same_source(&d));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: PlayerConfig = serde_json::from_str(r#"{"videoId":"abc"}"#).unwrap();
        assert_eq!(config.video_id.as_deref(), Some("abc"));
        assert_eq!(config.width, 300);
        assert_eq!(config.height, 200);
    }
}
