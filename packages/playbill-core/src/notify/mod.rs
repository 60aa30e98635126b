//! Outbound notification transport abstraction.
//!
//! The tracker depends on the [`NotificationTransport`] trait rather than a
//! concrete messaging client, so the thing that actually talks to the remote
//! endpoint (IPC bridge, webhook client, ...) is injected by the shell.
//! Delivery guarantees, retry/backoff and endpoint authentication are the
//! transport's concern; the core only ever fires and forgets.

use async_trait::async_trait;

use crate::error::PlayerResult;
use crate::metadata::VideoMetadata;

/// Capability for delivering one now-playing notification.
#[async_trait]
pub trait NotificationTransport: Send + Sync {
    /// Delivers the freshly captured metadata to the remote endpoint.
    ///
    /// Called from a spawned task; the tracker never awaits the outcome and
    /// an `Err` is logged, not propagated.
    async fn dispatch(&self, metadata: VideoMetadata) -> PlayerResult<()>;
}

/// Transport that silently discards notifications.
///
/// Useful in tests and for shells that mount a player without wiring an
/// endpoint.
pub struct NoopTransport;

#[async_trait]
impl NotificationTransport for NoopTransport {
    async fn dispatch(&self, _metadata: VideoMetadata) -> PlayerResult<()> {
        Ok(())
    }
}

/// Transport that logs notifications instead of delivering them.
///
/// Useful for debugging the dispatch policy in development.
pub struct LoggingTransport;

#[async_trait]
impl NotificationTransport for LoggingTransport {
    async fn dispatch(&self, metadata: VideoMetadata) -> PlayerResult<()> {
        tracing::info!(
            video_id = %metadata.video_id,
            title = %metadata.title,
            author = %metadata.author,
            duration_seconds = metadata.duration_seconds,
            "now_playing"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> VideoMetadata {
        VideoMetadata {
            video_id: "abc".into(),
            title: "A Title".into(),
            author: "An Author".into(),
            duration_seconds: 60.0,
        }
    }

    #[tokio::test]
    async fn noop_transport_accepts_everything() {
        assert!(NoopTransport.dispatch(metadata()).await.is_ok());
    }

    #[tokio::test]
    async fn logging_transport_accepts_everything() {
        assert!(LoggingTransport.dispatch(metadata()).await.is_ok());
    }
}
