//! The live player instance as a narrow, opaque capability.
//!
//! The widget's real instance object exposes a much larger surface; the core
//! only ever calls the operations below, so that is all the trait admits.

/// Video identity fields reported by a live player handle.
///
/// Stored exactly as reported; partial or empty fields are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VideoData {
    /// Identifier of the current video.
    pub video_id: String,
    /// Video title.
    pub title: String,
    /// Channel / uploader name.
    pub author: String,
}

/// One constructed widget instance, queryable for current metadata.
///
/// Handles are produced by [`crate::widget::runtime::WidgetRuntime`] and
/// passed back through every adapter event so the tracker can query the
/// instance the event came from.
pub trait PlayerHandle: Send + Sync {
    /// Returns the current video's identity fields.
    fn video_data(&self) -> VideoData;

    /// Returns the current video's duration in seconds.
    ///
    /// May be reported as zero until decoding begins; the tracker re-queries
    /// on every entry into the playing state for exactly that reason.
    fn duration_seconds(&self) -> f64;

    /// Tears the embedded instance down. Idempotent.
    fn destroy(&self);
}
