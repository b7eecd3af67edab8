//! Error types.
//!
//! Only the export path can fail: edit operations are total by
//! construction (unmatched ids are silent no-ops) and rendering is a pure
//! total function. Every export failure must surface to the user; nothing
//! in the export path is silently swallowed.

use thiserror::Error;

/// Failure in the capture-then-serialize export pipeline.
///
/// A failed export leaves the record and the current view intact; retry
/// is always a fresh user-initiated action.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Rasterization of the rendered layout failed (capture target
    /// unavailable, pixel read blocked, and so on).
    #[error("capture failed: {0}")]
    Capture(String),

    /// Bitmap dimensions do not match the pixel buffer, or a dimension
    /// is zero.
    #[error("invalid bitmap dimensions")]
    InvalidBitmap,

    /// Embedding the capture into the PDF document failed.
    #[error("PDF serialization failed: {0}")]
    Serialize(String),
}
