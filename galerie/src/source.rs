//! The image supply contract between a gallery and its caller.

use async_trait::async_trait;
use iced::widget::image;
use thiserror::Error;

/// Errors a source can report while resolving an image.
///
/// Variants carry rendered strings rather than the underlying error types so
/// that deliveries stay `Clone` and can travel inside widget messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("network: {0}")]
    Network(String),
    #[error("decode: {0}")]
    Decode(String),
    #[error("io: {0}")]
    Io(String),
    #[error("image index {0} out of range")]
    OutOfRange(usize),
}

/// Supplies images to a [`Gallery`](crate::Gallery).
///
/// The gallery queries `count` on reload and calls `image` once per page
/// entering its materialized window. `image` may resolve immediately (an
/// in-memory source) or after an asynchronous wait (a network fetch); either
/// way the result is delivered back on the UI thread by the runtime.
///
/// A failed or never-resolving future leaves the page's busy indicator
/// showing. The gallery issues a fresh request if the page is recycled and
/// becomes visible again.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Number of images this source can supply.
    fn count(&self) -> usize;

    /// Resolve the image shown on page `index`.
    async fn image(&self, index: usize) -> Result<image::Handle, SourceError>;

    /// Called when the user presses the image on page `index`.
    fn on_tap(&self, index: usize) {
        let _ = index;
    }
}
