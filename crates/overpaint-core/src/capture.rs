//! Screenshot capture seam.

use crate::surface::Snapshot;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Capture errors.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("capture failed: {0}")]
    Failed(String),
    #[error("capture provider unavailable")]
    Unavailable,
}

/// Result type for capture operations.
pub type CaptureResult<T> = Result<T, CaptureError>;

/// Boxed future for async capture completion.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// What region of the page to capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureMode {
    /// The visible viewport.
    Visible,
    /// The full scrollable page.
    Full,
}

impl CaptureMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaptureMode::Visible => "visible",
            CaptureMode::Full => "full",
        }
    }
}

/// Trait for screenshot capture backends.
///
/// Capture is the one asynchronous boundary in the system: the session
/// hides the drawing surface and ignores pointer input while a capture
/// is in flight, and restores visibility unconditionally when the
/// future completes — success or failure.
pub trait CaptureProvider: Send + Sync {
    /// Capture the page, yielding a raster image.
    fn capture(&self, mode: CaptureMode) -> BoxFuture<'_, CaptureResult<Snapshot>>;
}

/// Capture provider that returns a fixed image, for testing and
/// headless use.
#[derive(Debug, Clone)]
pub struct FixedCapture {
    image: Snapshot,
}

impl FixedCapture {
    pub fn new(image: Snapshot) -> Self {
        Self { image }
    }
}

impl CaptureProvider for FixedCapture {
    fn capture(&self, _mode: CaptureMode) -> BoxFuture<'_, CaptureResult<Snapshot>> {
        let image = self.image.clone();
        Box::pin(async move { Ok(image) })
    }
}

/// Download filename for a captured screenshot,
/// `screenshot-<mode>-<millis>.png`.
pub fn capture_filename(mode: CaptureMode, timestamp_millis: u64) -> String {
    format!("screenshot-{}-{}.png", mode.as_str(), timestamp_millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    fn block_on<F: Future>(f: F) -> F::Output {
        // Simple blocking executor for tests
        fn dummy_raw_waker() -> RawWaker {
            fn no_op(_: *const ()) {}
            fn clone(_: *const ()) -> RawWaker {
                dummy_raw_waker()
            }
            static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
            RawWaker::new(std::ptr::null(), &VTABLE)
        }

        let waker = unsafe { Waker::from_raw(dummy_raw_waker()) };
        let mut cx = Context::from_waker(&waker);
        let mut f = std::pin::pin!(f);

        loop {
            match f.as_mut().poll(&mut cx) {
                Poll::Ready(result) => return result,
                Poll::Pending => {}
            }
        }
    }

    #[test]
    fn fixed_capture_returns_its_image() {
        let image = Snapshot::blank(8, 8);
        let provider = FixedCapture::new(image.clone());
        let captured = block_on(provider.capture(CaptureMode::Visible)).unwrap();
        assert_eq!(captured, image);
    }

    #[test]
    fn filename_encodes_mode_and_timestamp() {
        assert_eq!(
            capture_filename(CaptureMode::Full, 1700000000000),
            "screenshot-full-1700000000000.png"
        );
        assert_eq!(
            capture_filename(CaptureMode::Visible, 42),
            "screenshot-visible-42.png"
        );
    }
}
