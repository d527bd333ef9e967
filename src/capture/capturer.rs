//! Still-image capture from the live session.

use super::frame::CaptureFrame;
use super::session::SessionManager;
use super::CameraError;
use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

/// Errors that can occur while capturing a frame.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("no active camera session")]
    NotActive,
    #[error("video surface has no decoded frame yet")]
    NoContent,
    #[error(transparent)]
    Camera(#[from] CameraError),
    #[error("jpeg encoding failed: {0}")]
    Encode(String),
}

/// Produces a single still-image artifact from an active session.
///
/// The grabbed frame is encoded at its native resolution. A grab that
/// arrives before the surface has decoded any content (the race right
/// after session start) fails with [`CaptureError::NoContent`].
#[derive(Debug, Clone)]
pub struct FrameCapturer {
    quality: u8,
}

impl FrameCapturer {
    /// Creates a capturer encoding at the given JPEG quality.
    pub fn new(quality: u8) -> Self {
        Self { quality }
    }

    /// Captures the currently-displayed frame as a JPEG artifact.
    pub fn capture(
        &self,
        session: &mut SessionManager,
        ordinal: u32,
    ) -> Result<CaptureFrame, CaptureError> {
        let raw = session.grab()?;
        if !raw.has_content() {
            return Err(CaptureError::NoContent);
        }

        let mut jpeg = Vec::new();
        JpegEncoder::new_with_quality(&mut jpeg, self.quality)
            .write_image(
                raw.pixels(),
                raw.width(),
                raw.height(),
                ExtendedColorType::L8,
            )
            .map_err(|e| CaptureError::Encode(e.to_string()))?;

        tracing::debug!(
            ordinal,
            width = raw.width(),
            height = raw.height(),
            jpeg_bytes = jpeg.len(),
            "Frame captured"
        );

        Ok(CaptureFrame::new(jpeg, ordinal))
    }
}

impl Default for FrameCapturer {
    fn default() -> Self {
        Self::new(crate::config::CaptureConfig::default().jpeg_quality)
    }
}
