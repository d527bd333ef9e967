//! Camera abstraction for frame acquisition.
//!
//! This module provides a trait-based abstraction over camera hardware,
//! allowing for both real camera input and mock implementations for
//! testing and headless demos.

use crate::config::CaptureConfig;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during camera operations.
#[derive(Debug, Error)]
pub enum CameraError {
    #[error("camera unavailable: {0}")]
    Unavailable(String),
    #[error("camera not initialized")]
    NotInitialized,
    #[error("failed to grab frame: {0}")]
    GrabFailed(String),
}

/// A raw frame as delivered by the device, before encoding.
///
/// A device that has been opened but has not decoded any content yet
/// delivers a frame with zero dimensions; the capturer treats that as
/// "no content" rather than an error from the device.
#[derive(Debug, Clone)]
pub struct RawFrame {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl RawFrame {
    /// Creates a raw grayscale frame.
    pub fn new(pixels: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Creates the frame a device delivers before its first decode.
    pub fn undecoded() -> Self {
        Self::new(Vec::new(), 0, 0)
    }

    /// Returns the raw pixel data.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the frame width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the frame height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns true when the frame has decoded content at full size.
    pub fn has_content(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.pixels.len() == (self.width as usize) * (self.height as usize)
    }
}

/// Trait for camera device implementations.
///
/// This abstraction allows swapping between real camera hardware and
/// mock implementations for testing. The session manager holds exactly
/// one device and guarantees one `open` per acquisition and one `close`
/// per release.
pub trait CameraDevice: Send {
    /// Acquires the device with the given configuration.
    fn open(&mut self, config: &CaptureConfig) -> Result<(), CameraError>;

    /// Grabs the currently-displayed frame.
    fn grab(&mut self) -> Result<RawFrame, CameraError>;

    /// Checks if the device is currently acquired.
    fn is_open(&self) -> bool;

    /// Releases the device.
    fn close(&mut self);
}

/// Shared counters exposing how often a [`MockCamera`] was driven.
#[derive(Debug, Clone, Default)]
pub struct MockCounters {
    opens: Arc<AtomicU64>,
    closes: Arc<AtomicU64>,
    grabs: Arc<AtomicU64>,
}

impl MockCounters {
    /// Number of successful device acquisitions.
    pub fn opens(&self) -> u64 {
        self.opens.load(Ordering::SeqCst)
    }

    /// Number of device releases.
    pub fn closes(&self) -> u64 {
        self.closes.load(Ordering::SeqCst)
    }

    /// Number of grab attempts.
    pub fn grabs(&self) -> u64 {
        self.grabs.load(Ordering::SeqCst)
    }
}

/// Mock camera for testing that generates synthetic frames.
#[derive(Debug, Default)]
pub struct MockCamera {
    config: Option<CaptureConfig>,
    sequence: u64,
    warmup_grabs: u64,
    refuse_access: bool,
    fail_grabs_from: Option<u64>,
    counters: MockCounters,
}

impl MockCamera {
    /// Creates a mock that opens and grabs without restriction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock whose `open` fails, as a denied permission would.
    pub fn refusing_access() -> Self {
        Self {
            refuse_access: true,
            ..Self::default()
        }
    }

    /// Creates a mock whose first `grabs` grabs deliver undecoded frames.
    ///
    /// Models the race at session start where the video surface has not
    /// decoded any content yet.
    pub fn with_warmup(grabs: u64) -> Self {
        Self {
            warmup_grabs: grabs,
            ..Self::default()
        }
    }

    /// Creates a mock whose grabs fail from the given grab index onward.
    pub fn failing_from(grab: u64) -> Self {
        Self {
            fail_grabs_from: Some(grab),
            ..Self::default()
        }
    }

    /// Returns handles to the drive counters.
    pub fn counters(&self) -> MockCounters {
        self.counters.clone()
    }
}

impl CameraDevice for MockCamera {
    fn open(&mut self, config: &CaptureConfig) -> Result<(), CameraError> {
        if self.refuse_access {
            return Err(CameraError::Unavailable("access denied".to_string()));
        }
        config
            .validate()
            .map_err(|e| CameraError::Unavailable(e.to_string()))?;
        self.config = Some(config.clone());
        self.sequence = 0;
        self.counters.opens.fetch_add(1, Ordering::SeqCst);
        tracing::info!(device_id = config.device_id, "MockCamera opened");
        Ok(())
    }

    fn grab(&mut self) -> Result<RawFrame, CameraError> {
        self.counters.grabs.fetch_add(1, Ordering::SeqCst);
        let config = self.config.as_ref().ok_or(CameraError::NotInitialized)?;

        let grab_index = self.sequence;
        self.sequence += 1;

        if grab_index < self.warmup_grabs {
            return Ok(RawFrame::undecoded());
        }
        if let Some(from) = self.fail_grabs_from {
            if grab_index >= from {
                return Err(CameraError::GrabFailed("simulated grab failure".to_string()));
            }
        }

        // Synthetic pattern, only for exercising frame handling.
        let pixel_count = (config.width * config.height) as usize;
        let pixels: Vec<u8> = (0..pixel_count)
            .map(|i| ((i as u64 ^ grab_index) % 256) as u8)
            .collect();

        Ok(RawFrame::new(pixels, config.width, config.height))
    }

    fn is_open(&self) -> bool {
        self.config.is_some()
    }

    fn close(&mut self) {
        self.config = None;
        self.counters.closes.fetch_add(1, Ordering::SeqCst);
        tracing::info!("MockCamera closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_camera_lifecycle() {
        let mut camera = MockCamera::new();
        let config = CaptureConfig::default();

        assert!(!camera.is_open());

        camera.open(&config).unwrap();
        assert!(camera.is_open());

        let frame = camera.grab().unwrap();
        assert!(frame.has_content());
        assert_eq!(frame.width(), 640);

        camera.close();
        assert!(!camera.is_open());
    }

    #[test]
    fn test_grab_without_open() {
        let mut camera = MockCamera::new();
        assert!(matches!(camera.grab(), Err(CameraError::NotInitialized)));
    }

    #[test]
    fn test_refusing_access() {
        let mut camera = MockCamera::refusing_access();
        assert!(matches!(
            camera.open(&CaptureConfig::default()),
            Err(CameraError::Unavailable(_))
        ));
        assert!(!camera.is_open());
    }

    #[test]
    fn test_warmup_grabs_have_no_content() {
        let mut camera = MockCamera::with_warmup(2);
        camera.open(&CaptureConfig::default()).unwrap();

        assert!(!camera.grab().unwrap().has_content());
        assert!(!camera.grab().unwrap().has_content());
        assert!(camera.grab().unwrap().has_content());
    }

    #[test]
    fn test_failing_from() {
        let mut camera = MockCamera::failing_from(1);
        camera.open(&CaptureConfig::default()).unwrap();

        assert!(camera.grab().is_ok());
        assert!(matches!(camera.grab(), Err(CameraError::GrabFailed(_))));
    }

    #[test]
    fn test_counters_track_drives() {
        let mut camera = MockCamera::new();
        let counters = camera.counters();

        camera.open(&CaptureConfig::default()).unwrap();
        camera.grab().unwrap();
        camera.grab().unwrap();
        camera.close();

        assert_eq!(counters.opens(), 1);
        assert_eq!(counters.grabs(), 2);
        assert_eq!(counters.closes(), 1);
    }
}
