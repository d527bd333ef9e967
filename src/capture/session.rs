//! Camera session lifecycle.
//!
//! The session manager exclusively owns the device handle. It enforces
//! the session invariants: at most one active session, exactly one
//! hardware acquisition per start and one release per stop, and a forced
//! release on teardown so the handle can never leak.

use super::camera::{CameraDevice, CameraError, RawFrame};
use super::capturer::CaptureError;
use crate::config::CaptureConfig;

/// Owns the camera device and its acquisition state.
pub struct SessionManager {
    device: Box<dyn CameraDevice>,
    config: CaptureConfig,
    active: bool,
}

impl SessionManager {
    /// Creates a manager over the given device. No acquisition happens
    /// until [`start`](Self::start) is called.
    pub fn new(device: Box<dyn CameraDevice>, config: CaptureConfig) -> Self {
        Self {
            device,
            config,
            active: false,
        }
    }

    /// Starts a camera session.
    ///
    /// Acquires the device exactly once. Starting an already-active
    /// session is a no-op and does not reacquire. On failure no state
    /// changes and the device stays released.
    pub fn start(&mut self) -> Result<(), CameraError> {
        if self.active {
            return Ok(());
        }
        self.device.open(&self.config)?;
        self.active = true;
        tracing::info!("Camera session started");
        Ok(())
    }

    /// Stops the active session, releasing the device.
    ///
    /// Idempotent: stopping with no active session is a no-op.
    pub fn stop(&mut self) {
        if !self.active {
            return;
        }
        self.device.close();
        self.active = false;
        tracing::info!("Camera session stopped");
    }

    /// Returns true while a session is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Grabs a raw frame from the active session.
    pub(crate) fn grab(&mut self) -> Result<RawFrame, CaptureError> {
        if !self.active {
            return Err(CaptureError::NotActive);
        }
        Ok(self.device.grab()?)
    }
}

impl Drop for SessionManager {
    fn drop(&mut self) {
        // Teardown must never leak an acquisition.
        self.stop();
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("active", &self.active)
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::MockCamera;

    fn manager_with_counters() -> (SessionManager, crate::capture::MockCounters) {
        let camera = MockCamera::new();
        let counters = camera.counters();
        (
            SessionManager::new(Box::new(camera), CaptureConfig::default()),
            counters,
        )
    }

    #[test]
    fn test_start_stop_lifecycle() {
        let (mut manager, counters) = manager_with_counters();

        assert!(!manager.is_active());
        manager.start().unwrap();
        assert!(manager.is_active());
        manager.stop();
        assert!(!manager.is_active());

        assert_eq!(counters.opens(), 1);
        assert_eq!(counters.closes(), 1);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let (mut manager, counters) = manager_with_counters();

        // Stop before any start: no-op, not an error.
        manager.stop();
        assert!(!manager.is_active());

        manager.start().unwrap();
        manager.stop();
        manager.stop();

        assert!(!manager.is_active());
        assert_eq!(counters.closes(), 1);
    }

    #[test]
    fn test_start_when_active_does_not_reacquire() {
        let (mut manager, counters) = manager_with_counters();

        manager.start().unwrap();
        manager.start().unwrap();

        assert_eq!(counters.opens(), 1);
    }

    #[test]
    fn test_failed_start_changes_nothing() {
        let mut manager = SessionManager::new(
            Box::new(MockCamera::refusing_access()),
            CaptureConfig::default(),
        );

        assert!(matches!(manager.start(), Err(CameraError::Unavailable(_))));
        assert!(!manager.is_active());
    }

    #[test]
    fn test_drop_releases_device() {
        let camera = MockCamera::new();
        let counters = camera.counters();
        {
            let mut manager =
                SessionManager::new(Box::new(camera), CaptureConfig::default());
            manager.start().unwrap();
        }
        assert_eq!(counters.closes(), 1);
    }

    #[test]
    fn test_grab_without_session() {
        let (mut manager, _) = manager_with_counters();
        assert!(matches!(manager.grab(), Err(CaptureError::NotActive)));
    }
}
