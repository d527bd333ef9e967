//! Camera input and frame capture.
//!
//! This module owns the camera device handle and everything needed to
//! turn the live feed into still-image artifacts: a trait-based device
//! abstraction, the session manager that enforces the single-session
//! lifecycle, and the frame capturer that encodes grabbed frames as JPEG.

mod camera;
mod capturer;
mod frame;
mod session;

pub use camera::{CameraDevice, CameraError, MockCamera, MockCounters, RawFrame};
pub use capturer::{CaptureError, FrameCapturer};
pub use frame::CaptureFrame;
pub use session::SessionManager;
