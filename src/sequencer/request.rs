//! Validated submission payloads.
//!
//! Requests are only constructible from complete capture results, so a
//! partial enrollment set can never reach the submission client.

use super::SequenceError;
use crate::capture::CaptureFrame;

/// Number of reference frames an enrollment requires.
pub const ENROLLMENT_FRAME_COUNT: usize = 5;

/// A complete enrollment payload: a name and exactly five ordered frames.
#[derive(Debug)]
pub struct EnrollmentRequest {
    name: String,
    frames: Vec<CaptureFrame>,
}

impl EnrollmentRequest {
    /// Builds a request, enforcing the completeness invariants.
    ///
    /// Fails with [`SequenceError::MissingName`] on an empty name and
    /// [`SequenceError::IncompleteCapture`] unless exactly
    /// [`ENROLLMENT_FRAME_COUNT`] frames are supplied.
    pub fn new(name: String, frames: Vec<CaptureFrame>) -> Result<Self, SequenceError> {
        if name.trim().is_empty() {
            return Err(SequenceError::MissingName);
        }
        if frames.len() != ENROLLMENT_FRAME_COUNT {
            return Err(SequenceError::IncompleteCapture {
                captured: frames.len(),
                required: ENROLLMENT_FRAME_COUNT,
            });
        }
        Ok(Self { name, frames })
    }

    /// Returns the enrollee name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the frames in capture order.
    pub fn frames(&self) -> &[CaptureFrame] {
        &self.frames
    }

    /// Consumes the request for serialization.
    pub fn into_parts(self) -> (String, Vec<CaptureFrame>) {
        (self.name, self.frames)
    }
}

/// A recognition payload: one captured frame.
#[derive(Debug)]
pub struct RecognitionRequest {
    frame: CaptureFrame,
}

impl RecognitionRequest {
    /// Wraps a captured frame.
    pub fn new(frame: CaptureFrame) -> Self {
        Self { frame }
    }

    /// Returns the frame.
    pub fn frame(&self) -> &CaptureFrame {
        &self.frame
    }

    /// Consumes the request for serialization.
    pub fn into_frame(self) -> CaptureFrame {
        self.frame
    }
}
