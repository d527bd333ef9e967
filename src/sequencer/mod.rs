//! Capture state machines.
//!
//! Two independent protocols run on top of the frame capturer: a
//! single-shot recognition capture and a timed five-shot enrollment
//! sequence. Each protocol is an explicit finite-state machine so that
//! illegal combinations (sequencing without an active camera, packaging
//! a partial frame set) are unrepresentable.

mod enrollment;
mod recognition;
mod request;

pub use enrollment::{EnrollmentPhase, EnrollmentSequencer};
pub use recognition::{RecognitionPhase, RecognitionSequencer};
pub use request::{EnrollmentRequest, RecognitionRequest, ENROLLMENT_FRAME_COUNT};

use crate::outcome::FailureKind;
use thiserror::Error;

/// Errors terminating a protocol instance.
#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("a name is required before enrollment")]
    MissingName,
    #[error("no active camera session")]
    NoCameraSession,
    #[error("captured {captured} of {required} required frames")]
    IncompleteCapture {
        /// Frames successfully captured before the tally check.
        captured: usize,
        /// Frames the protocol requires.
        required: usize,
    },
    #[error("failed to capture image")]
    CaptureFailed,
}

impl SequenceError {
    /// Maps the error onto its outcome classification.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Self::MissingName => FailureKind::MissingName,
            Self::NoCameraSession => FailureKind::NoCameraSession,
            Self::IncompleteCapture { .. } => FailureKind::IncompleteCapture,
            Self::CaptureFailed => FailureKind::CaptureFailed,
        }
    }
}
