//! Single-shot recognition capture.

use super::request::RecognitionRequest;
use super::SequenceError;
use crate::capture::{FrameCapturer, SessionManager};

/// Phases of one recognition protocol instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionPhase {
    /// No instance running.
    Idle,
    /// Acquiring the single frame.
    Capturing,
    /// The last instance produced a request.
    Done,
    /// The last instance terminated with an error.
    Failed,
}

/// Performs the single capture backing a recognition attempt.
#[derive(Debug)]
pub struct RecognitionSequencer {
    phase: RecognitionPhase,
}

impl Default for RecognitionSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecognitionSequencer {
    /// Creates an idle sequencer.
    pub fn new() -> Self {
        Self {
            phase: RecognitionPhase::Idle,
        }
    }

    /// Returns the phase the last (or current) instance reached.
    pub fn phase(&self) -> RecognitionPhase {
        self.phase
    }

    /// Runs one recognition protocol instance.
    pub fn run(
        &mut self,
        session: &mut SessionManager,
        capturer: &FrameCapturer,
    ) -> Result<RecognitionRequest, SequenceError> {
        if !session.is_active() {
            self.phase = RecognitionPhase::Failed;
            return Err(SequenceError::NoCameraSession);
        }

        self.phase = RecognitionPhase::Capturing;
        match capturer.capture(session, 0) {
            Ok(frame) => {
                self.phase = RecognitionPhase::Done;
                Ok(RecognitionRequest::new(frame))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Recognition capture failed");
                self.phase = RecognitionPhase::Failed;
                Err(SequenceError::CaptureFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::MockCamera;
    use crate::config::CaptureConfig;

    fn session(camera: MockCamera) -> SessionManager {
        SessionManager::new(Box::new(camera), CaptureConfig::default())
    }

    #[test]
    fn test_single_capture() {
        let mut session = session(MockCamera::new());
        session.start().unwrap();
        let mut seq = RecognitionSequencer::new();

        let request = seq.run(&mut session, &FrameCapturer::default()).unwrap();

        assert_eq!(seq.phase(), RecognitionPhase::Done);
        assert!(!request.frame().is_empty());
    }

    #[test]
    fn test_requires_active_session() {
        let mut session = session(MockCamera::new());
        let mut seq = RecognitionSequencer::new();

        let result = seq.run(&mut session, &FrameCapturer::default());

        assert!(matches!(result, Err(SequenceError::NoCameraSession)));
        assert_eq!(seq.phase(), RecognitionPhase::Failed);
    }

    #[test]
    fn test_capture_failure_fails_instance() {
        let mut session = session(MockCamera::failing_from(0));
        session.start().unwrap();
        let mut seq = RecognitionSequencer::new();

        let result = seq.run(&mut session, &FrameCapturer::default());

        assert!(matches!(result, Err(SequenceError::CaptureFailed)));
        assert_eq!(seq.phase(), RecognitionPhase::Failed);
    }
}
