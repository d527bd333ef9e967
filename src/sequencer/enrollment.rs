//! Timed multi-shot enrollment sequence.

use super::request::{EnrollmentRequest, ENROLLMENT_FRAME_COUNT};
use super::SequenceError;
use crate::capture::{CaptureFrame, FrameCapturer, SessionManager};
use crate::notify::{Notifier, ToastKind};
use std::time::Duration;

/// Phases of one enrollment protocol instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentPhase {
    /// No instance running.
    Idle,
    /// Checking preconditions (name, camera) before any capture.
    Validating,
    /// Driving the timed captures; `index` is the current iteration.
    Sequencing {
        /// Zero-based capture iteration.
        index: u32,
    },
    /// Tallying frames and building the request.
    Packaging,
    /// The last instance produced a request.
    Done,
    /// The last instance terminated with an error.
    Failed,
}

/// Drives the five-shot timed enrollment capture.
///
/// Each iteration waits one capture cadence, announces progress through
/// the notifier, then captures. A single failed capture does not abort
/// the sequence; the tally check at packaging time decides. Fewer than
/// five frames discards everything captured so far — partial sets never
/// leave this type.
pub struct EnrollmentSequencer {
    cadence: Duration,
    phase: EnrollmentPhase,
}

impl EnrollmentSequencer {
    /// Creates a sequencer with the given capture cadence.
    pub fn new(cadence: Duration) -> Self {
        Self {
            cadence,
            phase: EnrollmentPhase::Idle,
        }
    }

    /// Returns the phase the last (or current) instance reached.
    pub fn phase(&self) -> EnrollmentPhase {
        self.phase
    }

    /// Runs one enrollment protocol instance.
    ///
    /// Both precondition checks run before any capture begins. On
    /// success the returned request holds exactly
    /// [`ENROLLMENT_FRAME_COUNT`] frames in capture order.
    pub async fn run(
        &mut self,
        name: &str,
        session: &mut SessionManager,
        capturer: &FrameCapturer,
        notifier: &dyn Notifier,
    ) -> Result<EnrollmentRequest, SequenceError> {
        self.phase = EnrollmentPhase::Validating;
        if name.trim().is_empty() {
            self.phase = EnrollmentPhase::Failed;
            return Err(SequenceError::MissingName);
        }
        if !session.is_active() {
            self.phase = EnrollmentPhase::Failed;
            return Err(SequenceError::NoCameraSession);
        }

        notifier.toast("Starting registration... Please stay still", ToastKind::Info);

        let mut frames: Vec<CaptureFrame> = Vec::with_capacity(ENROLLMENT_FRAME_COUNT);
        for i in 0..ENROLLMENT_FRAME_COUNT {
            self.phase = EnrollmentPhase::Sequencing { index: i as u32 };
            tokio::time::sleep(self.cadence).await;
            notifier.toast(
                &format!("Capturing image {}/{}...", i + 1, ENROLLMENT_FRAME_COUNT),
                ToastKind::Info,
            );

            match capturer.capture(session, frames.len() as u32) {
                Ok(frame) => frames.push(frame),
                Err(e) => {
                    tracing::warn!(iteration = i, error = %e, "Enrollment capture failed");
                }
            }
        }

        self.phase = EnrollmentPhase::Packaging;
        if frames.len() < ENROLLMENT_FRAME_COUNT {
            let captured = frames.len();
            drop(frames);
            self.phase = EnrollmentPhase::Failed;
            return Err(SequenceError::IncompleteCapture {
                captured,
                required: ENROLLMENT_FRAME_COUNT,
            });
        }

        let request = EnrollmentRequest::new(name.to_string(), frames)?;
        self.phase = EnrollmentPhase::Done;
        tracing::info!(name, "Enrollment sequence complete");
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::{MockCamera, MockCounters};
    use crate::config::CaptureConfig;
    use crate::notify::RecordingNotifier;

    fn session_with(camera: MockCamera) -> (SessionManager, MockCounters) {
        let counters = camera.counters();
        (
            SessionManager::new(Box::new(camera), CaptureConfig::default()),
            counters,
        )
    }

    fn sequencer() -> EnrollmentSequencer {
        EnrollmentSequencer::new(Duration::from_secs(1))
    }

    #[tokio::test(start_paused = true)]
    async fn test_happy_path_collects_five_ordered_frames() {
        let (mut session, _) = session_with(MockCamera::new());
        session.start().unwrap();
        let notifier = RecordingNotifier::new();
        let mut seq = sequencer();

        let request = seq
            .run("Alice", &mut session, &FrameCapturer::default(), &notifier)
            .await
            .unwrap();

        assert_eq!(seq.phase(), EnrollmentPhase::Done);
        let ordinals: Vec<u32> = request.frames().iter().map(|f| f.ordinal()).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3, 4]);

        let toasts = notifier.toasts();
        assert_eq!(toasts[0], "Starting registration... Please stay still");
        assert_eq!(toasts[1], "Capturing image 1/5...");
        assert_eq!(toasts[5], "Capturing image 5/5...");
    }

    #[tokio::test(start_paused = true)]
    async fn test_captures_are_paced() {
        let (mut session, _) = session_with(MockCamera::new());
        session.start().unwrap();
        let notifier = RecordingNotifier::new();
        let mut seq = sequencer();

        let started = tokio::time::Instant::now();
        seq.run("Alice", &mut session, &FrameCapturer::default(), &notifier)
            .await
            .unwrap();

        // One cadence delay before each of the five captures.
        assert_eq!(started.elapsed(), Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_name_short_circuits() {
        let (mut session, counters) = session_with(MockCamera::new());
        session.start().unwrap();
        let notifier = RecordingNotifier::new();
        let mut seq = sequencer();

        let result = seq
            .run("", &mut session, &FrameCapturer::default(), &notifier)
            .await;

        assert!(matches!(result, Err(SequenceError::MissingName)));
        assert_eq!(seq.phase(), EnrollmentPhase::Failed);
        // No capture was attempted and nothing was announced.
        assert_eq!(counters.grabs(), 0);
        assert!(notifier.events().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_requires_active_session() {
        let (mut session, counters) = session_with(MockCamera::new());
        let notifier = RecordingNotifier::new();
        let mut seq = sequencer();

        let result = seq
            .run("Alice", &mut session, &FrameCapturer::default(), &notifier)
            .await;

        assert!(matches!(result, Err(SequenceError::NoCameraSession)));
        assert_eq!(counters.grabs(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_incomplete_capture_discards_frames() {
        // First two grabs succeed, the remaining three fail.
        let (mut session, counters) = session_with(MockCamera::failing_from(2));
        session.start().unwrap();
        let notifier = RecordingNotifier::new();
        let mut seq = sequencer();

        let result = seq
            .run("Alice", &mut session, &FrameCapturer::default(), &notifier)
            .await;

        assert!(matches!(
            result,
            Err(SequenceError::IncompleteCapture {
                captured: 2,
                required: 5
            })
        ));
        assert_eq!(seq.phase(), EnrollmentPhase::Failed);
        // All five iterations were attempted; the sequence aborts only
        // at the tally check.
        assert_eq!(counters.grabs(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_stopped_mid_sequence() {
        let (mut session, _) = session_with(MockCamera::new());
        session.start().unwrap();
        session.stop();
        let notifier = RecordingNotifier::new();
        let mut seq = sequencer();

        let result = seq
            .run("Alice", &mut session, &FrameCapturer::default(), &notifier)
            .await;

        // Validation already sees the inactive session.
        assert!(matches!(result, Err(SequenceError::NoCameraSession)));
    }
}
