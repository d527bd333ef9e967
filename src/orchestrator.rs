//! Top-level coordination of capture, submission, and attendance sync.
//!
//! One orchestrator instance owns the camera session, both capture
//! protocols, the submission client, and the refresh scheduler, and maps
//! every outcome onto notifications. The flow methods take `&mut self`,
//! so protocol instances can never overlap; the refresh task is the only
//! concurrent actor and touches nothing but the roster.
//!
//! Nothing here panics on a failed capture or a failed network call —
//! every error is recovered into an [`OperationOutcome`] and a
//! notification.

use crate::attendance::{AttendanceClient, AttendanceRecord, SyncScheduler};
use crate::capture::{CameraDevice, CameraError, FrameCapturer, SessionManager};
use crate::config::FileConfig;
use crate::notify::{Notifier, ToastKind};
use crate::outcome::{FailureKind, OperationOutcome};
use crate::sequencer::{EnrollmentSequencer, RecognitionSequencer, SequenceError};
use crate::submit::SubmissionClient;
use std::sync::Arc;

/// Client-side orchestrator for the face-attendance workflow.
pub struct Orchestrator {
    session: SessionManager,
    capturer: FrameCapturer,
    enrollment: EnrollmentSequencer,
    recognition: RecognitionSequencer,
    submitter: SubmissionClient,
    scheduler: SyncScheduler,
    notifier: Arc<dyn Notifier>,
    name: String,
}

impl Orchestrator {
    /// Builds an orchestrator over the given camera device and notifier.
    pub fn new(
        config: &FileConfig,
        device: Box<dyn CameraDevice>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let scheduler = SyncScheduler::new(
            AttendanceClient::new(&config.service),
            Arc::clone(&notifier),
            config.sync.refresh_interval(),
        );

        Self {
            session: SessionManager::new(device, config.capture.clone()),
            capturer: FrameCapturer::new(config.capture.jpeg_quality),
            enrollment: EnrollmentSequencer::new(config.sequence.cadence()),
            recognition: RecognitionSequencer::new(),
            submitter: SubmissionClient::new(&config.service),
            scheduler,
            notifier,
            name: String::new(),
        }
    }

    /// Starts the attendance sync, including the startup refresh.
    pub fn startup(&mut self) {
        self.scheduler.start();
    }

    /// Stops the refresh task and releases the camera if held.
    pub fn shutdown(&mut self) {
        self.scheduler.shutdown();
        self.session.stop();
    }

    /// Sets the pending enrollee name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the pending enrollee name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true while a camera session is active.
    pub fn camera_active(&self) -> bool {
        self.session.is_active()
    }

    /// Starts the camera session.
    ///
    /// On denial or device absence presents the camera error modal and
    /// alters no other state.
    pub fn start_camera(&mut self) -> Result<(), CameraError> {
        match self.session.start() {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::warn!(error = %e, "Camera start failed");
                self.notifier.modal(
                    "Camera Error",
                    "Unable to access camera. Please check your permissions.",
                );
                Err(e)
            }
        }
    }

    /// Stops the camera session. Idempotent.
    pub fn stop_camera(&mut self) {
        self.session.stop();
    }

    /// Returns a snapshot of the attendance roster.
    pub async fn attendance(&self) -> Vec<AttendanceRecord> {
        self.scheduler.roster().await
    }

    /// Runs the full enrollment flow: validation, five paced captures,
    /// submission, and notification.
    ///
    /// On success the pending name is cleared and an attendance refresh
    /// is triggered. On any failure the captured frames are discarded —
    /// there is no resubmission without recapturing.
    pub async fn register_face(&mut self) -> OperationOutcome {
        let notifier = Arc::clone(&self.notifier);

        let request = match self
            .enrollment
            .run(&self.name, &mut self.session, &self.capturer, notifier.as_ref())
            .await
        {
            Ok(request) => request,
            Err(e) => {
                let outcome = OperationOutcome::failure(e.failure_kind(), e.to_string());
                match e {
                    SequenceError::MissingName => notifier.modal(
                        "Input Required",
                        "Please enter a name before registering.",
                    ),
                    SequenceError::NoCameraSession => {
                        notifier.modal("Camera Error", "Please start the camera first.")
                    }
                    SequenceError::IncompleteCapture { .. } => notifier.modal(
                        "Error",
                        "Failed to capture all required images. Please try again.",
                    ),
                    SequenceError::CaptureFailed => {
                        notifier.modal("Error", "Failed to capture image.")
                    }
                }
                return outcome;
            }
        };

        notifier.toast("Processing registration...", ToastKind::Info);
        let outcome = self.submitter.submit_enrollment(request).await;

        match &outcome {
            OperationOutcome::Success(message) => {
                notifier.modal("Success", message);
                self.name.clear();
                self.scheduler.trigger_refresh();
            }
            OperationOutcome::Failure {
                kind: FailureKind::ServiceRejected,
                message,
            } => notifier.modal("Registration Error", message),
            OperationOutcome::Failure { message, .. } => notifier.modal("Error", message),
        }

        outcome
    }

    /// Runs the full recognition flow: one capture, submission, and
    /// notification. Triggers an attendance refresh on success.
    pub async fn take_attendance(&mut self) -> OperationOutcome {
        let notifier = Arc::clone(&self.notifier);

        let request = match self.recognition.run(&mut self.session, &self.capturer) {
            Ok(request) => request,
            Err(e) => {
                let outcome = OperationOutcome::failure(e.failure_kind(), e.to_string());
                match e {
                    SequenceError::NoCameraSession => {
                        notifier.modal("Camera Error", "Please start the camera first.")
                    }
                    _ => notifier.modal("Error", "Failed to capture image."),
                }
                return outcome;
            }
        };

        let outcome = self.submitter.submit_recognition(request).await;

        match &outcome {
            OperationOutcome::Success(names) => {
                notifier.toast(
                    &format!("Attendance recorded for: {names}"),
                    ToastKind::Success,
                );
                notifier.modal("Success", "Attendance recorded successfully");
                self.scheduler.trigger_refresh();
            }
            OperationOutcome::Failure { message, .. } => {
                notifier.modal("Recognition Error", message)
            }
        }

        outcome
    }
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("camera_active", &self.session.is_active())
            .field("name", &self.name)
            .finish()
    }
}
