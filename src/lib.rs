//! Face Attendance Client Library
//!
//! A client-side capture-and-submission orchestrator for a face-based
//! attendance workflow. It owns the live camera feed, drives single-shot
//! recognition and five-shot enrollment captures, ships the resulting
//! JPEG artifacts to a remote recognition service, and keeps an
//! attendance roster consistent with server state.
//!
//! # Architecture
//!
//! The system follows an explicit data flow:
//!
//! ```text
//! capture → sequencer → submit → (remote service)
//!                                       ↓
//!                          attendance (periodic sync)
//! ```
//!
//! # Design Principles
//!
//! - **Never crash on I/O**: failed captures and failed network calls
//!   resolve to typed outcomes and notifications, not panics
//! - **Illegal states unrepresentable**: each capture protocol is an
//!   explicit state machine; a partial enrollment set cannot be submitted
//! - **Exclusive device ownership**: the session manager alone holds the
//!   camera handle, with one acquisition per start and a forced release
//!   on teardown
//! - **Presentation stays external**: notifications go through a one-way
//!   bridge and are never awaited
//!
//! # Example
//!
//! ```no_run
//! use face_attendance::{
//!     capture::MockCamera,
//!     config::FileConfig,
//!     notify::LogNotifier,
//!     orchestrator::Orchestrator,
//! };
//! use std::sync::Arc;
//!
//! # async fn demo() {
//! let config = FileConfig::default();
//! let mut orchestrator = Orchestrator::new(
//!     &config,
//!     Box::new(MockCamera::new()),
//!     Arc::new(LogNotifier),
//! );
//!
//! orchestrator.startup();
//! orchestrator.start_camera().unwrap();
//!
//! orchestrator.set_name("Alice");
//! let outcome = orchestrator.register_face().await;
//! println!("enrollment: {:?}", outcome);
//!
//! let outcome = orchestrator.take_attendance().await;
//! println!("recognition: {:?}", outcome);
//!
//! orchestrator.shutdown();
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod attendance;
pub mod capture;
pub mod config;
pub mod notify;
pub mod orchestrator;
pub mod outcome;
pub mod sequencer;
pub mod submit;

// Re-export commonly used types at crate root
pub use attendance::{AttendanceClient, AttendanceRecord, SyncScheduler};
pub use capture::{CameraDevice, CaptureFrame, FrameCapturer, MockCamera, SessionManager};
pub use config::FileConfig;
pub use notify::{LogNotifier, Notifier, ToastKind};
pub use orchestrator::Orchestrator;
pub use outcome::{FailureKind, OperationOutcome};
pub use sequencer::{EnrollmentSequencer, RecognitionSequencer, ENROLLMENT_FRAME_COUNT};
pub use submit::SubmissionClient;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
