//! Submission of captured artifacts to the recognition service.
//!
//! Serializes enrollment and recognition requests into multipart bodies,
//! exchanges them with the remote service, and interprets the structured
//! responses into typed outcomes. Every path resolves to an
//! [`OperationOutcome`](crate::outcome::OperationOutcome); network faults
//! never escape this module.

mod client;

pub use client::SubmissionClient;
