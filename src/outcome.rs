//! Uniform operation results.
//!
//! Every user-triggered flow (enrollment, recognition) resolves to an
//! [`OperationOutcome`] before it reaches the notification bridge. The
//! user-facing message may collapse distinct causes (a transport error
//! and an empty match list read the same to the user), so the outcome
//! also carries a [`FailureKind`] that keeps them distinguishable for
//! logging and tests.

/// Classified failure causes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Camera access was denied or no device is present.
    CameraUnavailable,
    /// A frame could not be captured or encoded.
    CaptureFailed,
    /// A capture was requested with no active camera session.
    NoCameraSession,
    /// Enrollment was requested without a name.
    MissingName,
    /// Fewer than the required number of enrollment frames were captured.
    IncompleteCapture,
    /// The request never produced a decodable response.
    Transport,
    /// The service answered with a non-success status.
    ServiceRejected,
    /// The service answered but recognized nobody.
    NoMatch,
    /// An attendance refresh failed.
    FetchFailed,
}

/// Result of one enrollment or recognition protocol instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    /// The flow completed; the message comes from the service.
    Success(String),
    /// The flow failed with a classified cause and a user-facing message.
    Failure {
        /// Classified cause.
        kind: FailureKind,
        /// User-facing message.
        message: String,
    },
}

impl OperationOutcome {
    /// Creates a success outcome.
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    /// Creates a failure outcome.
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
        }
    }

    /// Returns true for a success outcome.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the failure kind, if this is a failure.
    pub fn kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success(_) => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }

    /// Returns the carried message.
    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) => message,
            Self::Failure { message, .. } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_accessors() {
        let outcome = OperationOutcome::success("Alice registered");
        assert!(outcome.is_success());
        assert_eq!(outcome.kind(), None);
        assert_eq!(outcome.message(), "Alice registered");
    }

    #[test]
    fn test_failure_keeps_kind_distinguishable() {
        let transport = OperationOutcome::failure(FailureKind::Transport, "No faces");
        let no_match = OperationOutcome::failure(FailureKind::NoMatch, "No faces");

        // Same user-facing message, different internal cause.
        assert_eq!(transport.message(), no_match.message());
        assert_ne!(transport.kind(), no_match.kind());
    }
}
