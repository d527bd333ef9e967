//! HTTP client for the recognition service.

use crate::capture::CaptureFrame;
use crate::config::ServiceConfig;
use crate::outcome::{FailureKind, OperationOutcome};
use crate::sequencer::{EnrollmentRequest, RecognitionRequest};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, warn};

/// User-facing message for any enrollment failure the service did not
/// explain itself.
const ENROLLMENT_ERROR_MESSAGE: &str = "An error occurred while registering the face.";

/// User-facing message covering both an empty match list and a failed
/// recognition exchange. The causes stay distinguishable through
/// [`FailureKind`].
const NO_MATCH_MESSAGE: &str = "No faces were recognized in the image.";

#[derive(Debug, Deserialize)]
struct RegisterResponse {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<MatchResult>,
}

#[derive(Debug, Deserialize)]
struct MatchResult {
    #[serde(default)]
    name: Option<String>,
}

/// Client for the enrollment and recognition endpoints.
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    http: reqwest::Client,
    base_url: String,
}

impl SubmissionClient {
    /// Creates a client against the configured service address.
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Submits a complete enrollment request.
    ///
    /// The five frames are serialized in capture order as repeated
    /// `images` parts named `frame0.jpg`..`frame4.jpg`.
    pub async fn submit_enrollment(&self, request: EnrollmentRequest) -> OperationOutcome {
        let url = format!("{}/register-face/", self.base_url);
        let (name, frames) = request.into_parts();

        debug!(name = %name, frames = frames.len(), "Submitting enrollment");

        let mut form = Form::new().text("name", name);
        for frame in frames {
            let part = match jpeg_part(frame) {
                Ok(part) => part,
                Err(e) => {
                    warn!(error = %e, "Failed to build enrollment part");
                    return OperationOutcome::failure(
                        FailureKind::Transport,
                        ENROLLMENT_ERROR_MESSAGE,
                    );
                }
            };
            form = form.part("images", part);
        }

        let response = match self.http.post(&url).multipart(form).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Enrollment request failed");
                return OperationOutcome::failure(
                    FailureKind::Transport,
                    ENROLLMENT_ERROR_MESSAGE,
                );
            }
        };

        let status = response.status();
        let body: RegisterResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "Malformed enrollment response");
                return OperationOutcome::failure(
                    FailureKind::Transport,
                    ENROLLMENT_ERROR_MESSAGE,
                );
            }
        };

        if status.is_success() {
            OperationOutcome::success(body.message)
        } else {
            warn!(status = %status, "Enrollment rejected by service");
            let message = if body.message.is_empty() {
                ENROLLMENT_ERROR_MESSAGE.to_string()
            } else {
                body.message
            };
            OperationOutcome::failure(FailureKind::ServiceRejected, message)
        }
    }

    /// Submits a recognition request.
    ///
    /// On success the outcome carries the comma-separated list of matched
    /// names, in the order the service returned them.
    pub async fn submit_recognition(&self, request: RecognitionRequest) -> OperationOutcome {
        let url = format!("{}/recognize-face/", self.base_url);

        let part = match jpeg_part(request.into_frame()) {
            Ok(part) => part,
            Err(e) => {
                warn!(error = %e, "Failed to build recognition part");
                return OperationOutcome::failure(FailureKind::Transport, NO_MATCH_MESSAGE);
            }
        };
        let form = Form::new().part("image", part);

        let response = match self.http.post(&url).multipart(form).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Recognition request failed");
                return OperationOutcome::failure(FailureKind::Transport, NO_MATCH_MESSAGE);
            }
        };

        if !response.status().is_success() {
            warn!(status = %response.status(), "Recognition rejected by service");
            return OperationOutcome::failure(FailureKind::Transport, NO_MATCH_MESSAGE);
        }

        let body: RecognizeResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "Malformed recognition response");
                return OperationOutcome::failure(FailureKind::Transport, NO_MATCH_MESSAGE);
            }
        };

        let names: Vec<String> = body
            .results
            .into_iter()
            .filter_map(|result| result.name)
            .filter(|name| !name.is_empty())
            .collect();

        if names.is_empty() {
            debug!("Recognition returned no named matches");
            OperationOutcome::failure(FailureKind::NoMatch, NO_MATCH_MESSAGE)
        } else {
            OperationOutcome::success(names.join(", "))
        }
    }
}

/// Builds a multipart part for one JPEG frame, preserving its ordinal
/// through the file name.
fn jpeg_part(frame: CaptureFrame) -> Result<Part, reqwest::Error> {
    let file_name = frame.file_name();
    Part::bytes(frame.into_bytes())
        .file_name(file_name)
        .mime_str("image/jpeg")
}
