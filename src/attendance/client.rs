//! Attendance fetch from the remote service.

use crate::config::ServiceConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while fetching the attendance list.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("attendance request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("attendance service returned {0}")]
    Status(reqwest::StatusCode),
}

/// One attendance entry as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Recognized name.
    pub name: String,
    /// Display-formatted timestamp.
    pub time: String,
}

#[derive(Debug, Deserialize)]
struct AttendanceResponse {
    #[serde(default)]
    attendance: Vec<AttendanceRecord>,
}

/// Client for the attendance endpoint.
#[derive(Debug, Clone)]
pub struct AttendanceClient {
    http: reqwest::Client,
    base_url: String,
}

impl AttendanceClient {
    /// Creates a client against the configured service address.
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns today's date in the local timezone as `YYYY-MM-DD`.
    pub fn today() -> String {
        chrono::Local::now().format("%Y-%m-%d").to_string()
    }

    /// Fetches the attendance list for the given date.
    pub async fn fetch(&self, date: &str) -> Result<Vec<AttendanceRecord>, FetchError> {
        let url = format!("{}/attendance/{}", self.base_url, date);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body: AttendanceResponse = response.json().await?;
        Ok(body.attendance)
    }

    /// Fetches the attendance list for today.
    pub async fn fetch_today(&self) -> Result<Vec<AttendanceRecord>, FetchError> {
        self.fetch(&Self::today()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_today_format() {
        let today = AttendanceClient::today();
        // YYYY-MM-DD
        assert_eq!(today.len(), 10);
        assert_eq!(today.as_bytes()[4], b'-');
        assert_eq!(today.as_bytes()[7], b'-');
    }

    #[tokio::test]
    async fn test_fetch_parses_records() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/attendance/2026-08-30"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "attendance": [
                    {"name": "Alice", "time": "09:01:12"},
                    {"name": "Bob", "time": "09:04:55"}
                ]
            })))
            .mount(&server)
            .await;

        let client = AttendanceClient::new(&ServiceConfig {
            base_url: server.uri(),
        });
        let records = client.fetch("2026-08-30").await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Alice");
        assert_eq!(records[1].time, "09:04:55");
    }

    #[tokio::test]
    async fn test_fetch_surfaces_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = AttendanceClient::new(&ServiceConfig {
            base_url: server.uri(),
        });

        assert!(matches!(
            client.fetch("2026-08-30").await,
            Err(FetchError::Status(_))
        ));
    }
}
