//! Client configuration.
//!
//! All tunables live here: camera capture settings, the remote service
//! address, capture pacing, and the attendance refresh cadence. Values
//! come from a TOML file or from the defaults, which match the reference
//! deployment (local service on port 8000).

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for camera capture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Camera device index or identifier.
    pub device_id: u32,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// JPEG encoding quality (1-100).
    pub jpeg_quality: u8,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            device_id: 0,
            width: 640,
            height: 480,
            jpeg_quality: 80,
        }
    }
}

impl CaptureConfig {
    /// Creates a new configuration with the specified dimensions.
    pub fn with_dimensions(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        if self.jpeg_quality == 0 || self.jpeg_quality > 100 {
            return Err(ConfigError::InvalidJpegQuality);
        }
        Ok(())
    }
}

/// Remote recognition service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base address of the recognition service.
    pub base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Validates the service settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        Ok(())
    }
}

/// Capture sequencing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Delay between enrollment captures in milliseconds.
    ///
    /// The 1-second default is a pacing contract: it gives the subject
    /// time to adjust pose between shots.
    pub capture_cadence_ms: u64,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            capture_cadence_ms: 1000,
        }
    }
}

impl SequenceConfig {
    /// Returns the cadence as a [`Duration`].
    pub fn cadence(&self) -> Duration {
        Duration::from_millis(self.capture_cadence_ms)
    }

    /// Validates the sequencing settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capture_cadence_ms == 0 {
            return Err(ConfigError::InvalidCadence);
        }
        Ok(())
    }
}

/// Attendance refresh settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Seconds between periodic attendance refreshes.
    pub refresh_interval_secs: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 30,
        }
    }
}

impl SyncConfig {
    /// Returns the refresh period as a [`Duration`].
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    /// Validates the refresh settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh_interval_secs == 0 {
            return Err(ConfigError::InvalidRefreshInterval);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid frame dimensions")]
    InvalidDimensions,
    #[error("invalid jpeg quality (must be 1-100)")]
    InvalidJpegQuality,
    #[error("service base url must not be empty")]
    MissingBaseUrl,
    #[error("capture cadence must be non-zero")]
    InvalidCadence,
    #[error("refresh interval must be non-zero")]
    InvalidRefreshInterval,
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub capture: CaptureConfig,
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub sequence: SequenceConfig,
    #[serde(default)]
    pub sync: SyncConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.capture.validate()?;
        self.service.validate()?;
        self.sequence.validate()?;
        self.sync.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.service.base_url, "http://localhost:8000");
        assert_eq!(config.sequence.cadence(), Duration::from_secs(1));
        assert_eq!(config.sync.refresh_interval(), Duration::from_secs(30));
    }

    #[test]
    fn test_zero_dimensions_invalid() {
        let mut config = CaptureConfig::default();
        config.width = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions)
        ));
    }

    #[test]
    fn test_jpeg_quality_bounds() {
        let mut config = CaptureConfig::default();
        config.jpeg_quality = 0;
        assert!(config.validate().is_err());
        config.jpeg_quality = 101;
        assert!(config.validate().is_err());
        config.jpeg_quality = 100;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [service]
            base_url = "http://attendance.internal:9000"
            "#,
        )
        .unwrap();

        assert_eq!(config.service.base_url, "http://attendance.internal:9000");
        assert_eq!(config.capture.width, 640);
        assert_eq!(config.sync.refresh_interval_secs, 30);
    }

    #[test]
    fn test_empty_base_url_invalid() {
        let config = ServiceConfig {
            base_url: "  ".to_string(),
        };
        assert!(matches!(config.validate(), Err(ConfigError::MissingBaseUrl)));
    }
}
