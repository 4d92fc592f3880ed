//! Configuration for syntax service
use serde::Deserialize;
use thiserror::Error;

/// Main configuration struct, loaded from environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// AWS region for the Comprehend client
    pub aws_region: String,

    /// Confidence threshold below which a tag is reported as UNKNOWN
    pub lower_limit_score: f32,

    /// HTTP server port
    #[serde(default = "default_app_port")]
    pub app_port: u16,

    /// Comma-separated list of allowed CORS origins, or "*"
    #[serde(default = "default_cors_allowed_origins")]
    pub cors_allowed_origins: String,
}

fn default_app_port() -> u16 {
    8000
}

fn default_cors_allowed_origins() -> String {
    "*".to_string()
}

/// Startup configuration failure. Fatal: the process must refuse to serve
/// requests rather than run with an undefined threshold or region.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration from environment: {0}")]
    Env(#[from] envy::Error),

    #[error("LOWER_LIMIT_SCORE must be a finite number, got {0}")]
    NonFiniteThreshold(f32),
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let config: Config = envy::from_env()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.lower_limit_score.is_finite() {
            return Err(ConfigError::NonFiniteThreshold(self.lower_limit_score));
        }
        Ok(())
    }
}
