//! Service configuration.
//!
//! Everything comes from the environment with sensible defaults; a bad
//! value falls back rather than failing startup.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use tracing::warn;

/// Listen port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// Filename of the trained keystroke model artifact.
pub const MODEL_FILENAME: &str = "emotion_lstm.onnx";

/// Env var overriding the model artifact path.
pub const MODEL_ENV: &str = "EMOTIONSENSE_MODEL";

/// Env var overriding the frontend asset directory.
pub const FRONTEND_ENV: &str = "EMOTIONSENSE_FRONTEND";

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the server binds on (all interfaces).
    pub port: u16,
    /// Path of the keystroke model artifact, checked before first use.
    pub model_path: PathBuf,
    /// Directory the static frontend is served from.
    pub frontend_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let model_path = Self::models_dir()
            .map(|dir| dir.join(MODEL_FILENAME))
            .unwrap_or_else(|_| PathBuf::from(MODEL_FILENAME));

        Self {
            port: DEFAULT_PORT,
            model_path,
            frontend_dir: PathBuf::from("frontend"),
        }
    }
}

impl Config {
    /// Get the default config directory
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home.join(".emotionsense"))
    }

    /// Get the default models directory
    pub fn models_dir() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("models"))
    }

    /// Build configuration from the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(value) = env::var("PORT") {
            match value.parse() {
                Ok(port) => config.port = port,
                Err(_) => warn!("Invalid PORT value {:?}, using {}", value, config.port),
            }
        }

        if let Ok(path) = env::var(MODEL_ENV) {
            config.model_path = PathBuf::from(path);
        }

        if let Ok(dir) = env::var(FRONTEND_ENV) {
            config.frontend_dir = PathBuf::from(dir);
        }

        config
    }
}
