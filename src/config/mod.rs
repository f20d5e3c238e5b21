use crate::errors::{AppError, AppResult};
use crate::models::location::Coordinates;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_location_timeout")]
    pub location_timeout_secs: u64,
    #[serde(default = "default_session_file")]
    pub session_file: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

fn default_api_url() -> String {
    "http://localhost:3000/api".to_string()
}
fn default_request_timeout() -> u64 {
    10
}
fn default_location_timeout() -> u64 {
    20
}
fn default_session_file() -> String {
    Config::config_dir()
        .join("session.json")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_secs: default_request_timeout(),
            location_timeout_secs: default_location_timeout(),
            session_file: default_session_file(),
            latitude: None,
            longitude: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.fieldops`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fieldops")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("fieldops.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn location_timeout(&self) -> Duration {
        Duration::from_secs(self.location_timeout_secs.max(1))
    }

    pub fn session_path(&self) -> PathBuf {
        expand_tilde(&self.session_file)
    }

    /// Fallback device position configured by the user.
    pub fn fixed_position(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Coordinates::new(lat, lon),
            _ => None,
        }
    }

    /// Write a default configuration file (unless `is_test`) and return its path.
    pub fn init_all(api_url: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        let path = Self::config_file();

        let mut config = Config::default();
        if let Some(url) = api_url {
            config.api_url = url;
        }

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(&path)?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(path)
    }
}
