use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::warn;

use crate::error::{AppError, AppResult};

const DATA_PATH_VAR: &str = "TICKETS_DATA_PATH";
const LATENCY_VAR: &str = "TICKETS_LATENCY";
const DEFAULT_DATA_DIR: &str = "Data";
const DEFAULT_DATA_FILE: &str = "tickets.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub content_root: PathBuf,
    pub data_path: PathBuf,
    pub latency: LatencyProfile,
}

/// Artificial per-operation delays applied by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub list: Duration,
    pub get: Duration,
    pub update: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(300),
            get: Duration::from_millis(200),
            update: Duration::from_millis(400),
        }
    }
}

impl LatencyProfile {
    pub fn none() -> Self {
        Self {
            list: Duration::ZERO,
            get: Duration::ZERO,
            update: Duration::ZERO,
        }
    }

    pub fn is_disabled(&self) -> bool {
        *self == Self::none()
    }
}

impl AppConfig {
    pub fn load(content_root: &Path) -> AppResult<Self> {
        Self::resolve(
            content_root,
            env::var(DATA_PATH_VAR).ok(),
            env::var(LATENCY_VAR).ok(),
        )
    }

    fn resolve(
        content_root: &Path,
        data_path: Option<String>,
        latency: Option<String>,
    ) -> AppResult<Self> {
        let data_path = match data_path.as_deref().map(str::trim) {
            Some("") => {
                return Err(AppError::Configuration(format!(
                    "{DATA_PATH_VAR} must not be empty"
                )));
            }
            Some(path) => content_root.join(path),
            None => default_data_path(content_root),
        };

        let latency = match latency.as_deref().map(|v| v.trim().to_lowercase()) {
            None => LatencyProfile::default(),
            Some(value) => match value.as_str() {
                "off" | "none" | "0" => LatencyProfile::none(),
                "on" | "default" | "" => LatencyProfile::default(),
                other => {
                    warn!(
                        value = other,
                        "unrecognized TICKETS_LATENCY value, keeping default latency"
                    );
                    LatencyProfile::default()
                }
            },
        };

        Ok(Self {
            content_root: content_root.to_path_buf(),
            data_path,
            latency,
        })
    }

    pub fn with_data_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.data_path = self.content_root.join(path);
        }
        self
    }

    pub fn with_latency_disabled(mut self, disabled: bool) -> Self {
        if disabled {
            self.latency = LatencyProfile::none();
        }
        self
    }
}

pub fn default_data_path(content_root: &Path) -> PathBuf {
    content_root.join(DEFAULT_DATA_DIR).join(DEFAULT_DATA_FILE)
}
