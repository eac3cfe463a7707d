//! User settings management for the explorer.
//!
//! Settings are stored as JSON in the explorer directory (see
//! [`crate::directories`]). A missing file means defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use snafu::{ResultExt, Snafu, ensure};
use url::Url;

use crate::prelude::*;

/// Tracker address used when neither the command line nor the settings name one.
pub const DEFAULT_TRACKER_URL: &str = "http://127.0.0.1:8888";

/// Default per-request timeout, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30 * SECOND;

const SCHEMA_VERSION: u32 = 1;

/// User settings for the explorer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Schema version for forwards compatibility.
    pub v: u32,

    /// Base URL of the Heron tracker.
    #[serde(default = "default_tracker_url")]
    pub tracker_url: Url,

    /// Timeout applied to every tracker request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_tracker_url() -> Url {
    Url::parse(DEFAULT_TRACKER_URL).expect("default tracker url is valid")
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            v: SCHEMA_VERSION,
            tracker_url: default_tracker_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Loads settings from `path`, or returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, LoadSettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let bytes = std::fs::read(path).context(ReadSnafu { path })?;

        let settings: Self = serde_json::from_slice(&bytes).context(ParseSnafu { path })?;

        ensure!(settings.v == SCHEMA_VERSION, BadVersionSnafu { path });

        ensure!(
            settings.request_timeout_secs > 0,
            ZeroRequestTimeoutSnafu { path }
        );

        Ok(settings)
    }

    /// Writes the settings to `path`, creating its parent directory if needed.
    pub fn write_to(&self, path: &Path) -> Result<(), WriteSettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context(CreateDirectorySnafu { path: parent })?;
        }

        let contents = serde_json::to_string_pretty(self).context(SerializeSnafu)?;

        std::fs::write(path, contents).context(WriteSnafu { path })?;

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum LoadSettingsError {
    #[snafu(display("failed to read settings file `{path}`"))]
    Read {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("failed to parse settings file `{path}`"))]
    Parse {
        source: serde_json::Error,
        path: PathBuf,
    },

    #[snafu(display("file `{path}` was modified by an incompatible new version of explorer"))]
    BadVersion { path: PathBuf },

    #[snafu(display("request-timeout-secs in `{path}` must be at least 1"))]
    ZeroRequestTimeout { path: PathBuf },
}

#[derive(Debug, Snafu)]
pub enum WriteSettingsError {
    #[snafu(display("failed to create settings directory `{path}`"))]
    CreateDirectory {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("failed to serialize settings"))]
    Serialize { source: serde_json::Error },

    #[snafu(display("failed to write settings file `{path}`"))]
    Write {
        source: std::io::Error,
        path: PathBuf,
    },
}
