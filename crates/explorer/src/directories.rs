//! Location of the per-user explorer directory.
//!
//! The directory holds `settings.json`. Its location follows the platform
//! conventions exposed by the `directories` crate unless the
//! `HERON_EXPLORER_HOME` environment variable points somewhere else.

use directories::ProjectDirs;
use snafu::{OptionExt, ResultExt, Snafu};

use crate::prelude::*;

/// Environment variable overriding the explorer directory.
pub const HOME_ENV: &str = "HERON_EXPLORER_HOME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directories {
    /// Standard configuration directory of the platform.
    Standard(PathBuf),

    /// Custom directory, set via `HERON_EXPLORER_HOME`.
    Overridden(PathBuf),
}

#[derive(Debug, Snafu)]
pub enum DirectoriesError {
    #[snafu(display("home directory could not be located"))]
    LocateHome,

    #[snafu(display("user directories are non-UTF-8"))]
    Utf8 { source: FromPathBufError },
}

impl Directories {
    pub fn new() -> Result<Self, DirectoriesError> {
        if let Ok(dir) = std::env::var(HOME_ENV)
            && !dir.is_empty()
        {
            return Ok(Self::Overridden(PathBuf::from(dir)));
        }

        let dirs =
            ProjectDirs::from("org", "apache", "heron-explorer").context(LocateHomeSnafu)?;

        let config = PathBuf::try_from(dirs.config_dir().to_owned()).context(Utf8Snafu)?;

        Ok(Self::Standard(config))
    }

    pub fn root(&self) -> &Path {
        match self {
            Self::Standard(p) | Self::Overridden(p) => p,
        }
    }

    /// Path to the settings file.
    pub fn settings(&self) -> PathBuf {
        self.root().join("settings.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_file_lives_in_root() {
        let dirs = Directories::Overridden(PathBuf::from("/tmp/explorer"));

        assert_eq!(dirs.root(), Path::new("/tmp/explorer"));
        assert_eq!(dirs.settings(), PathBuf::from("/tmp/explorer/settings.json"));
    }
}
