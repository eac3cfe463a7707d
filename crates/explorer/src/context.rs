use std::sync::Arc;

use console::Term;
use snafu::Snafu;
use tracing::debug;
use url::Url;

use crate::{
    directories::{Directories, DirectoriesError},
    settings::{LoadSettingsError, Settings},
    tracker::{self, ClientError},
};

#[derive(Debug)]
pub struct Context {
    /// Terminal for printing messages for the user to see
    pub term: Term,

    /// Explorer directory holding the settings file
    pub dirs: Directories,

    /// Settings loaded from disk
    pub settings: Settings,

    /// Tracker queried for topologies
    pub tracker: Arc<dyn tracker::Query>,
}

#[derive(Debug, Snafu)]
pub enum InitializeError {
    #[snafu(transparent)]
    Directories { source: DirectoriesError },

    #[snafu(transparent)]
    LoadSettings { source: LoadSettingsError },

    #[snafu(transparent)]
    TrackerClient { source: ClientError },
}

/// Builds the context for a run. `tracker_url` takes precedence over the
/// tracker address stored in the settings.
pub fn initialize(tracker_url: Option<Url>, term: Term) -> Result<Context, InitializeError> {
    // Explorer directory
    let dirs = Directories::new()?;

    // Settings
    let settings = Settings::load_from(&dirs.settings())?;

    // Tracker
    let url = tracker_url.unwrap_or_else(|| settings.tracker_url.clone());
    debug!(tracker_url = %url, "Using tracker");
    let tracker = Arc::new(tracker::Client::new(url, settings.request_timeout())?);

    Ok(Context {
        term,
        dirs,
        settings,
        tracker,
    })
}

impl Context {
    #[cfg(any(test, feature = "test-utils"))]
    /// Creates a test context around the given tracker
    pub fn mocked(tracker: Arc<dyn tracker::Query>) -> Context {
        Context {
            term: Term::stderr(),
            dirs: Directories::Overridden(crate::prelude::PathBuf::from("/nonexistent")),
            settings: Settings::default(),
            tracker,
        }
    }
}
