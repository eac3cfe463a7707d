use clap::Args;
use url::Url;

#[derive(Args, Clone, Debug, Default)]
pub(crate) struct TrackerOpt {
    /// Base URL of the Heron tracker. Overrides the `tracker-url` setting.
    #[arg(long, env = "HERON_TRACKER_URL", global = true, value_name = "URL")]
    tracker_url: Option<Url>,
}

impl TrackerOpt {
    pub(crate) fn url(&self) -> Option<Url> {
        self.tracker_url.clone()
    }
}
