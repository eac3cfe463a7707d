use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use snafu::{ResultExt, Snafu, ensure};
use tracing::debug;
use url::Url;

use crate::topology::TopologyListing;

/// Envelope status the tracker uses for successful responses.
const STATUS_SUCCESS: &str = "success";

/// Topology listing queries offered by a Heron tracker.
#[async_trait]
pub trait Query: std::fmt::Debug + Sync + Send {
    /// Topologies running in `cluster`.
    async fn cluster_topologies(&self, cluster: &str) -> Result<TopologyListing, QueryError>;

    /// Topologies running in `cluster` submitted by `role`.
    async fn cluster_role_topologies(
        &self,
        cluster: &str,
        role: &str,
    ) -> Result<TopologyListing, QueryError>;

    /// Topologies running in `cluster` submitted by `role` under `env`.
    async fn cluster_role_env_topologies(
        &self,
        cluster: &str,
        role: &str,
        env: &str,
    ) -> Result<TopologyListing, QueryError>;
}

#[derive(Debug, Snafu)]
pub enum ClientError {
    #[snafu(display("failed to build http client"))]
    Build { source: reqwest::Error },
}

#[derive(Debug, Snafu)]
pub enum QueryError {
    #[snafu(display("invalid tracker url '{base}'"))]
    Url {
        source: url::ParseError,
        base: String,
    },

    #[snafu(display("failed to reach tracker"))]
    Request { source: reqwest::Error },

    #[snafu(display("tracker rejected the request ({status}): {message}"))]
    Rejected { status: StatusCode, message: String },

    #[snafu(display("tracker responded with http status {status}"))]
    HttpStatus { status: StatusCode },

    #[snafu(display("failed to decode tracker response"))]
    Decode { source: serde_json::Error },

    #[snafu(display("tracker reported a failure: {message}"))]
    Service { message: String },
}

/// Response wrapper shared by every tracker endpoint.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    status: String,

    #[serde(default)]
    message: String,

    #[serde(default)]
    result: serde_json::Value,
}

/// HTTP client for the tracker's `/topologies` endpoint.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base: Url,
}

impl Client {
    pub fn new(base: Url, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("heron-explorer/", env!("CARGO_PKG_VERSION")))
            .build()
            .context(BuildSnafu)?;

        Ok(Self { http, base })
    }

    fn topologies_url(&self, params: &[(&str, &str)]) -> Result<Url, QueryError> {
        // Make sure `join` appends to the base path instead of replacing its last segment
        let mut base = self.base.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut url = base.join("topologies").context(UrlSnafu {
            base: self.base.as_str(),
        })?;
        url.query_pairs_mut().extend_pairs(params);

        Ok(url)
    }

    async fn topologies(&self, params: &[(&str, &str)]) -> Result<TopologyListing, QueryError> {
        let url = self.topologies_url(params)?;

        debug!(%url, "Querying tracker");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .context(RequestSnafu)?;

        let status = resp.status();

        let body = resp
            .bytes()
            .await
            .context(RequestSnafu)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<Envelope>(&body)
                .ok()
                .map(|envelope| envelope.message)
                .filter(|message| !message.is_empty());

            return match message {
                Some(message) => RejectedSnafu { status, message }.fail(),
                None => HttpStatusSnafu { status }.fail(),
            };
        }

        let envelope: Envelope = serde_json::from_slice(&body).context(DecodeSnafu)?;

        ensure!(
            envelope.status == STATUS_SUCCESS,
            ServiceSnafu {
                message: envelope.message
            }
        );

        debug!(status = %status, "Tracker responded");

        if envelope.result.is_null() {
            return Ok(TopologyListing::new());
        }

        serde_json::from_value(envelope.result).context(DecodeSnafu)
    }
}

#[async_trait]
impl Query for Client {
    async fn cluster_topologies(&self, cluster: &str) -> Result<TopologyListing, QueryError> {
        self.topologies(&[("cluster", cluster)]).await
    }

    async fn cluster_role_topologies(
        &self,
        cluster: &str,
        role: &str,
    ) -> Result<TopologyListing, QueryError> {
        self.topologies(&[("cluster", cluster), ("role", role)])
            .await
    }

    async fn cluster_role_env_topologies(
        &self,
        cluster: &str,
        role: &str,
        env: &str,
    ) -> Result<TopologyListing, QueryError> {
        self.topologies(&[("cluster", cluster), ("role", role), ("environ", env)])
            .await
    }
}

// ============================================================================
// Test utilities
// ============================================================================

#[cfg(any(test, feature = "test-utils"))]
pub mod test {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    /// A query received by [`MockTracker`].
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Call {
        Cluster {
            cluster: String,
        },
        ClusterRole {
            cluster: String,
            role: String,
        },
        ClusterRoleEnv {
            cluster: String,
            role: String,
            env: String,
        },
    }

    /// Mock tracker that records every query and answers with a fixed result.
    #[derive(Debug)]
    pub struct MockTracker {
        result: Result<TopologyListing, String>,
        calls: Mutex<Vec<Call>>,
    }

    impl MockTracker {
        pub fn new(listing: TopologyListing) -> Self {
            Self {
                result: Ok(listing),
                calls: Mutex::new(vec![]),
            }
        }

        pub fn with_error(msg: impl Into<String>) -> Self {
            Self {
                result: Err(msg.into()),
                calls: Mutex::new(vec![]),
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn answer(&self, call: Call) -> Result<TopologyListing, QueryError> {
            self.calls.lock().unwrap().push(call);
            match &self.result {
                Ok(listing) => Ok(listing.clone()),
                Err(message) => Err(QueryError::Service {
                    message: message.clone(),
                }),
            }
        }
    }

    impl Default for MockTracker {
        fn default() -> Self {
            Self::new(TopologyListing::new())
        }
    }

    #[async_trait]
    impl Query for MockTracker {
        async fn cluster_topologies(&self, cluster: &str) -> Result<TopologyListing, QueryError> {
            self.answer(Call::Cluster {
                cluster: cluster.to_owned(),
            })
        }

        async fn cluster_role_topologies(
            &self,
            cluster: &str,
            role: &str,
        ) -> Result<TopologyListing, QueryError> {
            self.answer(Call::ClusterRole {
                cluster: cluster.to_owned(),
                role: role.to_owned(),
            })
        }

        async fn cluster_role_env_topologies(
            &self,
            cluster: &str,
            role: &str,
            env: &str,
        ) -> Result<TopologyListing, QueryError> {
            self.answer(Call::ClusterRoleEnv {
                cluster: cluster.to_owned(),
                role: role.to_owned(),
                env: env.to_owned(),
            })
        }
    }
}
