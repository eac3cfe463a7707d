use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Topologies submitted to a single cluster, keyed by role and then environment.
///
/// Both levels are ordered maps so iteration is lexicographic. Topology names
/// keep the order the tracker reported them in.
pub type ClusterTopologies = BTreeMap<String, BTreeMap<String, Vec<String>>>;

/// A listing as returned by the tracker: `cluster -> role -> env -> [topology]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopologyListing(BTreeMap<String, ClusterTopologies>);

impl TopologyListing {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Topologies of the given cluster, if the tracker reported it.
    #[cfg(test)]
    pub fn cluster(&self, name: &str) -> Option<&ClusterTopologies> {
        self.0.get(name)
    }

    pub fn into_cluster(mut self, name: &str) -> Option<ClusterTopologies> {
        self.0.remove(name)
    }

    /// Total number of topologies across every cluster, role and environment.
    #[cfg(test)]
    pub fn count(&self) -> usize {
        self.0
            .values()
            .flat_map(|roles| roles.values())
            .flat_map(|envs| envs.values())
            .map(Vec::len)
            .sum()
    }

    /// Records `topology` under `cluster/role/env`.
    pub fn insert(
        &mut self,
        cluster: impl Into<String>,
        role: impl Into<String>,
        env: impl Into<String>,
        topology: impl Into<String>,
    ) {
        self.0
            .entry(cluster.into())
            .or_default()
            .entry(role.into())
            .or_default()
            .entry(env.into())
            .or_default()
            .push(topology.into());
    }
}
