use std::{fmt, str::FromStr};

use snafu::{Snafu, ensure};

/// A `cluster[/role[/env]]` scope for topology queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
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

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum SelectorError {
    #[snafu(display(
        "invalid topology selection '{selector}': expected cluster/[role]/[env] but found {segments} segments"
    ))]
    Shape { selector: String, segments: usize },

    #[snafu(display("invalid topology selection '{selector}': segments must not be empty"))]
    EmptySegment { selector: String },
}

impl Selector {
    pub fn cluster(&self) -> &str {
        match self {
            Self::Cluster { cluster }
            | Self::ClusterRole { cluster, .. }
            | Self::ClusterRoleEnv { cluster, .. } => cluster,
        }
    }

    pub fn role(&self) -> Option<&str> {
        match self {
            Self::Cluster { .. } => None,
            Self::ClusterRole { role, .. } | Self::ClusterRoleEnv { role, .. } => Some(role),
        }
    }

    pub fn env(&self) -> Option<&str> {
        match self {
            Self::ClusterRoleEnv { env, .. } => Some(env),
            _ => None,
        }
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split('/').collect();

        ensure!(
            segments.len() <= 3,
            ShapeSnafu {
                selector: s,
                segments: segments.len(),
            }
        );

        ensure!(
            segments.iter().all(|seg| !seg.is_empty()),
            EmptySegmentSnafu { selector: s }
        );

        match segments.as_slice() {
            [cluster] => Ok(Self::Cluster {
                cluster: cluster.to_string(),
            }),

            [cluster, role] => Ok(Self::ClusterRole {
                cluster: cluster.to_string(),
                role: role.to_string(),
            }),

            [cluster, role, env] => Ok(Self::ClusterRoleEnv {
                cluster: cluster.to_string(),
                role: role.to_string(),
                env: env.to_string(),
            }),

            // Splitting always yields at least one segment
            _ => ShapeSnafu {
                selector: s,
                segments: segments.len(),
            }
            .fail(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cluster { cluster } => write!(f, "{cluster}"),
            Self::ClusterRole { cluster, role } => write!(f, "{cluster}/{role}"),
            Self::ClusterRoleEnv { cluster, role, env } => write!(f, "{cluster}/{role}/{env}"),
        }
    }
}
