use std::fmt;

use tabled::{Table, Tabled, settings::Style};

use crate::topology::ClusterTopologies;

/// Maximum number of rows rendered for a single listing.
pub const MAX_ROWS: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq, Tabled)]
pub struct TopologyRow {
    pub role: String,
    pub env: String,
    pub topology: String,
}

impl TopologyRow {
    pub fn new(role: &str, env: &str, topology: &str) -> Self {
        Self {
            role: role.to_owned(),
            env: env.to_owned(),
            topology: topology.to_owned(),
        }
    }
}

/// The first [`MAX_ROWS`] topologies of a cluster, plus how many were left out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopologyTable {
    rows: Vec<TopologyRow>,
    total: usize,
}

impl TopologyTable {
    /// Flattens `role -> env -> [topology]` into rows, keeping counting after
    /// the row limit is reached.
    pub fn collect(topologies: &ClusterTopologies) -> Self {
        let mut rows = Vec::with_capacity(MAX_ROWS);
        let mut total = 0;

        for (role, envs) in topologies {
            for (env, names) in envs {
                for name in names {
                    total += 1;
                    if total > MAX_ROWS {
                        continue;
                    }
                    rows.push(TopologyRow::new(role, env, name));
                }
            }
        }

        Self { rows, total }
    }

    #[cfg(test)]
    pub fn rows(&self) -> &[TopologyRow] {
        &self.rows
    }

    #[cfg(test)]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of topologies that did not fit in the table.
    pub fn rest_count(&self) -> usize {
        self.total.saturating_sub(MAX_ROWS)
    }
}

impl fmt::Display for TopologyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new(&self.rows);
        table.with(Style::psql());
        write!(f, "{table}")
    }
}

/// Renders a cluster's topologies and returns the table text together with
/// the number of topologies that were truncated.
pub fn pp_table(topologies: &ClusterTopologies) -> (String, usize) {
    let table = TopologyTable::collect(topologies);
    (table.to_string(), table.rest_count())
}

#[cfg(test)]
mod tests {
    use crate::topology::TopologyListing;

    use super::*;

    fn cluster_with(count: usize) -> ClusterTopologies {
        let mut listing = TopologyListing::new();
        for i in 0..count {
            listing.insert("main", "ops", "prod", format!("topo-{i:02}"));
        }
        listing.into_cluster("main").unwrap_or_default()
    }

    #[test]
    fn keeps_every_row_below_limit() {
        let table = TopologyTable::collect(&cluster_with(7));

        assert_eq!(table.rows().len(), 7);
        assert_eq!(table.rest_count(), 0);
    }

    #[test]
    fn exactly_limit_has_no_rest() {
        let table = TopologyTable::collect(&cluster_with(MAX_ROWS));

        assert_eq!(table.rows().len(), MAX_ROWS);
        assert_eq!(table.rest_count(), 0);
    }

    #[test]
    fn truncates_after_limit_but_keeps_counting() {
        let table = TopologyTable::collect(&cluster_with(25));

        assert_eq!(table.rows().len(), 20);
        assert_eq!(table.total(), 25);
        assert_eq!(table.rest_count(), 5);
        assert_eq!(table.rows().last().unwrap().topology, "topo-19");
    }

    #[test]
    fn truncation_spans_roles_and_envs() {
        let mut listing = TopologyListing::new();
        for i in 0..15 {
            listing.insert("main", "alice", "devel", format!("a-{i:02}"));
        }
        for i in 0..15 {
            listing.insert("main", "bob", "prod", format!("b-{i:02}"));
        }
        let table = TopologyTable::collect(listing.cluster("main").unwrap());

        assert_eq!(table.rows().len(), 20);
        assert_eq!(table.rest_count(), 10);
        assert_eq!(table.rows()[15], TopologyRow::new("bob", "prod", "b-00"));
    }

    #[test]
    fn flattens_in_role_then_env_order() {
        let mut listing = TopologyListing::new();
        listing.insert("main", "ops", "prod", "topoA");
        listing.insert("main", "ops", "prod", "topoB");
        listing.insert("main", "ops", "devel", "topoC");
        listing.insert("main", "alice", "prod", "topoD");

        let table = TopologyTable::collect(listing.cluster("main").unwrap());

        assert_eq!(
            table.rows(),
            &[
                TopologyRow::new("alice", "prod", "topoD"),
                TopologyRow::new("ops", "devel", "topoC"),
                TopologyRow::new("ops", "prod", "topoA"),
                TopologyRow::new("ops", "prod", "topoB"),
            ]
        );
    }

    #[test]
    fn pp_table_renders_header_and_rows() {
        let mut listing = TopologyListing::new();
        listing.insert("main", "ops", "prod", "topoA");
        listing.insert("main", "ops", "prod", "topoB");

        let (text, rest) = pp_table(listing.cluster("main").unwrap());

        assert_eq!(rest, 0);
        let header = text.lines().next().unwrap();
        assert!(header.contains("role"));
        assert!(header.contains("env"));
        assert!(header.contains("topology"));
        assert!(text.contains("topoA"));
        assert!(text.contains("topoB"));
    }

    #[test]
    fn empty_cluster_renders_header_only() {
        let (text, rest) = pp_table(&ClusterTopologies::new());

        assert_eq!(rest, 0);
        assert!(text.contains("topology"));
    }
}
