use std::{error::Error as _, fmt};

use clap::Args;
use explorer::{
    ClusterTopologies, Selector, context::Context, selector::SelectorError, table::pp_table,
    tracker::QueryError,
};
use snafu::{OptionExt, ResultExt, Snafu};
use tracing::{debug, error};

/// Show running topologies
#[derive(Args, Debug)]
pub(crate) struct ShowArgs {
    /// Topologies to show: a cluster, optionally narrowed down to a role and an environment
    #[arg(value_name = "cluster/[role]/[env]")]
    pub(crate) selector: String,
}

#[derive(Debug, Snafu)]
pub(crate) enum ShowError {
    #[snafu(transparent)]
    Selector { source: SelectorError },

    #[snafu(display("failed to retrieve topologies running in cluster '{cluster}'"))]
    ClusterQuery { source: QueryError, cluster: String },

    #[snafu(display(
        "failed to retrieve topologies running in cluster '{cluster}' submitted by '{role}'"
    ))]
    ClusterRoleQuery {
        source: QueryError,
        cluster: String,
        role: String,
    },

    #[snafu(display(
        "failed to retrieve topologies running in cluster '{cluster}' submitted by '{role}' under environment '{env}'"
    ))]
    ClusterRoleEnvQuery {
        source: QueryError,
        cluster: String,
        role: String,
        env: String,
    },

    #[snafu(display("Unknown cluster '{cluster}'"))]
    UnknownCluster { cluster: String },

    #[snafu(display("Unknown cluster/role '{cluster}/{role}'"))]
    UnknownClusterRole { cluster: String, role: String },

    #[snafu(display("Unknown cluster/role/env '{cluster}/{role}/{env}'"))]
    UnknownClusterRoleEnv {
        cluster: String,
        role: String,
        env: String,
    },

    #[snafu(display("failed to write to terminal"))]
    Print { source: std::io::Error },
}

/// What gets printed for a successful query: title, overflow note and table.
#[derive(Debug)]
pub(crate) struct Report {
    title: String,
    table: String,
    rest_count: usize,
}

impl Report {
    fn new(title: String, topologies: &ClusterTopologies) -> Self {
        let (table, rest_count) = pp_table(topologies);
        Self {
            title,
            table,
            rest_count,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if self.rest_count > 0 {
            writeln!(f, "  with {} more...", self.rest_count)?;
        }
        write!(f, "{}", self.table)
    }
}

pub(crate) async fn exec(ctx: &Context, args: &ShowArgs) -> bool {
    run(ctx, &args.selector).await
}

/// Shows the topologies matching `selector`, returning whether it succeeded.
/// Failures are logged, never printed to stdout.
pub(crate) async fn run(ctx: &Context, selector: &str) -> bool {
    match show(ctx, selector).await {
        Ok(()) => true,
        Err(err) => {
            log_error(&err);
            false
        }
    }
}

fn log_error(err: &ShowError) {
    let mut causes = vec![];
    let mut source = err.source();
    while let Some(cause) = source {
        causes.push(cause.to_string());
        source = cause.source();
    }

    if !causes.is_empty() {
        error!("{}", causes.join(": "));
    }
    error!("{err}");
}

async fn show(ctx: &Context, selector: &str) -> Result<(), ShowError> {
    let selector: Selector = selector.parse()?;

    debug!(
        cluster = selector.cluster(),
        role = selector.role(),
        env = selector.env(),
        "Showing topologies"
    );

    let report = match &selector {
        Selector::Cluster { cluster } => show_cluster(ctx, cluster).await?,

        Selector::ClusterRole { cluster, role } => show_cluster_role(ctx, cluster, role).await?,

        Selector::ClusterRoleEnv { cluster, role, env } => {
            show_cluster_role_env(ctx, cluster, role, env).await?
        }
    };

    ctx.term
        .write_line(&report.to_string())
        .context(PrintSnafu)?;

    Ok(())
}

pub(crate) async fn show_cluster(ctx: &Context, cluster: &str) -> Result<Report, ShowError> {
    let listing = ctx
        .tracker
        .cluster_topologies(cluster)
        .await
        .context(ClusterQuerySnafu { cluster })?;

    let topologies = listing
        .into_cluster(cluster)
        .context(UnknownClusterSnafu { cluster })?;

    Ok(Report::new(
        format!("Topologies running in cluster '{cluster}'"),
        &topologies,
    ))
}

pub(crate) async fn show_cluster_role(
    ctx: &Context,
    cluster: &str,
    role: &str,
) -> Result<Report, ShowError> {
    let listing = ctx
        .tracker
        .cluster_role_topologies(cluster, role)
        .await
        .context(ClusterRoleQuerySnafu { cluster, role })?;

    let topologies = listing
        .into_cluster(cluster)
        .context(UnknownClusterRoleSnafu { cluster, role })?;

    Ok(Report::new(
        format!("Topologies running in cluster '{cluster}' submitted by '{role}':"),
        &topologies,
    ))
}

pub(crate) async fn show_cluster_role_env(
    ctx: &Context,
    cluster: &str,
    role: &str,
    env: &str,
) -> Result<Report, ShowError> {
    let listing = ctx
        .tracker
        .cluster_role_env_topologies(cluster, role, env)
        .await
        .context(ClusterRoleEnvQuerySnafu { cluster, role, env })?;

    let topologies = listing
        .into_cluster(cluster)
        .context(UnknownClusterRoleEnvSnafu { cluster, role, env })?;

    Ok(Report::new(
        format!(
            "Topologies running in cluster '{cluster}', submitted by '{role}', and under environment '{env}':"
        ),
        &topologies,
    ))
}
