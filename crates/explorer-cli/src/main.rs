use std::process::ExitCode;

use anyhow::Error;
use clap::{CommandFactory, Parser};
use commands::Command;
use console::Term;
use tracing::{Instrument, debug, trace_span};

use crate::{
    options::TrackerOpt,
    version::{explorer_version_str, git_sha},
};

mod commands;
mod logging;
mod options;
mod version;

/// Styles from <https://github.com/rust-lang/cargo/blob/master/src/cargo/util/style.rs>
mod style {
    use anstyle::*;
    use clap::builder::Styles;

    const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
    const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
    const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

    pub const STYLES: Styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
    };
}

#[derive(Parser)]
#[command(
    name = "explorer",
    version = explorer_version_str(),
    arg_required_else_help(true),
    about,
    next_line_help(false),
    styles(style::STYLES),
)]
struct Cli {
    #[command(flatten)]
    tracker: TrackerOpt,

    /// Enable debug logging
    #[arg(long, default_value = "false", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Error> {
    let cli = Cli::parse();

    // If no command was provided, print help and exit
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            Cli::command().print_help()?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    // Logging
    logging::init(cli.debug)?;

    // Execute the command within a span that includes version and SHA context
    let trace_span = trace_span!(
        "explorer",
        version = explorer_version_str(),
        git_sha = git_sha()
    );

    debug!(
        version = explorer_version_str(),
        git_sha = git_sha(),
        command = ?command,
        "Starting explorer"
    );

    let ctx = explorer::context::initialize(cli.tracker.url(), Term::stdout())?;

    let success = match command {
        // Show
        Command::Show(args) => {
            commands::show::exec(&ctx, &args)
                .instrument(trace_span)
                .await
        }

        // Settings
        Command::Settings(args) => {
            commands::settings::exec(&ctx, &args)
                .instrument(trace_span)
                .await?;
            true
        }
    };

    debug!(success, "Command executed");

    Ok(match success {
        true => ExitCode::SUCCESS,
        false => ExitCode::FAILURE,
    })
}
