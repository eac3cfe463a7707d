use clap::{Args, Subcommand};
use explorer::{context::Context, settings::Settings};
use url::Url;

#[derive(Debug, Args)]
pub(crate) struct SettingsArgs {
    #[command(subcommand)]
    setting: Setting,
}

#[derive(Debug, Subcommand)]
#[command(
    subcommand_value_name = "SETTING",
    subcommand_help_heading = "Settings"
)]
enum Setting {
    /// Base URL of the Heron tracker
    TrackerUrl(TrackerUrlArgs),

    /// Timeout for tracker requests, in seconds
    RequestTimeout(RequestTimeoutArgs),
}

#[derive(Debug, Args)]
struct TrackerUrlArgs {
    /// New tracker URL. If omitted, prints the current value.
    value: Option<Url>,
}

#[derive(Debug, Args)]
struct RequestTimeoutArgs {
    /// New timeout in seconds. If omitted, prints the current value.
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    value: Option<u64>,
}

pub(crate) async fn exec(ctx: &Context, args: &SettingsArgs) -> Result<(), anyhow::Error> {
    match &args.setting {
        Setting::TrackerUrl(sub_args) => exec_tracker_url(ctx, sub_args),
        Setting::RequestTimeout(sub_args) => exec_request_timeout(ctx, sub_args),
    }
}

fn exec_tracker_url(ctx: &Context, args: &TrackerUrlArgs) -> Result<(), anyhow::Error> {
    match &args.value {
        Some(url) => {
            update(ctx, |settings| settings.tracker_url = url.clone())?;
            ctx.term.write_line(&format!("Set tracker-url to {url}"))?;
        }

        None => ctx.term.write_line(ctx.settings.tracker_url.as_str())?,
    }

    Ok(())
}

fn exec_request_timeout(ctx: &Context, args: &RequestTimeoutArgs) -> Result<(), anyhow::Error> {
    match args.value {
        Some(secs) => {
            update(ctx, |settings| settings.request_timeout_secs = secs)?;
            ctx.term
                .write_line(&format!("Set request-timeout to {secs} seconds"))?;
        }

        None => ctx
            .term
            .write_line(&ctx.settings.request_timeout_secs.to_string())?,
    }

    Ok(())
}

/// Re-reads the settings file, applies `f` and writes the result back.
fn update(ctx: &Context, f: impl FnOnce(&mut Settings)) -> Result<(), anyhow::Error> {
    let path = ctx.dirs.settings();
    let mut settings = Settings::load_from(&path)?;
    f(&mut settings);
    settings.write_to(&path)?;
    Ok(())
}
