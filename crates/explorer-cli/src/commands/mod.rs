use clap::Subcommand;

pub(crate) mod settings;
pub(crate) mod show;

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Show running topologies
    Show(show::ShowArgs),

    /// View or change explorer settings
    Settings(settings::SettingsArgs),
}
