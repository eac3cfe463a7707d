use std::io::IsTerminal;

use tracing::{
    Level,
    subscriber::{SetGlobalDefaultError, set_global_default},
};
use tracing_subscriber::{
    Layer, Registry,
    filter::{self, FilterExt},
    fmt,
    layer::SubscriberExt,
};

/// Installs the global subscriber. Log records go to stderr so stdout only
/// carries command output.
///
/// Warnings and errors are always shown, debug records only when `debug` is set.
pub(crate) fn init(debug: bool) -> Result<(), SetGlobalDefaultError> {
    let max_level = if debug { Level::DEBUG } else { Level::WARN };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false);

    let reg = Registry::default().with(
        stderr_layer.with_filter(
            filter::filter_fn(move |md| md.level() <= &max_level)
                //
                // Dependencies (http client, runtime) stay quiet unless they warn
                .and(filter::filter_fn(|md| {
                    md.level() <= &Level::WARN || md.target().starts_with("explorer")
                })),
        ),
    );

    set_global_default(reg)
}
