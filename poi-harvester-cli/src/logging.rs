//! Log sink for the binary.

use env_logger::{Builder, Env};
use log::debug;

/// Level used unless `RUST_LOG` says otherwise.
pub(crate) const fn default_filter(quiet: bool) -> &'static str {
    if quiet { "error" } else { "info" }
}

/// Install `env_logger` on stderr.
///
/// Status messages are `info` records, so `--quiet` hides them while keeping
/// errors visible. A second call is a no-op.
pub(crate) fn init_logging(quiet: bool) {
    let installed = Builder::from_env(Env::default().default_filter_or(default_filter(quiet)))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
    if installed.is_err() {
        debug!("logger already installed");
    }
}
