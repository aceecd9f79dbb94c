//! Tracing initialization.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the stderr log subscriber.
///
/// `ASSAY_LOG` takes precedence, e.g. `ASSAY_LOG=assay=trace`. Otherwise the
/// level is `warn`, or `debug` with `--verbose`. Stdout stays reserved for
/// findings.
pub fn init(verbose: bool) {
    let default = if verbose {
        "assay=debug,assay_cli=debug"
    } else {
        "assay=warn,assay_cli=warn"
    };
    let filter = EnvFilter::try_from_env("ASSAY_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}
