//! Logger initialization for pack binaries.

/// Initializes logging for one pack binary run.
///
/// Honors `RUST_LOG` from the environment; `--verbose` overrides it and
/// forces debug-level output.
pub fn init_logger(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}
