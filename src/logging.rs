//! Logger setup for the command-line binary

use log::LevelFilter;

/// Pick the log level from the verbosity flags
///
/// `None` leaves the choice to `RUST_LOG`, falling back to `info`.
pub fn level_from_flags(verbose: bool, quiet: bool) -> Option<LevelFilter> {
    match (verbose, quiet) {
        (true, _) => Some(LevelFilter::Debug),
        (false, true) => Some(LevelFilter::Error),
        (false, false) => None,
    }
}

/// Install env_logger as the global logger
///
/// Messages go to stderr without timestamps. Calling this twice is harmless;
/// the second call is ignored.
pub fn init(level: Option<LevelFilter>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    builder.format_timestamp(None).format_target(false);
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.try_init();
}
