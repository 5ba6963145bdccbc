// Conditional logging macros - only active in debug builds

use env_logger::Env;
use log::LevelFilter;

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

/// Most verbose flag wins; warnings only when no flag is set.
#[must_use]
pub fn level_from_flags(verbose: bool, debug: bool, trace: bool) -> LevelFilter {
    if trace {
        LevelFilter::Trace
    } else if debug {
        LevelFilter::Debug
    } else if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    }
}

/// Installs the global logger. `RUST_LOG` overrides `level` when set.
pub fn init_logging(level: LevelFilter) {
    let env = Env::default().default_filter_or(level.as_str().to_lowercase());
    // A second init (e.g. from tests) keeps the first logger.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_flags() {
        assert_eq!(level_from_flags(false, false, false), LevelFilter::Warn);
        assert_eq!(level_from_flags(true, false, false), LevelFilter::Info);
        assert_eq!(level_from_flags(true, true, false), LevelFilter::Debug);
        assert_eq!(level_from_flags(false, true, true), LevelFilter::Trace);
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(LevelFilter::Warn);
        init_logging(LevelFilter::Debug);
        log::warn!("logger installed");
    }
}
