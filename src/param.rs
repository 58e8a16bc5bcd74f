use log::LevelFilter;

/// log level used when the environment does not pick one
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;
/// environment variable selecting the log level
pub const LOG_ENV: &str = "RT_LOG";
/// exit status of a process that panicked
pub const PANIC_EXIT_CODE: i32 = 101;
