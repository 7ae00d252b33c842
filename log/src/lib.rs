use std::{env, fmt::Display, str::FromStr};

use backtrace::Backtrace;
use tracing::{debug, error, info, level_filters::LevelFilter, trace, warn};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` overrides the configured filter.
pub fn init(display_level: &bool, level_filter: &str) {
    let filter = match env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.is_empty() => EnvFilter::new(directives),
        _ => match LevelFilter::from_str(level_filter) {
            Ok(level) => EnvFilter::default().add_directive(level.into()),
            Err(err) => panic!("Invalid log level filter '{level_filter}': {err}"),
        },
    };

    tracing_subscriber::fmt()
        .with_level(*display_level)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

pub fn trace<T: Display>(prefix: Option<&str>, msg: T) {
    trace!("{} {msg}", prefix.unwrap_or("🐾"));
}

pub fn debug<T: Display>(prefix: Option<&str>, msg: T) {
    debug!("{} {msg}", prefix.unwrap_or("🔎"));
}

pub fn info<T: Display>(prefix: Option<&str>, msg: T) {
    info!("{} {msg}", prefix.unwrap_or("📄"));
}

pub fn warn<T: Display>(prefix: Option<&str>, msg: T) {
    warn!("{} {msg}", prefix.unwrap_or("⚠️"));
}

/// Logs at error level, with a captured backtrace when `RUST_BACKTRACE` asks for one.
pub fn error<T: Display>(prefix: Option<&str>, msg: T) {
    let prefix = prefix.unwrap_or("🚨");
    match backtrace_enabled() {
        true => error!("{prefix} {msg}\n{:?}", Backtrace::new()),
        false => error!("{prefix} {msg}"),
    }
}

pub fn panic<T: Display>(prefix: Option<&str>, msg: T) -> ! {
    panic!("{} {msg}", prefix.unwrap_or("☠️"))
}

fn backtrace_enabled() -> bool {
    env::var("RUST_BACKTRACE").is_ok_and(|var| var == "1" || var == "full")
}
