//! Subscriber setup shared by the binaries.

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

use crate::schema::LogLevel;

/// Install the global `fmt` subscriber, writing to stderr.
pub fn init(cli_override: Option<&str>, level: LogLevel) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(cli_override, level, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Combine `RUST_LOG`, the `--log-level` flag and the configured level.
///
/// `RUST_LOG` is the base filter. The flag is always added on top of it.
/// The configured level is only used when neither is set, so a bare
/// `RUST_LOG=debug` is not overridden by the config default.
pub fn build_filter(
    cli_override: Option<&str>,
    level: LogLevel,
    rust_log: Option<&str>,
) -> EnvFilter {
    let filter = match rust_log {
        Some(env) if !env.trim().is_empty() => EnvFilter::new(env),
        _ => {
            let directive = cli_override.unwrap_or(level.as_directive());
            return EnvFilter::default().add_directive(parse_directive(directive));
        }
    };

    match cli_override {
        Some(directive) => filter.add_directive(parse_directive(directive)),
        None => filter,
    }
}

/// Parse a filter directive, falling back to `warn` when it is malformed.
pub fn parse_directive(directive: &str) -> Directive {
    directive
        .parse()
        .unwrap_or_else(|_| LevelFilter::WARN.into())
}
