//! Tracing subscriber setup for applications built on the toolkit

use std::env;
use tracing_subscriber::EnvFilter;

const CRATE_TARGET: &str = "consolekit";

/// Build the filter directive string from `RUST_LOG` and a default level
///
/// `RUST_LOG` wins when it already mentions the crate; otherwise the crate's
/// default directive is appended to it.
pub fn filter_directives(level: &str, env_override: Option<&str>) -> String {
    let default_directive = format!("{CRATE_TARGET}={}", level.trim().to_lowercase());
    match env_override.map(str::trim) {
        None | Some("") => default_directive,
        Some(directives) if directives.contains(CRATE_TARGET) => directives.to_string(),
        Some(directives) => format!("{directives},{default_directive}"),
    }
}

/// Install a formatting subscriber filtered at `level` for this crate
///
/// Returns `false` when a global subscriber is already installed.
pub fn init(level: &str) -> bool {
    let env_override = env::var("RUST_LOG").ok();
    let directives = filter_directives(level, env_override.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directives))
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
