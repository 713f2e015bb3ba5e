//! Diagnostic logging setup for the command-line tool.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `docview=debug`.
pub const LOG_ENV: &str = "DOCVIEW_LOG";

/// Filter directive used when `DOCVIEW_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
	if verbose { "debug" } else { "warn" }
}

/// Install a stderr subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
	let filter = EnvFilter::try_from_env(LOG_ENV)
		.unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbose_raises_default_level() {
		assert_eq!(default_directive(false), "warn");
		assert_eq!(default_directive(true), "debug");
	}

	#[test]
	fn init_twice_does_not_panic() {
		init(false);
		init(true);
	}
}
