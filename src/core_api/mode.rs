//! Resolution mode selection.
//!
//! Label resolution is lenient unless `DOCVIEW_STRICT` is set to a truthy
//! value (`1`, `true`, `yes`, `on`), in which case malformed type descriptors
//! fail the render instead of degrading to their name.

use crate::model::ResolveMode;

/// Environment variable that switches resolution to strict mode.
pub const STRICT_ENV: &str = "DOCVIEW_STRICT";

/// Determine the resolution mode from the environment.
pub fn mode_from_env() -> ResolveMode {
	let raw = std::env::var(STRICT_ENV).unwrap_or_default();
	parse_mode(&raw)
}

fn parse_mode(raw: &str) -> ResolveMode {
	let v = raw.trim().to_ascii_lowercase();
	if matches!(v.as_str(), "1" | "true" | "yes" | "on") {
		ResolveMode::Strict
	} else {
		ResolveMode::Lenient
	}
}
