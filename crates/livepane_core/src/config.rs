//! Configuration loading from environment variables.

use crate::constants::{DEFAULT_MAX_REQUEST_SIZE, DEFAULT_PORT, DEFAULT_RENDER_DEBOUNCE_MS};
use crate::session::RenderPolicy;
use std::env;
use std::time::Duration;

/// Runtime configuration for LivePane.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub max_request_size: usize,
    pub render_debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            max_request_size: DEFAULT_MAX_REQUEST_SIZE,
            render_debounce_ms: DEFAULT_RENDER_DEBOUNCE_MS,
        }
    }
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
///
/// # Arguments
/// - `name`: Environment variable name.
///
/// # Returns
/// `true` when the value is a recognized truthy value.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

fn env_parsed<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid {}='{}'", name, raw);
            None
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing
    /// or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env_parsed("PORT").unwrap_or(defaults.port),
            max_request_size: env_parsed("MAX_REQUEST_SIZE").unwrap_or(defaults.max_request_size),
            render_debounce_ms: env_parsed("RENDER_DEBOUNCE_MS")
                .unwrap_or(defaults.render_debounce_ms),
        }
    }

    /// Render policy implied by `render_debounce_ms`.
    pub fn render_policy(&self) -> RenderPolicy {
        if self.render_debounce_ms == 0 {
            RenderPolicy::EveryEdit
        } else {
            RenderPolicy::Debounced(Duration::from_millis(self.render_debounce_ms))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_env_flag, Config};
    use crate::env::{env_lock, EnvGuard};
    use crate::session::RenderPolicy;
    use crate::DEFAULT_PORT;
    use std::time::Duration;

    #[test]
    fn parse_env_flag_accepts_truthy_values() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert_eq!(parse_env_flag(value), Some(true), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_accepts_falsy_values() {
        for value in ["", "0", "false", "FALSE", " no ", "off"] {
            assert_eq!(parse_env_flag(value), Some(false), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_rejects_unknown_values() {
        assert_eq!(parse_env_flag("maybe"), None);
        assert_eq!(parse_env_flag("enabled"), None);
    }

    #[test]
    fn from_env_applies_defaults_and_ignores_garbage() {
        let _lock = env_lock().lock().expect("env lock");
        let _port = EnvGuard::set("PORT", "not-a-port");
        let _size = EnvGuard::remove("MAX_REQUEST_SIZE");
        let _debounce = EnvGuard::remove("RENDER_DEBOUNCE_MS");

        let config = Config::from_env();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.render_policy(), RenderPolicy::EveryEdit);
    }

    #[test]
    fn from_env_reads_debounce_into_render_policy() {
        let _lock = env_lock().lock().expect("env lock");
        let _port = EnvGuard::set("PORT", " 4100 ");
        let _debounce = EnvGuard::set("RENDER_DEBOUNCE_MS", "250");

        let config = Config::from_env();
        assert_eq!(config.port, 4100);
        assert_eq!(
            config.render_policy(),
            RenderPolicy::Debounced(Duration::from_millis(250))
        );
    }
}
