//! Environment-variable configuration for the generation collaborator.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Settings for reaching the generation collaborator over HTTP.
#[derive(Clone)]
pub struct GenSettings {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub backoff_base_ms: u64,
}

impl std::fmt::Debug for GenSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &"[redacted]")
            .field("model", &self.model)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("backoff_base_ms", &self.backoff_base_ms)
            .finish()
    }
}

/// Load generation settings from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if `MCR_GEN_API_KEY` is missing or a numeric
/// override does not parse.
pub fn load_gen_settings() -> Result<GenSettings, ConfigError> {
    dotenvy::dotenv().ok();
    build_gen_settings(|key| std::env::var(key))
}

/// Build generation settings using the provided env-var lookup function.
///
/// The core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn build_gen_settings<F>(lookup: F) -> Result<GenSettings, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_key = require("MCR_GEN_API_KEY")?;
    let base_url = or_default("MCR_GEN_BASE_URL", "https://api.openai.com");
    let model = or_default("MCR_GEN_MODEL", "gpt-4o-mini");
    let request_timeout_secs = parse_u64("MCR_GEN_TIMEOUT_SECS", "30")?;
    let max_retries = parse_u32("MCR_GEN_MAX_RETRIES", "0")?;
    let backoff_base_ms = parse_u64("MCR_GEN_BACKOFF_BASE_MS", "1000")?;

    Ok(GenSettings {
        base_url,
        api_key,
        model,
        request_timeout_secs,
        max_retries,
        backoff_base_ms,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("MCR_GEN_API_KEY", "test-key");
        m
    }

    #[test]
    fn fails_without_api_key() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_gen_settings(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "MCR_GEN_API_KEY"),
            "expected MissingEnvVar(MCR_GEN_API_KEY), got: {result:?}"
        );
    }

    #[test]
    fn defaults_apply_with_only_required_vars() {
        let map = full_env();
        let settings = build_gen_settings(lookup_from_map(&map)).unwrap();
        assert_eq!(settings.base_url, "https://api.openai.com");
        assert_eq!(settings.model, "gpt-4o-mini");
        assert_eq!(settings.request_timeout_secs, 30);
        assert_eq!(settings.max_retries, 0);
        assert_eq!(settings.backoff_base_ms, 1000);
    }

    #[test]
    fn overrides_are_honoured() {
        let mut map = full_env();
        map.insert("MCR_GEN_BASE_URL", "http://localhost:8080");
        map.insert("MCR_GEN_MODEL", "local-model");
        map.insert("MCR_GEN_TIMEOUT_SECS", "5");
        map.insert("MCR_GEN_MAX_RETRIES", "2");
        let settings = build_gen_settings(lookup_from_map(&map)).unwrap();
        assert_eq!(settings.base_url, "http://localhost:8080");
        assert_eq!(settings.model, "local-model");
        assert_eq!(settings.request_timeout_secs, 5);
        assert_eq!(settings.max_retries, 2);
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let mut map = full_env();
        map.insert("MCR_GEN_TIMEOUT_SECS", "not-a-number");
        let result = build_gen_settings(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MCR_GEN_TIMEOUT_SECS"),
            "expected InvalidEnvVar(MCR_GEN_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let map = full_env();
        let settings = build_gen_settings(lookup_from_map(&map)).unwrap();
        let debug = format!("{settings:?}");
        assert!(!debug.contains("test-key"), "api key leaked: {debug}");
        assert!(debug.contains("[redacted]"));
    }
}
