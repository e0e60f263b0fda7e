use std::env;
use std::str::FromStr;

use strum::{AsRefStr, EnumString};

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const HOST: &str = "HOST";
    /// "development" (default) or "production". Production hides internal error detail.
    pub const ENVIRONMENT: &str = "NOTES_ENV";
    pub const BODY_LIMIT_BYTES: &str = "NOTES_BODY_LIMIT_BYTES";
    pub const CORS_MAX_AGE_SECS: &str = "NOTES_CORS_MAX_AGE_SECS";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 3000;
    pub const HOST: &str = "0.0.0.0";
    pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;
    pub const CORS_MAX_AGE_SECS: usize = 3600;
}

/// Deployment posture of the running service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub host: String,
    pub environment: Environment,
    pub body_limit_bytes: usize,
    pub cors_max_age_secs: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: defaults::PORT,
            host: defaults::HOST.to_string(),
            environment: Environment::default(),
            body_limit_bytes: defaults::BODY_LIMIT_BYTES,
            cors_max_age_secs: defaults::CORS_MAX_AGE_SECS,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the process environment in production)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup(env_vars::ENVIRONMENT) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!(
                    "Unknown {} value '{}', falling back to development",
                    env_vars::ENVIRONMENT,
                    raw
                );
                Environment::Development
            }),
            None => Environment::default(),
        };

        Self {
            port: parse_or_default(&lookup, env_vars::PORT, defaults::PORT),
            host: lookup(env_vars::HOST)
                .filter(|h| !h.trim().is_empty())
                .unwrap_or_else(|| defaults::HOST.to_string()),
            environment,
            body_limit_bytes: parse_or_default(
                &lookup,
                env_vars::BODY_LIMIT_BYTES,
                defaults::BODY_LIMIT_BYTES,
            ),
            cors_max_age_secs: parse_or_default(
                &lookup,
                env_vars::CORS_MAX_AGE_SECS,
                defaults::CORS_MAX_AGE_SECS,
            ),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("{} must be a valid number (got '{}'), using {}", key, raw, default);
            default
        }),
        None => default,
    }
}
