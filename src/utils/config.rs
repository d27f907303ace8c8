use std::{str::FromStr, time::Duration};

use thiserror::Error;

use crate::{services::station_lookup::policy::LookupPolicy, types::coordinate::Coordinate};

pub const DEFAULT_OPENAQ_HOST: &str = "https://api.openaq.org";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub openaq_host: String,
    pub openaq_key: String,
    pub auth_key: Option<String>,
    pub bind_addr: String,
    pub lookup_policy: LookupPolicy,
    pub default_position: Option<Coordinate>,
    pub reading_cache: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        let openaq_key = get("OPENAQ_API_KEY").ok_or(ConfigError::Missing("OPENAQ_API_KEY"))?;

        let defaults = LookupPolicy::default();
        let step_degrees = parse(&get, "LOOKUP_STEP_DEGREES")?.unwrap_or(defaults.step_degrees);
        if !step_degrees.is_finite() {
            return Err(invalid("LOOKUP_STEP_DEGREES", step_degrees, "must be finite"));
        }

        let max_attempts = parse(&get, "LOOKUP_MAX_ATTEMPTS")?.unwrap_or(defaults.max_attempts);
        if max_attempts == 0 {
            return Err(invalid("LOOKUP_MAX_ATTEMPTS", max_attempts, "must be at least 1"));
        }

        let radius_meters = parse(&get, "LOOKUP_RADIUS_METERS")?.unwrap_or(defaults.radius_meters);
        if radius_meters == 0 {
            return Err(invalid("LOOKUP_RADIUS_METERS", radius_meters, "must be at least 1"));
        }

        let timeout = parse::<u64, _>(&get, "LOOKUP_TIMEOUT_SECS")?.map(Duration::from_secs);

        let default_position = match (
            parse::<f64, _>(&get, "DEFAULT_LATITUDE")?,
            parse::<f64, _>(&get, "DEFAULT_LONGITUDE")?,
        ) {
            (Some(latitude), Some(longitude)) => Some(Coordinate::new(latitude, longitude)),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing("DEFAULT_LONGITUDE")),
            (None, Some(_)) => return Err(ConfigError::Missing("DEFAULT_LATITUDE")),
        };

        Ok(AppConfig {
            openaq_host: get("OPENAQ_HOST").unwrap_or_else(|| DEFAULT_OPENAQ_HOST.to_string()),
            openaq_key,
            auth_key: get("AUTH_KEY"),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            lookup_policy: LookupPolicy {
                step_degrees,
                max_attempts,
                radius_meters,
                timeout,
            },
            default_position,
            reading_cache: parse(&get, "READING_CACHE")?.unwrap_or(false),
        })
    }
}

#[cfg(test)]
impl AppConfig {
    pub fn for_tests() -> Self {
        AppConfig {
            openaq_host: "http://localhost".to_string(),
            openaq_key: "key".to_string(),
            auth_key: None,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            lookup_policy: LookupPolicy::default(),
            default_position: None,
            reading_cache: false,
        }
    }
}

fn parse<T, F>(get: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    get(key)
        .map(|value| {
            value.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
                key,
                value: value.clone(),
                reason: e.to_string(),
            })
        })
        .transpose()
}

fn invalid(key: &'static str, value: impl ToString, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
