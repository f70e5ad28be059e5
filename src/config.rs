//! Runtime settings, read from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `CANTEEN_PAYMENT_DELAY_MS` | 2000 |
//! | `CANTEEN_STATUS_DELAY_MIN_SECS` | 60 |
//! | `CANTEEN_STATUS_DELAY_MAX_SECS` | 90 |
//! | `CANTEEN_ACTOR_BUFFER` | 32 |

use crate::payment::DEFAULT_PAYMENT_DELAY;
use crate::tracking::DelayPolicy;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

pub const PAYMENT_DELAY_VAR: &str = "CANTEEN_PAYMENT_DELAY_MS";
pub const STATUS_DELAY_MIN_VAR: &str = "CANTEEN_STATUS_DELAY_MIN_SECS";
pub const STATUS_DELAY_MAX_VAR: &str = "CANTEEN_STATUS_DELAY_MAX_SECS";
pub const ACTOR_BUFFER_VAR: &str = "CANTEEN_ACTOR_BUFFER";

const DEFAULT_ACTOR_BUFFER: usize = 32;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("Status delay range is empty: min {min:?} >= max {max:?}")]
    EmptyDelayRange { min: Duration, max: Duration },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CanteenConfig {
    /// How long the simulated gateway takes to answer.
    pub payment_delay: Duration,
    /// Delay range between status transitions.
    pub status_delay: DelayPolicy,
    /// Mailbox size for each actor.
    pub actor_buffer: usize,
}

impl Default for CanteenConfig {
    fn default() -> Self {
        Self {
            payment_delay: DEFAULT_PAYMENT_DELAY,
            status_delay: DelayPolicy::default(),
            actor_buffer: DEFAULT_ACTOR_BUFFER,
        }
    }
}

impl CanteenConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(non_empty_var)
    }

    /// Builds the config from any key lookup; unset keys take their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let payment_ms: u64 = try_load(
            &lookup,
            PAYMENT_DELAY_VAR,
            defaults.payment_delay.as_millis() as u64,
        )?;
        let min_secs: u64 = try_load(
            &lookup,
            STATUS_DELAY_MIN_VAR,
            defaults.status_delay.min.as_secs(),
        )?;
        let max_secs: u64 = try_load(
            &lookup,
            STATUS_DELAY_MAX_VAR,
            defaults.status_delay.max.as_secs(),
        )?;
        let actor_buffer: usize = try_load(&lookup, ACTOR_BUFFER_VAR, defaults.actor_buffer)?;

        let status_delay = DelayPolicy::new(
            Duration::from_secs(min_secs),
            Duration::from_secs(max_secs),
        );
        if status_delay.min >= status_delay.max {
            return Err(ConfigError::EmptyDelayRange {
                min: status_delay.min,
                max: status_delay.max,
            });
        }
        // tokio's mpsc panics on a zero capacity
        if actor_buffer == 0 {
            return Err(ConfigError::Zero(ACTOR_BUFFER_VAR));
        }

        Ok(Self {
            payment_delay: Duration::from_millis(payment_ms),
            status_delay,
            actor_buffer,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.trim().is_empty())
}

fn try_load<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CanteenConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CanteenConfig::default());
        assert_eq!(config.payment_delay, Duration::from_secs(2));
        assert_eq!(config.status_delay.min, Duration::from_secs(60));
        assert_eq!(config.status_delay.max, Duration::from_secs(90));
        assert_eq!(config.actor_buffer, 32);
    }

    #[test]
    fn test_overrides() {
        let config = CanteenConfig::from_lookup(lookup(&[
            (PAYMENT_DELAY_VAR, "10"),
            (STATUS_DELAY_MIN_VAR, "1"),
            (STATUS_DELAY_MAX_VAR, " 3 "),
            (ACTOR_BUFFER_VAR, "4"),
        ]))
        .unwrap();

        assert_eq!(config.payment_delay, Duration::from_millis(10));
        assert_eq!(config.status_delay, DelayPolicy::new(Duration::from_secs(1), Duration::from_secs(3)));
        assert_eq!(config.actor_buffer, 4);
    }

    #[test]
    fn test_invalid_number() {
        let err = CanteenConfig::from_lookup(lookup(&[(PAYMENT_DELAY_VAR, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: PAYMENT_DELAY_VAR, .. }));
    }

    #[test]
    fn test_empty_delay_range() {
        let err = CanteenConfig::from_lookup(lookup(&[
            (STATUS_DELAY_MIN_VAR, "90"),
            (STATUS_DELAY_MAX_VAR, "60"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyDelayRange { .. }));
    }

    #[test]
    fn test_zero_buffer() {
        let err = CanteenConfig::from_lookup(lookup(&[(ACTOR_BUFFER_VAR, "0")])).unwrap_err();
        assert_eq!(err, ConfigError::Zero(ACTOR_BUFFER_VAR));
    }
}
