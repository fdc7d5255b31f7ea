//! Runtime scene parameters.
//!
//! Defaults come from `constants.rs`; the web frontend may override them from
//! the page query string (`?seed=7&count=30&interval=5&accent=2`).

use crate::constants::{ACCENT_INTERVAL_SECS, BODY_COUNT};
use crate::palette::ACCENTS;
use thiserror::Error;

/// Upper bound on `count`; keeps the instance buffer and solver bounded.
pub const MAX_BODY_COUNT: usize = 256;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
    #[error("`{key}` out of range: {value}")]
    OutOfRange { key: String, value: String },
    #[error("unknown parameter `{0}`")]
    UnknownKey(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneParams {
    pub body_count: usize,
    pub accent_interval_secs: f64,
    pub start_accent: usize,
    /// `None` draws a seed from entropy.
    pub seed: Option<u64>,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            body_count: BODY_COUNT,
            accent_interval_secs: ACCENT_INTERVAL_SECS,
            start_accent: 0,
            seed: None,
        }
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn out_of_range(key: &str, value: &str) -> ConfigError {
    ConfigError::OutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}

impl SceneParams {
    /// Apply one `key=value` override.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "seed" => self.seed = Some(parse(key, value)?),
            "count" => {
                let n: usize = parse(key, value)?;
                if n == 0 || n > MAX_BODY_COUNT {
                    return Err(out_of_range(key, value));
                }
                self.body_count = n;
            }
            "interval" => {
                let secs: f64 = parse(key, value)?;
                if !secs.is_finite() || secs < 0.25 {
                    return Err(out_of_range(key, value));
                }
                self.accent_interval_secs = secs;
            }
            "accent" => {
                let i: usize = parse(key, value)?;
                if i >= ACCENTS.len() {
                    return Err(out_of_range(key, value));
                }
                self.start_accent = i;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Apply every pair in a query string. Bad pairs are skipped and returned.
    pub fn apply_query(&mut self, query: &str) -> Vec<ConfigError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter_map(|pair| {
                let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
                self.set(k, v).err()
            })
            .collect()
    }

    /// Interval in milliseconds, as timer APIs expect.
    pub fn accent_interval_ms(&self) -> i32 {
        (self.accent_interval_secs * 1000.0).round() as i32
    }
}
