use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::matching::experience::DEFAULT_TOLERANCE_YEARS;
use crate::matching::match_tier::{
    MatchThresholds, DEFAULT_HIGH_THRESHOLD, DEFAULT_MEDIUM_THRESHOLD,
};
use crate::matching::summary::ScreeningConfig;

/// Screening configuration loaded from environment variables.
/// Every variable is optional; defaults match the dashboard's badge rules.
#[derive(Debug, Clone)]
pub struct Config {
    pub high_threshold: i64,
    pub medium_threshold: i64,
    pub experience_tolerance_years: f64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            high_threshold: parse_or(&lookup, "MATCH_HIGH_THRESHOLD", DEFAULT_HIGH_THRESHOLD)?,
            medium_threshold: parse_or(
                &lookup,
                "MATCH_MEDIUM_THRESHOLD",
                DEFAULT_MEDIUM_THRESHOLD,
            )?,
            experience_tolerance_years: parse_or(
                &lookup,
                "EXPERIENCE_TOLERANCE_YEARS",
                DEFAULT_TOLERANCE_YEARS,
            )?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        };

        if config.medium_threshold > config.high_threshold {
            bail!(
                "MATCH_MEDIUM_THRESHOLD ({}) must not exceed MATCH_HIGH_THRESHOLD ({})",
                config.medium_threshold,
                config.high_threshold
            );
        }
        if !config.experience_tolerance_years.is_finite() {
            bail!("EXPERIENCE_TOLERANCE_YEARS must be a finite number");
        }

        Ok(config)
    }

    pub fn screening(&self) -> ScreeningConfig {
        ScreeningConfig {
            thresholds: MatchThresholds {
                high: self.high_threshold,
                medium: self.medium_threshold,
            },
            experience_tolerance_years: self.experience_tolerance_years,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
