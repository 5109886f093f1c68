use std::env;

use anyhow::{Context, Result};

use crate::classifier::logora::{DEFAULT_API_URL, DEFAULT_LANGUAGE};
use crate::moderation::rate::DEFAULT_MODERATION_RATE;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy; every value has a default.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Moderation API base URL (MODERABLE_API_URL)
    pub api_url: String,
    /// Locale tag sent with every request (MODERABLE_LANGUAGE)
    pub language: String,
    /// Initial acceptance threshold (MODERABLE_RATE). Not range-checked.
    pub moderation_rate: f64,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. `load()` uses the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let moderation_rate = match lookup("MODERABLE_RATE") {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("MODERABLE_RATE is not a number: {raw:?}"))?,
            None => DEFAULT_MODERATION_RATE,
        };

        Ok(Self {
            api_url: lookup("MODERABLE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            language: lookup("MODERABLE_LANGUAGE")
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            moderation_rate,
        })
    }
}
