use anyhow::{bail, Result};
use dotenvy::dotenv;
use std::env;
use tinyhouse_client::{ClientConfig, OverlapPolicy, StatusPolicy, DEFAULT_ENDPOINT};

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub api_url: String,
    pub reject_non_2xx: bool,
    pub fence_stale: bool,
}

impl CliConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            api_url: lookup("TINYHOUSE_API_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            reject_non_2xx: parse_flag("TINYHOUSE_REJECT_NON_2XX", lookup("TINYHOUSE_REJECT_NON_2XX"))?,
            fence_stale: parse_flag("TINYHOUSE_FENCE_STALE", lookup("TINYHOUSE_FENCE_STALE"))?,
        })
    }

    pub fn into_client_config(self) -> ClientConfig {
        let status_policy = if self.reject_non_2xx {
            StatusPolicy::RejectNon2xx
        } else {
            StatusPolicy::ParseBody
        };
        let overlap_policy = if self.fence_stale {
            OverlapPolicy::LatestIssued
        } else {
            OverlapPolicy::LastSettled
        };

        ClientConfig::new(self.api_url)
            .with_status_policy(status_policy)
            .with_overlap_policy(overlap_policy)
    }
}

fn parse_flag(key: &str, value: Option<String>) -> Result<bool> {
    let Some(value) = value else {
        return Ok(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        other => bail!("{} must be a boolean, got {:?}", key, other),
    }
}
