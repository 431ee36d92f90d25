//! Client configuration parsed from `<body>` data attributes.
//!
//! Recognized attributes (all optional):
//! - `data-api-base`: prefix for the action endpoints, default same origin
//! - `data-asset-base`: prefix for monster images, default `/static`
//! - `data-response-order`: `last-write-wins` (default) or `latest-request`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::state::sequencer::OrderingPolicy;

pub const DEFAULT_API_BASE: &str = "";
pub const DEFAULT_ASSET_BASE: &str = "/static";

pub const ATTR_API_BASE: &str = "data-api-base";
pub const ATTR_ASSET_BASE: &str = "data-asset-base";
pub const ATTR_RESPONSE_ORDER: &str = "data-response-order";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown response order '{0}' (expected last-write-wins or latest-request)")]
    InvalidOrdering(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub asset_base: String,
    pub ordering: OrderingPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            asset_base: DEFAULT_ASSET_BASE.to_owned(),
            ordering: OrderingPolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Build config from an attribute lookup (`name -> value`).
    ///
    /// Missing attributes fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOrdering` for an unrecognized
    /// `data-response-order` value.
    pub fn from_attributes<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = lookup(ATTR_API_BASE).unwrap_or_else(|| DEFAULT_API_BASE.to_owned());
        let asset_base = lookup(ATTR_ASSET_BASE)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ASSET_BASE.to_owned());
        let ordering = parse_ordering(lookup(ATTR_RESPONSE_ORDER).as_deref())?;
        Ok(Self { api_base, asset_base, ordering })
    }
}

fn parse_ordering(raw: Option<&str>) -> Result<OrderingPolicy, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(OrderingPolicy::default());
    };
    match raw.to_ascii_lowercase().as_str() {
        "last-write-wins" => Ok(OrderingPolicy::LastWriteWins),
        "latest-request" => Ok(OrderingPolicy::LatestRequest),
        _ => Err(ConfigError::InvalidOrdering(raw.to_owned())),
    }
}
