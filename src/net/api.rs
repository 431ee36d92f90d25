//! HTTP helpers for the two game actions.
//!
//! Client-side (hydrate): real `POST` requests via `gloo-net`.
//! Native builds: the transport reports `ApiError::Unavailable`, while
//! endpoint resolution and body decoding stay testable.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode (transport, status, malformed body, invalid state)
//! becomes an `ApiError` so the controller can log it and keep the last
//! rendered state on screen.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{GameState, InvalidState};

/// A user action forwarded to the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Gain `click_value` XP.
    Click,
    /// Spend XP on the next upgrade, if the server allows it.
    Upgrade,
}

impl Action {
    /// Path of the action endpoint, relative to the API base.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Click => "/click",
            Self::Upgrade => "/upgrade",
        }
    }

    /// Short name used in log lines.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Upgrade => "upgrade",
        }
    }

    /// Full endpoint URL under `api_base`.
    #[must_use]
    pub fn endpoint(self, api_base: &str) -> String {
        format!("{}{}", api_base.trim_end_matches('/'), self.path())
    }
}

/// Failure of an action round trip.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed game state: {0}")]
    Decode(String),
    #[error("invalid game state: {0}")]
    Invalid(#[from] InvalidState),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Decode and validate a response body.
///
/// # Errors
///
/// Returns `ApiError::Decode` if the body is not a `GameState` object, or
/// `ApiError::Invalid` if it decodes but breaks the state invariants.
pub fn decode_game_state(body: &str) -> Result<GameState, ApiError> {
    let state: GameState = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    state.validate()?;
    Ok(state)
}

/// Send `POST url` with an empty body and decode the returned game state.
///
/// # Errors
///
/// Returns an `ApiError` for transport failures, non-2xx statuses and
/// unusable bodies. Native builds always return `ApiError::Unavailable`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn post_action(url: &str) -> Result<GameState, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        if !(200..300).contains(&status) {
            return Err(ApiError::Status(status));
        }
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        decode_game_state(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
