//! Wire schema for the game state returned by every action endpoint.
//!
//! DESIGN
//! ======
//! The server owns all game rules. The client only checks that a decoded
//! payload is displayable (finite, non-negative, positive click value)
//! before it reaches the render path.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Snapshot of the player's progress, as sent by `/click` and `/upgrade`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Current experience points.
    pub xp: f64,
    /// Experience gained per click.
    pub click_value: f64,
    /// Experience required to buy the next upgrade.
    pub upgrade_cost: f64,
    /// Monster evolution stage; selects the image asset.
    pub stage: u32,
}

/// A decoded payload that violates the `GameState` invariants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidState {
    #[error("{0} is not a finite number")]
    NonFinite(&'static str),
    #[error("{0} is negative")]
    Negative(&'static str),
    #[error("click_value must be positive")]
    NonPositiveClickValue,
}

impl GameState {
    /// Whether the player can afford the next upgrade.
    ///
    /// Equal XP is enough; only strictly less blocks the upgrade.
    #[must_use]
    pub fn can_upgrade(&self) -> bool {
        self.xp >= self.upgrade_cost
    }

    /// Check the numeric invariants of a freshly decoded state.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant, checking `xp`, `click_value`
    /// and `upgrade_cost` in that order.
    pub fn validate(&self) -> Result<(), InvalidState> {
        for (name, value) in [
            ("xp", self.xp),
            ("click_value", self.click_value),
            ("upgrade_cost", self.upgrade_cost),
        ] {
            if !value.is_finite() {
                return Err(InvalidState::NonFinite(name));
            }
        }
        if self.xp < 0.0 {
            return Err(InvalidState::Negative("xp"));
        }
        if self.click_value <= 0.0 {
            return Err(InvalidState::NonPositiveClickValue);
        }
        if self.upgrade_cost < 0.0 {
            return Err(InvalidState::Negative("upgrade_cost"));
        }
        Ok(())
    }
}
