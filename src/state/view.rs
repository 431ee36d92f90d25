//! Render model for one `GameState`.
//!
//! `GameView::new` computes every value the page shows; `apply` writes them
//! into a `RenderTarget`. Keeping the two apart lets tests check the render
//! contract without a browser.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::controller::RenderTarget;
use crate::net::types::GameState;

/// Displayed values derived from a `GameState`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameView {
    pub xp: String,
    pub click_value: String,
    pub upgrade_cost: String,
    pub upgrade_disabled: bool,
    pub monster_src: String,
}

impl GameView {
    /// Build the view for `state`, cache-busting the image with `now_ms`.
    #[must_use]
    pub fn new(state: &GameState, asset_base: &str, now_ms: u64) -> Self {
        Self {
            xp: format_number(state.xp),
            click_value: format_number(state.click_value),
            upgrade_cost: format_number(state.upgrade_cost),
            upgrade_disabled: !state.can_upgrade(),
            monster_src: monster_src(asset_base, state.stage, now_ms),
        }
    }

    /// Write every displayed value into `target`.
    pub fn apply<T: RenderTarget + ?Sized>(&self, target: &mut T) {
        target.set_xp(&self.xp);
        target.set_click_value(&self.click_value);
        target.set_upgrade_cost(&self.upgrade_cost);
        target.set_upgrade_disabled(self.upgrade_disabled);
        target.set_monster_src(&self.monster_src);
    }
}

/// Image URL for `stage`, e.g. `/static/stage2.png?t=1700000000000`.
#[must_use]
pub fn monster_src(asset_base: &str, stage: u32, now_ms: u64) -> String {
    format!("{}/stage{stage}.png?t={now_ms}", asset_base.trim_end_matches('/'))
}

/// Shortest decimal text for a JSON number; integral values have no `.0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Also normalizes -0.
        return "0".to_owned();
    }
    value.to_string()
}
