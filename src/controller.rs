//! UI controller core: turns action responses into renders.
//!
//! Separated from the browser wiring in `dom` so it can be tested without
//! WASM. The DOM side only has to implement `RenderTarget` and `Clock`.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::ClientConfig;
use crate::net::api::{Action, ApiError};
use crate::net::types::GameState;
use crate::state::sequencer::{RequestSequencer, Ticket};
use crate::state::view::GameView;

/// The writable surface of the game page.
pub trait RenderTarget {
    fn set_xp(&mut self, text: &str);
    fn set_click_value(&mut self, text: &str);
    fn set_upgrade_cost(&mut self, text: &str);
    fn set_upgrade_disabled(&mut self, disabled: bool);
    fn set_monster_src(&mut self, src: &str);
}

/// Wall-clock source for image cache-busting.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> u64;
}

/// A request that has been issued but not yet resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pending {
    pub ticket: Ticket,
    pub action: Action,
    pub url: String,
}

/// What `Controller::finish` did with a response.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Rendered,
    /// A newer request already rendered; the response was dropped.
    Stale,
    /// The request failed; the page keeps its last rendered state.
    Failed(ApiError),
}

pub struct Controller<T, C> {
    target: T,
    clock: C,
    config: ClientConfig,
    sequencer: RequestSequencer,
}

impl<T: RenderTarget, C: Clock> Controller<T, C> {
    #[must_use]
    pub fn new(target: T, clock: C, config: ClientConfig) -> Self {
        let sequencer = RequestSequencer::new(config.ordering);
        Self { target, clock, config, sequencer }
    }

    /// Start a request for `action`.
    pub fn begin(&mut self, action: Action) -> Pending {
        let ticket = self.sequencer.issue();
        let url = action.endpoint(&self.config.api_base);
        log::debug!("{} request #{} -> POST {url}", action.name(), ticket.seq());
        Pending { ticket, action, url }
    }

    /// Handle the result of a request started with `begin`.
    pub fn finish(&mut self, pending: Pending, result: Result<GameState, ApiError>) -> Outcome {
        let state = match result {
            Ok(state) => state,
            Err(err) => {
                log::warn!("{} request #{} failed: {err}", pending.action.name(), pending.ticket.seq());
                return Outcome::Failed(err);
            }
        };
        if !self.sequencer.accept(pending.ticket) {
            log::debug!(
                "{} request #{} superseded by a newer response",
                pending.action.name(),
                pending.ticket.seq()
            );
            return Outcome::Stale;
        }
        self.render(&state);
        Outcome::Rendered
    }

    /// Mirror `state` into the page.
    pub fn render(&mut self, state: &GameState) {
        let view = GameView::new(state, &self.config.asset_base, self.clock.now_ms());
        view.apply(&mut self.target);
    }

    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
