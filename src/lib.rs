//! # monster-clicker
//!
//! WASM client for the Monster Evolution Clicker page. It forwards the
//! click and upgrade buttons to the game server and mirrors the returned
//! game state into the already-rendered document.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`net`] | `GameState` wire type, action endpoints and HTTP transport |
//! | [`state`] | Render model and response ordering |
//! | [`controller`] | Testable controller core and its DOM seams |
//! | [`dom`] | Element lookup and listener wiring (browser only) |
//! | [`config`] | Client config read from `<body>` data attributes |

pub mod config;
pub mod controller;
pub mod dom;
pub mod net;
pub mod state;

/// WASM entry point: install panic hook and logger, then attach.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        // Another logger is already installed; keep using it.
        log::debug!("console logger not installed: {err}");
    }
    match dom::attach() {
        Ok(()) => log::info!("monster clicker attached"),
        Err(err) => log::error!("monster clicker failed to attach: {err}"),
    }
}
