//! Networking modules for the click/upgrade HTTP round trip.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the action requests and maps failures onto `ApiError`;
//! `types` defines the `GameState` payload the server returns.

pub mod api;
pub mod types;
