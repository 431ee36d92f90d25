//! Client-side state derived from server responses.
//!
//! DESIGN
//! ======
//! Nothing here touches the DOM. `view` turns a `GameState` into the exact
//! values to display and `sequencer` decides which responses may render.

pub mod sequencer;
pub mod view;
