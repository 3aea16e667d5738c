//! Story collection feature module.
//!
//! Owns the authoritative list of stories for a session.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - The ordered story list
//! - `intent.rs` - Replace-all and remove-by-id actions, plus their tagged encoding
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::{IntentError, StoriesIntent};
pub use reducer::StoriesReducer;
pub use state::StoriesState;
