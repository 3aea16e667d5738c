//! Load status feature module.
//!
//! Tracks whether a fetch is in flight and whether the last one failed,
//! independently of the story list itself.

mod intent;
mod reducer;
mod state;

pub use intent::StatusIntent;
pub use reducer::StatusReducer;
pub use state::LoadStatus;
