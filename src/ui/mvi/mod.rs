//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of state the controller owns changes the same way:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ derived view
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: plain data, cloned to produce the next value
//! - **Intent**: a discrete request to change that data
//! - **Reducer**: pure function from (State, Intent) to the next State

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
