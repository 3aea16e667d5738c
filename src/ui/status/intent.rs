//! Intents for the load status.

use crate::ui::mvi::Intent;

/// Load lifecycle events, dispatched by the controller around a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIntent {
    /// A fetch was issued.
    LoadStarted,

    /// The latest fetch resolved and its stories were applied.
    LoadSucceeded,

    /// The latest fetch was rejected by the provider.
    LoadFailed,
}

impl Intent for StatusIntent {}
