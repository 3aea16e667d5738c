//! State for the load status.

use crate::ui::mvi::UiState;

/// Loading and error flags.
///
/// Both false means idle or success. `error` set means the most recent
/// load attempt did not populate the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadStatus {
    pub loading: bool,
    pub error: bool,
}

impl UiState for LoadStatus {}

impl LoadStatus {
    pub fn is_idle(&self) -> bool {
        !self.loading && !self.error
    }
}
