//! Reducer for the load status.

use crate::ui::mvi::Reducer;

use super::intent::StatusIntent;
use super::state::LoadStatus;

/// Reducer for load status transitions.
///
/// A failed load clears `loading` as well as setting `error`, so the
/// two flags never claim "still loading" and "failed" at the same time.
pub struct StatusReducer;

impl Reducer for StatusReducer {
    type State = LoadStatus;
    type Intent = StatusIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StatusIntent::LoadStarted => LoadStatus {
                loading: true,
                error: false,
            },
            StatusIntent::LoadSucceeded => LoadStatus {
                loading: false,
                error: false,
            },
            StatusIntent::LoadFailed => LoadStatus {
                loading: false,
                error: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert!(LoadStatus::default().is_idle());
    }

    #[test]
    fn start_sets_loading() {
        let new = StatusReducer::reduce(LoadStatus::default(), StatusIntent::LoadStarted);
        assert!(new.loading);
        assert!(!new.error);
    }

    #[test]
    fn start_after_failure_clears_error() {
        let failed = LoadStatus {
            loading: false,
            error: true,
        };
        let new = StatusReducer::reduce(failed, StatusIntent::LoadStarted);
        assert_eq!(
            new,
            LoadStatus {
                loading: true,
                error: false
            }
        );
    }

    #[test]
    fn success_returns_to_idle() {
        let state = StatusReducer::reduce(LoadStatus::default(), StatusIntent::LoadStarted);
        let state = StatusReducer::reduce(state, StatusIntent::LoadSucceeded);
        assert!(state.is_idle());
    }

    #[test]
    fn failure_sets_error_and_clears_loading() {
        let state = StatusReducer::reduce(LoadStatus::default(), StatusIntent::LoadStarted);
        let state = StatusReducer::reduce(state, StatusIntent::LoadFailed);
        assert!(state.error);
        assert!(!state.loading);
    }
}
