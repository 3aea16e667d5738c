//! Reducer for the story collection.

use std::collections::HashSet;

use crate::story::Story;
use crate::ui::mvi::Reducer;

use super::intent::StoriesIntent;
use super::state::StoriesState;

/// Reducer for story collection transitions.
///
/// Pure function. Loading, persistence and logging of load outcomes
/// happen in the caller around the dispatch call.
pub struct StoriesReducer;

impl Reducer for StoriesReducer {
    type State = StoriesState;
    type Intent = StoriesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StoriesIntent::ReplaceAll { stories } => {
                StoriesState::from_stories(dedup_by_id(stories))
            }

            StoriesIntent::RemoveById { id } => {
                if !state.contains(&id) {
                    return state;
                }
                let mut stories = state.into_stories();
                stories.retain(|story| story.object_id != id);
                StoriesState::from_stories(stories)
            }
        }
    }
}

/// Keep the first story for each id.
fn dedup_by_id(stories: Vec<Story>) -> Vec<Story> {
    let mut seen = HashSet::with_capacity(stories.len());
    let total = stories.len();
    let unique: Vec<Story> = stories
        .into_iter()
        .filter(|story| seen.insert(story.object_id.clone()))
        .collect();

    if unique.len() != total {
        tracing::warn!(
            dropped = total - unique.len(),
            "Replacement list contained duplicate story ids"
        );
    }
    unique
}
