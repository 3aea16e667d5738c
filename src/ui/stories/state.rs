//! State for the story collection.

use crate::story::{Story, StoryId};
use crate::ui::mvi::UiState;

/// Ordered list of stories, unique by id.
///
/// Insertion order is kept. Nothing else about the order is meaningful.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoriesState {
    stories: Vec<Story>,
}

impl UiState for StoriesState {}

impl StoriesState {
    /// Build a state from a list whose ids are already unique.
    pub fn from_stories(stories: Vec<Story>) -> Self {
        Self { stories }
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn into_stories(self) -> Vec<Story> {
        self.stories
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    pub fn contains(&self, id: &StoryId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: &StoryId) -> Option<&Story> {
        self.stories.iter().find(|story| &story.object_id == id)
    }
}
