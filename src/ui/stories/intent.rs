//! Intents for the story collection.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::story::{Story, StoryId};
use crate::ui::mvi::Intent;

/// Tag used by the encoded form of [`StoriesIntent::ReplaceAll`].
pub const SET_STORIES: &str = "SET_STORIES";
/// Tag used by the encoded form of [`StoriesIntent::RemoveById`].
pub const REMOVE_STORY: &str = "REMOVE_STORY";

/// Actions that can be dispatched to the story collection reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum StoriesIntent {
    /// Throw away the current list and use `stories` instead.
    ReplaceAll { stories: Vec<Story> },

    /// Drop the story with this id. Unknown ids are ignored.
    RemoveById { id: StoryId },
}

impl Intent for StoriesIntent {}

/// Errors from decoding an encoded action.
#[derive(Debug, Error)]
pub enum IntentError {
    #[error("Invalid action type '{tag}'")]
    InvalidAction { tag: String },

    #[error("Malformed action: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Invalid payload for '{tag}': {source}")]
    InvalidPayload {
        tag: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct EncodedIntent {
    #[serde(rename = "type")]
    tag: String,
    #[serde(default)]
    payload: Value,
}

impl StoriesIntent {
    /// Decode `{"type": ..., "payload": ...}`.
    ///
    /// `REMOVE_STORY` accepts either a bare id or a whole story object as
    /// its payload.
    pub fn from_json(input: &str) -> Result<Self, IntentError> {
        let encoded: EncodedIntent = serde_json::from_str(input).map_err(IntentError::Malformed)?;
        let tag = encoded.tag;

        match tag.as_str() {
            SET_STORIES => serde_json::from_value::<Vec<Story>>(encoded.payload)
                .map(|stories| StoriesIntent::ReplaceAll { stories })
                .map_err(|source| IntentError::InvalidPayload { tag, source }),
            REMOVE_STORY => {
                let payload = encoded.payload;
                if payload.is_object() {
                    serde_json::from_value::<Story>(payload)
                        .map(|story| StoriesIntent::RemoveById {
                            id: story.object_id,
                        })
                        .map_err(|source| IntentError::InvalidPayload { tag, source })
                } else {
                    serde_json::from_value::<StoryId>(payload)
                        .map(|id| StoriesIntent::RemoveById { id })
                        .map_err(|source| IntentError::InvalidPayload { tag, source })
                }
            }
            _ => Err(IntentError::InvalidAction { tag }),
        }
    }

    /// Encode as `{"type": ..., "payload": ...}`.
    pub fn to_json(&self) -> Value {
        match self {
            StoriesIntent::ReplaceAll { stories } => serde_json::json!({
                "type": SET_STORIES,
                "payload": stories,
            }),
            StoriesIntent::RemoveById { id } => serde_json::json!({
                "type": REMOVE_STORY,
                "payload": id,
            }),
        }
    }

    /// Tag of this action in its encoded form.
    pub fn tag(&self) -> &'static str {
        match self {
            StoriesIntent::ReplaceAll { .. } => SET_STORIES,
            StoriesIntent::RemoveById { .. } => REMOVE_STORY,
        }
    }
}
