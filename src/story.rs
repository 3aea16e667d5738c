//! Story records and their identifiers.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identity of a story within a collection.
///
/// Sources disagree on the shape of ids: fixtures use integers, the
/// Hacker News search API uses strings. Both are accepted and compared
/// structurally, so `Number(1)` and `Text("1")` are different ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoryId {
    Number(u64),
    Text(String),
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoryId::Number(n) => write!(f, "{}", n),
            StoryId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for StoryId {
    fn from(value: u64) -> Self {
        StoryId::Number(value)
    }
}

impl From<&str> for StoryId {
    fn from(value: &str) -> Self {
        StoryId::Text(value.to_string())
    }
}

impl From<String> for StoryId {
    fn from(value: String) -> Self {
        StoryId::Text(value)
    }
}

impl StoryId {
    /// Parse a user-supplied id: all-digit input becomes a number,
    /// anything else is kept as text.
    pub fn parse(input: &str) -> Self {
        match input.parse::<u64>() {
            Ok(n) => StoryId::Number(n),
            Err(_) => StoryId::Text(input.to_string()),
        }
    }
}

/// One story entry.
///
/// Field names on the wire follow the Hacker News search API
/// (`objectID`, `num_comments`). Any field but `title` and `objectID` may
/// be `null` there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub num_comments: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub points: u64,
    #[serde(rename = "objectID")]
    pub object_id: StoryId,
}

impl Story {
    /// Build a story with only an id and a title; the rest is empty.
    pub fn titled(object_id: impl Into<StoryId>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: String::new(),
            author: String::new(),
            num_comments: 0,
            points: 0,
            object_id: object_id.into(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or_default())
}

/// The two stories the fixture source serves.
pub fn fixture_stories() -> Vec<Story> {
    vec![
        Story {
            title: "React".to_string(),
            url: "https://reactjs.org/".to_string(),
            author: "Jordan Walke".to_string(),
            num_comments: 3,
            points: 4,
            object_id: StoryId::Number(0),
        },
        Story {
            title: "Redux".to_string(),
            url: "https://redux.js.org/".to_string(),
            author: "Dan Abramov, Andrew Clark".to_string(),
            num_comments: 2,
            points: 5,
            object_id: StoryId::Number(1),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_id_parse_prefers_numbers() {
        assert_eq!(StoryId::parse("42"), StoryId::Number(42));
        assert_eq!(StoryId::parse("abc"), StoryId::Text("abc".to_string()));
        assert_eq!(StoryId::parse("-1"), StoryId::Text("-1".to_string()));
    }

    #[test]
    fn number_and_text_ids_are_distinct() {
        assert_ne!(StoryId::Number(1), StoryId::from("1"));
    }

    #[test]
    fn decodes_hacker_news_hit() {
        let json = r#"{
            "title": "Show HN: a thing",
            "url": null,
            "author": "pg",
            "num_comments": 12,
            "points": 100,
            "objectID": "39201"
        }"#;
        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.object_id, StoryId::Text("39201".to_string()));
        assert_eq!(story.url, "");
        assert_eq!(story.author, "pg");
        assert_eq!(story.num_comments, 12);
    }

    #[test]
    fn decodes_numeric_object_id() {
        let json = r#"{"title": "React", "objectID": 0}"#;
        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story, Story::titled(0u64, "React"));
    }

    #[test]
    fn null_counts_decode_as_zero() {
        let json = r#"{"title": "Ask HN", "num_comments": null, "points": null, "objectID": "7"}"#;
        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.num_comments, 0);
        assert_eq!(story.points, 0);
    }
}
