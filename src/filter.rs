//! Search filtering over story titles.

use crate::story::Story;

/// Case-insensitive substring match of `query` against the story title.
///
/// An empty query matches every story.
pub fn matches(story: &Story, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    story.title.to_lowercase().contains(&query.to_lowercase())
}

/// Stories matching `query`, in their original order.
pub fn filter_stories(stories: &[Story], query: &str) -> Vec<Story> {
    stories
        .iter()
        .filter(|story| matches(story, query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::fixture_stories;

    #[test]
    fn empty_query_matches_everything() {
        for story in fixture_stories() {
            assert!(matches(&story, ""));
        }
        assert!(matches(&Story::titled(5u64, ""), ""));
    }

    #[test]
    fn match_ignores_case() {
        let story = Story::titled(1u64, "Redux");
        assert!(matches(&story, "redux"));
        assert!(matches(&story, "REDUX"));
        assert!(matches(&story, "dU"));
    }

    #[test]
    fn match_is_substring_not_prefix() {
        let story = Story::titled(1u64, "Learning React Hooks");
        assert!(matches(&story, "react"));
        assert!(!matches(&story, "vue"));
    }

    #[test]
    fn only_title_is_searched() {
        let mut story = Story::titled(1u64, "Redux");
        story.author = "Dan Abramov".to_string();
        story.url = "https://redux.js.org/".to_string();
        assert!(!matches(&story, "abramov"));
        assert!(!matches(&story, "js.org"));
    }

    #[test]
    fn non_ascii_titles_fold_case() {
        let story = Story::titled(1u64, "ÜBER Rust");
        assert!(matches(&story, "über"));
    }

    #[test]
    fn filter_keeps_original_order() {
        let stories = vec![
            Story::titled(0u64, "React"),
            Story::titled(1u64, "Redux"),
            Story::titled(2u64, "React Native"),
        ];
        let view = filter_stories(&stories, "react");
        let ids: Vec<_> = view.iter().map(|s| s.object_id.to_string()).collect();
        assert_eq!(ids, vec!["0", "2"]);
        assert_eq!(stories.len(), 3);
    }

    #[test]
    fn filter_with_no_hits_is_empty() {
        assert!(filter_stories(&fixture_stories(), "angular").is_empty());
    }
}
