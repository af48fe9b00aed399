//! Home page layout from the featured feeds

use std::time::Duration;

use serde::Serialize;

use crate::feed::{FeaturedConnection, FeaturedContent, FeaturedStory};

/// Transition delay of the "Recent Matches" sidebar
pub const SIDEBAR_DELAY: Duration = Duration::from_millis(150);

/// Per-tile delay step of the success-story grid
pub const STORY_STAGGER: Duration = Duration::from_millis(80);

/// Cards floating either side of the hero
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroCards {
    pub left: FeaturedConnection,
    pub right: FeaturedConnection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryTile {
    pub story: FeaturedStory,
    #[serde(with = "millis")]
    pub delay: Duration,
}

/// Which featured records go where on the home page.
///
/// Every section is optional: empty feeds produce an empty view and the
/// page renders only its static parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HomeView {
    pub hero: Option<HeroCards>,
    pub feature: Option<FeaturedConnection>,
    pub sidebar: Vec<FeaturedConnection>,
    #[serde(with = "millis")]
    pub sidebar_delay: Duration,
    pub stories: Vec<StoryTile>,
}

impl HomeView {
    pub fn build(content: &FeaturedContent) -> Self {
        let connections = &content.connections;

        let hero = match connections.as_slice() {
            [left, right, ..] => Some(HeroCards {
                left: left.clone(),
                right: right.clone(),
            }),
            _ => None,
        };

        let stories = content
            .stories
            .iter()
            .enumerate()
            .map(|(i, story)| StoryTile {
                story: story.clone(),
                delay: STORY_STAGGER * i as u32,
            })
            .collect();

        Self {
            hero,
            feature: connections.first().cloned(),
            sidebar: connections.iter().skip(1).take(2).cloned().collect(),
            sidebar_delay: SIDEBAR_DELAY,
            stories,
        }
    }

    pub fn has_matches(&self) -> bool {
        self.feature.is_some()
    }

    pub fn has_stories(&self) -> bool {
        !self.stories.is_empty()
    }
}

mod millis {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::fixtures;

    fn content_with(n: usize) -> FeaturedContent {
        FeaturedContent {
            connections: fixtures::featured_connections().into_iter().take(n).collect(),
            stories: fixtures::featured_stories(),
        }
    }

    #[test]
    fn test_hero_cards_need_two_connections() {
        assert!(HomeView::build(&content_with(0)).hero.is_none());
        assert!(HomeView::build(&content_with(1)).hero.is_none());

        let view = HomeView::build(&content_with(2));
        let hero = view.hero.unwrap();
        assert_eq!(hero.left.id, "conn_1");
        assert_eq!(hero.right.id, "conn_2");
        assert!(HomeView::build(&content_with(3)).hero.is_some());
    }

    #[test]
    fn test_matches_layout() {
        let view = HomeView::build(&content_with(3));
        assert_eq!(view.feature.as_ref().map(|c| c.id.as_str()), Some("conn_1"));
        let sidebar: Vec<_> = view.sidebar.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(sidebar, vec!["conn_2", "conn_3"]);
        assert_eq!(view.sidebar_delay, Duration::from_millis(150));

        let single = HomeView::build(&content_with(1));
        assert!(single.has_matches());
        assert!(single.sidebar.is_empty());
    }

    #[test]
    fn test_story_delays_step_by_index() {
        let view = HomeView::build(&content_with(0));
        let delays: Vec<_> = view.stories.iter().map(|t| t.delay.as_millis()).collect();
        assert_eq!(delays, vec![0, 80, 160]);
    }

    #[test]
    fn test_empty_feeds_give_empty_sections() {
        let view = HomeView::build(&FeaturedContent::default());
        assert!(view.hero.is_none());
        assert!(!view.has_matches());
        assert!(view.sidebar.is_empty());
        assert!(!view.has_stories());
    }
}
