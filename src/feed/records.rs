//! Featured Records
//!
//! Typed display records validated at the feed boundary. The upstream JSON is
//! loosely shaped, so every field resolves through a fixed fallback chain
//! here instead of at each render site.
//!
//! # Connection fallback order
//!
//! | field     | sources, first non-empty wins                         |
//! |-----------|-------------------------------------------------------|
//! | id        | `id` (string or number), else slug of the name        |
//! | name      | `name`, `fullName` / `full_name` (required)           |
//! | role      | `role`, `title`                                       |
//! | company   | `company` (string), `company.name`, `organization`    |
//! | industry  | `industry`, `sector`                                  |
//! | image_url | `image`, `imageUrl` / `image_url`, `avatar`           |
//! | alt       | `alt`, else the name                                  |
//! | verified  | `verified`, `isVerified` / `is_verified`, else false   |
//!
//! # Story fallback order
//!
//! | field     | sources                                    |
//! |-----------|--------------------------------------------|
//! | id        | `id`, else slug of the title               |
//! | title     | `title` (required)                         |
//! | outcome   | `outcome`, `excerpt`                       |
//! | metric    | `metric`                                   |
//! | image_url | `image`, `imageUrl` / `image_url`          |
//! | author    | `author` (string), `author.name`           |
//! | company   | `company` (string), `company.name`         |

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::error::{FeedError, FeedResult};

/// Which remote list a record comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedKind {
    Connections,
    Stories,
}

impl FeedKind {
    /// Endpoint path relative to the feed origin
    pub fn path(self) -> &'static str {
        match self {
            FeedKind::Connections => "/api/featured-connections",
            FeedKind::Stories => "/api/featured-stories",
        }
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedKind::Connections => f.write_str("connections"),
            FeedKind::Stories => f.write_str("stories"),
        }
    }
}

/// A person shown on the home page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedConnection {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub industry: String,
    #[serde(rename = "image", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub alt: String,
    pub verified: bool,
}

/// A success story shown on the home page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedStory {
    pub id: String,
    pub title: String,
    pub outcome: String,
    pub metric: String,
    #[serde(rename = "image", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub author: String,
    pub company: String,
}

/// Both featured lists for one page load
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeaturedContent {
    pub connections: Vec<FeaturedConnection>,
    pub stories: Vec<FeaturedStory>,
}

impl FeaturedContent {
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty() && self.stories.is_empty()
    }
}

/// A record that can be validated out of a loosely-typed feed item
pub trait FeedRecord: Sized {
    const KIND: FeedKind;

    /// Resolve one array item, or `None` if it lacks a required field
    fn from_json(item: &Value) -> Option<Self>;
}

/// Validate a whole feed body.
///
/// The body must be an array. Items that fail validation are dropped; the
/// rest survive.
pub fn parse_list<T: FeedRecord>(body: &Value) -> FeedResult<Vec<T>> {
    let items = body.as_array().ok_or(FeedError::NotAList(T::KIND))?;

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match T::from_json(item) {
            Some(record) => records.push(record),
            None => tracing::debug!(feed = %T::KIND, index, "dropping malformed feed item"),
        }
    }

    Ok(records)
}

// ============ Field lookups ============
//
// Each field resolves on its own. A value of an unexpected type counts as
// absent and the fallback chain moves on.

/// String field
fn text(item: &Value, key: &str) -> Option<String> {
    item.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Either `"Acme"` or `{ "name": "Acme", ... }`
fn named(item: &Value, key: &str) -> Option<String> {
    match item.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map.get("name").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

/// String or number identifier
fn ident(item: &Value) -> Option<String> {
    match item.get("id")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn flag(item: &Value, key: &str) -> Option<bool> {
    item.get(key).and_then(Value::as_bool)
}

/// First candidate that is present and not blank
fn first_non_empty<I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(|s| s.trim().to_string())
        .find(|s| !s.is_empty())
}

fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}

impl FeedRecord for FeaturedConnection {
    const KIND: FeedKind = FeedKind::Connections;

    fn from_json(item: &Value) -> Option<Self> {
        if !item.is_object() {
            return None;
        }

        let name = first_non_empty([
            text(item, "name"),
            text(item, "fullName"),
            text(item, "full_name"),
        ])?;
        let id = first_non_empty([ident(item)]).unwrap_or_else(|| slug(&name));

        Some(Self {
            id,
            role: first_non_empty([text(item, "role"), text(item, "title")]).unwrap_or_default(),
            company: first_non_empty([named(item, "company"), text(item, "organization")])
                .unwrap_or_default(),
            industry: first_non_empty([text(item, "industry"), text(item, "sector")])
                .unwrap_or_default(),
            image_url: first_non_empty([
                text(item, "image"),
                text(item, "imageUrl"),
                text(item, "image_url"),
                text(item, "avatar"),
            ]),
            alt: first_non_empty([text(item, "alt")]).unwrap_or_else(|| name.clone()),
            verified: flag(item, "verified")
                .or_else(|| flag(item, "isVerified"))
                .or_else(|| flag(item, "is_verified"))
                .unwrap_or(false),
            name,
        })
    }
}

impl FeedRecord for FeaturedStory {
    const KIND: FeedKind = FeedKind::Stories;

    fn from_json(item: &Value) -> Option<Self> {
        if !item.is_object() {
            return None;
        }

        let title = first_non_empty([text(item, "title")])?;
        let id = first_non_empty([ident(item)]).unwrap_or_else(|| slug(&title));

        Some(Self {
            id,
            outcome: first_non_empty([text(item, "outcome"), text(item, "excerpt")])
                .unwrap_or_default(),
            metric: first_non_empty([text(item, "metric")]).unwrap_or_default(),
            image_url: first_non_empty([
                text(item, "image"),
                text(item, "imageUrl"),
                text(item, "image_url"),
            ]),
            author: first_non_empty([named(item, "author")]).unwrap_or_default(),
            company: first_non_empty([named(item, "company")]).unwrap_or_default(),
            title,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_connection_flat_shape() {
        let item = json!({
            "id": "conn_1",
            "name": "Arjun Mehta",
            "role": "Alumni Founder",
            "company": "AgriTech Solutions",
            "industry": "AgriTech",
            "image": "https://example.com/a.jpg",
            "alt": "Portrait",
            "verified": true
        });

        let conn = FeaturedConnection::from_json(&item).unwrap();
        assert_eq!(conn.id, "conn_1");
        assert_eq!(conn.company, "AgriTech Solutions");
        assert_eq!(conn.image_url.as_deref(), Some("https://example.com/a.jpg"));
        assert!(conn.verified);
    }

    #[test]
    fn test_connection_fallback_chain() {
        let item = json!({
            "id": 42,
            "fullName": "Divya R.",
            "title": "Student Innovator",
            "company": { "name": "BioMed Systems", "size": 12 },
            "sector": "Healthcare",
            "avatar": "https://example.com/d.jpg",
            "is_verified": true
        });

        let conn = FeaturedConnection::from_json(&item).unwrap();
        assert_eq!(conn.id, "42");
        assert_eq!(conn.name, "Divya R.");
        assert_eq!(conn.role, "Student Innovator");
        assert_eq!(conn.company, "BioMed Systems");
        assert_eq!(conn.industry, "Healthcare");
        assert_eq!(conn.image_url.as_deref(), Some("https://example.com/d.jpg"));
        assert_eq!(conn.alt, "Divya R.");
        assert!(conn.verified);
    }

    #[test]
    fn test_connection_blank_company_falls_through() {
        let item = json!({
            "name": "Dr. Suresh Kumar",
            "company": "  ",
            "organization": "PSG Alumni Network"
        });
        let conn = FeaturedConnection::from_json(&item).unwrap();
        assert_eq!(conn.company, "PSG Alumni Network");
        assert_eq!(conn.id, "dr-suresh-kumar");
        assert!(!conn.verified);
        assert_eq!(conn.image_url, None);
    }

    #[test]
    fn test_connection_without_name_is_dropped() {
        assert!(FeaturedConnection::from_json(&json!({ "role": "Investor" })).is_none());
        assert!(FeaturedConnection::from_json(&json!("Arjun")).is_none());
        assert!(FeaturedConnection::from_json(&json!({ "name": 7 })).is_none());
    }

    #[test]
    fn test_story_nested_author() {
        let item = json!({
            "title": "Pre-Incubation Grant",
            "excerpt": "Secured pre-seed funding.",
            "metric": "Seed Funded",
            "imageUrl": "https://example.com/s.jpg",
            "author": { "name": "Karthik S." },
            "company": "RoboDynamics"
        });

        let story = FeaturedStory::from_json(&item).unwrap();
        assert_eq!(story.id, "pre-incubation-grant");
        assert_eq!(story.outcome, "Secured pre-seed funding.");
        assert_eq!(story.author, "Karthik S.");
        assert_eq!(story.image_url.as_deref(), Some("https://example.com/s.jpg"));
    }

    #[test]
    fn test_parse_list_keeps_valid_items() {
        let body = json!([
            { "name": "A" },
            null,
            { "role": "nameless" },
            { "name": "B" }
        ]);
        let list: Vec<FeaturedConnection> = parse_list(&body).unwrap();
        let names: Vec<_> = list.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_parse_list_rejects_non_array() {
        let err = parse_list::<FeaturedStory>(&json!({ "stories": [] })).unwrap_err();
        assert!(matches!(err, FeedError::NotAList(FeedKind::Stories)));
    }

    #[test]
    fn test_serialized_connection_parses_back() {
        let item = json!({ "name": "Arjun", "image": "x.jpg" });
        let conn = FeaturedConnection::from_json(&item).unwrap();
        let value = serde_json::to_value(&conn).unwrap();
        assert_eq!(value["image"], "x.jpg");
        assert_eq!(FeaturedConnection::from_json(&value), Some(conn));
    }

    #[test]
    fn test_mistyped_optional_fields_keep_the_connection() {
        let items = [
            json!({ "name": "Arjun Mehta", "verified": "true" }),
            json!({ "name": "Arjun Mehta", "company": 42 }),
            json!({ "name": "Arjun Mehta", "image": { "src": "a.jpg" } }),
            json!({ "name": "Arjun Mehta", "id": ["conn_1"] }),
        ];

        for item in items {
            let conn = FeaturedConnection::from_json(&item)
                .unwrap_or_else(|| panic!("dropped {}", item));
            assert_eq!(conn.name, "Arjun Mehta");
            assert_eq!(conn.id, "arjun-mehta");
            assert!(!conn.verified);
            assert_eq!(conn.company, "");
            assert_eq!(conn.image_url, None);
        }
    }

    #[test]
    fn test_mistyped_field_falls_through_to_alias() {
        let conn = FeaturedConnection::from_json(&json!({
            "name": "Divya R.",
            "image": 7,
            "imageUrl": "https://example.com/d.jpg",
            "verified": "yes",
            "isVerified": true
        }))
        .unwrap();

        assert_eq!(conn.image_url.as_deref(), Some("https://example.com/d.jpg"));
        assert!(conn.verified);
    }

    #[test]
    fn test_duplicate_name_aliases_keep_the_connection() {
        let conn = FeaturedConnection::from_json(&json!({
            "fullName": "Dr. Suresh Kumar",
            "full_name": "Suresh K."
        }))
        .unwrap();
        assert_eq!(conn.name, "Dr. Suresh Kumar");
    }

    #[test]
    fn test_mistyped_name_counts_as_missing() {
        assert_eq!(FeaturedConnection::from_json(&json!({ "name": 7 })), None);
        assert_eq!(
            FeaturedConnection::from_json(&json!({ "name": 7, "full_name": "Karthik S." }))
                .map(|c| c.name),
            Some("Karthik S.".to_string())
        );
    }

    #[test]
    fn test_mistyped_story_metric_keeps_the_story() {
        let story =
            FeaturedStory::from_json(&json!({ "title": "Seed Funded", "metric": 100000 })).unwrap();
        assert_eq!(story.title, "Seed Funded");
        assert_eq!(story.metric, "");

        let story = FeaturedStory::from_json(&json!({
            "title": "Global Mentorship",
            "author": { "name": 3 },
            "company": ["CloudFlow"]
        }))
        .unwrap();
        assert_eq!(story.author, "");
        assert_eq!(story.company, "");
    }
}
