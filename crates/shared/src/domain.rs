use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(pub String);

impl StoryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StoryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for StoryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One search hit. Identity is `object_id`; every other field is display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    #[serde(rename = "objectID")]
    pub object_id: StoryId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub num_comments: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Story {
    pub fn new(object_id: impl Into<StoryId>, title: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
            title: title.into(),
            author: String::new(),
            url: None,
            num_comments: 0,
            points: 0,
            created_at: None,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_num_comments(mut self, num_comments: u64) -> Self {
        self.num_comments = num_comments;
        self
    }

    pub fn with_points(mut self, points: u64) -> Self {
        self.points = points;
        self
    }
}

// The search API sends explicit nulls for missing titles and counts.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    None,
    Title,
    Author,
    CommentCount,
    Points,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::None,
        SortKey::Title,
        SortKey::Author,
        SortKey::CommentCount,
        SortKey::Points,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::Title => "title",
            SortKey::Author => "author",
            SortKey::CommentCount => "comments",
            SortKey::Points => "points",
        }
    }

    /// Column header caption used by the list views.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::None => "Unsorted",
            SortKey::Title => "Title",
            SortKey::Author => "Author",
            SortKey::CommentCount => "Comments",
            SortKey::Points => "Points",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(SortKey::None),
            "title" => Ok(SortKey::Title),
            "author" => Ok(SortKey::Author),
            "comments" | "comment" | "num_comments" | "comment_count" => {
                Ok(SortKey::CommentCount)
            }
            "points" | "point" => Ok(SortKey::Points),
            _ => Err(DomainError::InvalidSortKey(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_algolia_hit_with_nulls() {
        let raw = r#"{
            "objectID": "42",
            "title": null,
            "author": "pg",
            "url": null,
            "num_comments": null,
            "points": 17,
            "created_at": "2024-01-01T00:00:00.000Z",
            "_tags": ["story"]
        }"#;
        let story: Story = serde_json::from_str(raw).expect("story");
        assert_eq!(story.object_id, StoryId::from("42"));
        assert_eq!(story.title, "");
        assert_eq!(story.url, None);
        assert_eq!(story.num_comments, 0);
        assert_eq!(story.points, 17);
        assert!(story.created_at.is_some());
    }

    #[test]
    fn parses_sort_key_aliases() {
        assert_eq!("Title".parse::<SortKey>().expect("title"), SortKey::Title);
        assert_eq!(
            "COMMENT".parse::<SortKey>().expect("comment"),
            SortKey::CommentCount
        );
        assert_eq!("point".parse::<SortKey>().expect("point"), SortKey::Points);
        assert!("rank".parse::<SortKey>().is_err());
    }
}
