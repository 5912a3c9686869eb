//! # Domain Model: Users, Posts and Comments
//!
//! This module defines the records persisted by the store: [`User`], [`Blog`] and
//! [`Comment`], plus the typed patches used to update them in place.
//!
//! ## Stored Shape
//!
//! Records are serialized as JSON objects with camelCase field names, exactly the
//! documents the browser edition of the app keeps in local storage:
//!
//! ```text
//! { "id": "1718...", "title": "...", "category": "Tech", "content": "...",
//!   "image": null, "author": "Ada", "authorId": "1718...", "date": "2024-06-12T09:30:00.000Z" }
//! ```
//!
//! Timestamps are written with millisecond precision and a `Z` suffix. Any RFC 3339
//! timestamp is accepted when reading.
//!
//! ## References
//!
//! `Blog::author_id`, `Comment::blog_id` and `Comment::user_id` are weak references:
//! nothing enforces that the target exists, and deleting a post leaves its comments
//! and likes behind.
//!
//! `Comment::user_name` is a snapshot of the commenter's name at posting time. It is
//! never re-resolved against the users collection.
//!
//! ## Patches
//!
//! Updates are shallow merges. Each record has a patch type whose fields are all
//! optional; present fields overwrite, absent fields are left alone. Ids are not
//! patchable.
//!
//! ## Ids
//!
//! Ids are decimal milliseconds since the Unix epoch ([`next_id`]). The caller bumps
//! the candidate until it is free in the target collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Categories offered by the post editor, in display order.
pub const CATEGORIES: [&str; 8] = [
    "Tech",
    "Design",
    "Lifestyle",
    "Travel",
    "Food",
    "Health",
    "Business",
    "Other",
];

pub const DEFAULT_CATEGORY: &str = "Tech";

/// Pseudo-category that matches every post in listings.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Stored as typed. The app has no server to hash against.
    pub password: String,
}

impl User {
    pub fn new(id: String, name: String, email: String, password: String) -> Self {
        Self {
            id,
            name,
            email,
            password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub category: String,
    pub content: String,
    pub image: Option<String>,
    /// Display name of the author at publishing time.
    pub author: String,
    pub author_id: String,
    #[serde(with = "iso8601")]
    pub date: DateTime<Utc>,
}

impl Blog {
    pub fn new(
        id: String,
        title: String,
        category: String,
        content: String,
        image: Option<String>,
        author: &User,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            category,
            content,
            image,
            author: author.name.clone(),
            author_id: author.id.clone(),
            date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub blog_id: String,
    pub user_id: String,
    pub user_name: String,
    pub text: String,
    #[serde(with = "iso8601")]
    pub date: DateTime<Utc>,
}

impl Comment {
    pub fn new(
        id: String,
        blog_id: String,
        user: &User,
        text: String,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            blog_id,
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            text,
            date,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserPatch {
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(password) = self.password {
            user.password = password;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub content: Option<String>,
    /// `Some(None)` clears the image.
    pub image: Option<Option<String>>,
    pub author: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl BlogPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn apply(self, blog: &mut Blog) {
        if let Some(title) = self.title {
            blog.title = title;
        }
        if let Some(category) = self.category {
            blog.category = category;
        }
        if let Some(content) = self.content {
            blog.content = content;
        }
        if let Some(image) = self.image {
            blog.image = image;
        }
        if let Some(author) = self.author {
            blog.author = author;
        }
        if let Some(date) = self.date {
            blog.date = date;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentPatch {
    pub text: Option<String>,
}

impl CommentPatch {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn apply(self, comment: &mut Comment) {
        if let Some(text) = self.text {
            comment.text = text;
        }
    }
}

/// Composite key of the likes map: `"{blog_id}_{user_id}"`.
pub fn like_key(blog_id: &str, user_id: &str) -> String {
    format!("{}_{}", blog_id, user_id)
}

/// Time-based id for a new record: `now` in epoch milliseconds, bumped by one
/// until `taken` reports it free.
pub fn next_id(now: DateTime<Utc>, taken: impl Fn(&str) -> bool) -> String {
    let mut candidate = now.timestamp_millis();
    loop {
        let id = candidate.to_string();
        if !taken(&id) {
            return id;
        }
        candidate += 1;
    }
}

/// Resolve user input to one of [`CATEGORIES`], ignoring case.
pub fn canonical_category(input: &str) -> Option<&'static str> {
    let input = input.trim();
    CATEGORIES
        .iter()
        .copied()
        .find(|c| c.eq_ignore_ascii_case(input))
}

/// `toISOString`-compatible timestamps: `2024-01-15T10:30:00.000Z`.
pub mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|d| d.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ada() -> User {
        User::new(
            "100".into(),
            "Ada".into(),
            "ada@example.com".into(),
            "secret1".into(),
        )
    }

    fn sample_blog() -> Blog {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        Blog::new(
            "1".into(),
            "Title".into(),
            "Tech".into(),
            "Body".into(),
            None,
            &ada(),
            date,
        )
    }

    #[test]
    fn blog_serializes_with_camel_case_and_millis() {
        let json = serde_json::to_value(sample_blog()).unwrap();
        assert_eq!(json["authorId"], "100");
        assert_eq!(json["author"], "Ada");
        assert_eq!(json["date"], "2024-01-15T10:30:00.000Z");
        assert!(json["image"].is_null());
        assert!(json.get("author_id").is_none());
    }

    #[test]
    fn blog_reads_browser_document() {
        let raw = r#"{"id":"7","title":"T","category":"Food","content":"C",
            "image":"https://img","author":"Bo","authorId":"42",
            "date":"2024-03-01T08:00:00.123Z"}"#;
        let blog: Blog = serde_json::from_str(raw).unwrap();
        assert_eq!(blog.author_id, "42");
        assert_eq!(blog.image.as_deref(), Some("https://img"));
        assert_eq!(blog.date.timestamp_subsec_millis(), 123);
    }

    #[test]
    fn comment_snapshots_user_name() {
        let mut user = ada();
        let comment = Comment::new("c1".into(), "1".into(), &user, "hi".into(), Utc::now());
        user.name = "Renamed".into();
        assert_eq!(comment.user_name, "Ada");

        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(json["blogId"], "1");
        assert_eq!(json["userName"], "Ada");
    }

    #[test]
    fn blog_patch_merges_only_present_fields() {
        let mut blog = sample_blog();
        blog.image = Some("https://old".into());
        BlogPatch {
            title: Some("New".into()),
            ..Default::default()
        }
        .apply(&mut blog);
        assert_eq!(blog.title, "New");
        assert_eq!(blog.content, "Body");
        assert_eq!(blog.image.as_deref(), Some("https://old"));

        BlogPatch {
            image: Some(None),
            ..Default::default()
        }
        .apply(&mut blog);
        assert_eq!(blog.image, None);
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(BlogPatch::default().is_empty());
        assert!(!BlogPatch {
            content: Some("x".into()),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn next_id_skips_taken_ids() {
        let now = Utc.timestamp_millis_opt(1_000).unwrap();
        assert_eq!(next_id(now, |_| false), "1000");
        assert_eq!(next_id(now, |id| id == "1000" || id == "1001"), "1002");
    }

    #[test]
    fn category_lookup_ignores_case() {
        assert_eq!(canonical_category("travel"), Some("Travel"));
        assert_eq!(canonical_category(" TECH "), Some("Tech"));
        assert_eq!(canonical_category("Gardening"), None);
    }

    #[test]
    fn like_key_joins_with_underscore() {
        assert_eq!(like_key("3", "99"), "3_99");
    }
}
