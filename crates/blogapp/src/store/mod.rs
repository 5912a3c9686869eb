//! # Storage Layer
//!
//! The store models five related collections on top of a flat key-value
//! substrate ([`KvBackend`]). Each collection is one JSON document under a fixed key:
//!
//! | Key | Document |
//! |-----|----------|
//! | `blogUsers` | array of [`User`] |
//! | `currentUser` | one [`User`], or key absent when logged out |
//! | `blogs` | array of [`Blog`], newest first |
//! | `blogLikes` | object mapping `"{blogId}_{userId}"` to `true` |
//! | `blogComments` | array of [`Comment`], posting order |
//!
//! ## Access Model
//!
//! There is no cache and no index. Every read deserializes the whole document;
//! every write serializes and replaces it (read, merge in memory, rewrite).
//! Derived views ([`Collection::by_blog`], [`Likes::count`]) scan the full
//! document per call. Listings use the one-pass tallies instead
//! ([`Likes::tally`], [`Collection::tally`]) so a page of posts costs one read
//! per collection.
//!
//! ## Failure Model
//!
//! - Absent key: empty collection / no session. Never an error.
//! - Unreadable document (bad JSON or wrong shape): treated as empty and logged.
//! - Unknown id on update/delete: silent no-op.
//! - Backend I/O failure: returned as `Err`.
//!
//! The store validates nothing about field contents; that belongs to the
//! command layer.
//!
//! ## Concurrency
//!
//! Single-threaded and synchronous. Two processes sharing one data directory
//! race on read-modify-write: the last writer wins and the other update is lost
//! without detection.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one `<key>.json` file per key, atomic writes.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.

use crate::error::Result;
use crate::model::{Blog, Comment, User};
use crate::seed;
use backend::KvBackend;
use chrono::{DateTime, Utc};
use collection::Collection;
use likes::Likes;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod backend;
pub mod collection;
pub mod fs_backend;
pub mod likes;
pub mod mem_backend;

pub const USERS_KEY: &str = "blogUsers";
pub const SESSION_KEY: &str = "currentUser";
pub const BLOGS_KEY: &str = "blogs";
pub const LIKES_KEY: &str = "blogLikes";
pub const COMMENTS_KEY: &str = "blogComments";

/// Outcome of reading one key.
pub(crate) enum Stored<T> {
    Absent,
    Parsed(T),
    Unreadable,
}

impl<T: Default> Stored<T> {
    pub(crate) fn or_empty(self, key: &str) -> T {
        match self {
            Stored::Parsed(value) => value,
            Stored::Absent => T::default(),
            Stored::Unreadable => {
                tracing::warn!(key, "stored value is unreadable, treating as empty");
                T::default()
            }
        }
    }
}

pub(crate) fn load<B: KvBackend, T: DeserializeOwned>(backend: &B, key: &str) -> Result<Stored<T>> {
    let Some(raw) = backend.get_item(key)? else {
        return Ok(Stored::Absent);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Stored::Parsed(value)),
        Err(err) => {
            tracing::debug!(key, error = %err, "failed to parse stored value");
            Ok(Stored::Unreadable)
        }
    }
}

pub(crate) fn write<B: KvBackend, T: Serialize + ?Sized>(
    backend: &B,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    tracing::debug!(key, bytes = raw.len(), backend = %backend.describe(), "writing collection");
    backend.set_item(key, &raw)
}

/// The local collection store. Construct once and pass by reference.
pub struct BlogStore<B: KvBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: KvBackend> BlogStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn users(&self) -> Collection<'_, B, User> {
        Collection::new(&self.backend)
    }

    pub fn blogs(&self) -> Collection<'_, B, Blog> {
        Collection::new(&self.backend)
    }

    pub fn comments(&self) -> Collection<'_, B, Comment> {
        Collection::new(&self.backend)
    }

    pub fn likes(&self) -> Likes<'_, B> {
        Likes::new(&self.backend)
    }

    pub fn current_user(&self) -> Result<Option<User>> {
        match load::<_, User>(&self.backend, SESSION_KEY)? {
            Stored::Parsed(user) => Ok(Some(user)),
            Stored::Absent => Ok(None),
            Stored::Unreadable => {
                tracing::warn!(key = SESSION_KEY, "stored session is unreadable, treating as logged out");
                Ok(None)
            }
        }
    }

    /// Replace the session. `None` removes the key entirely.
    pub fn set_current_user(&self, user: Option<&User>) -> Result<()> {
        match user {
            Some(user) => write(&self.backend, SESSION_KEY, user),
            None => {
                tracing::debug!(key = SESSION_KEY, "clearing session");
                self.backend.remove_item(SESSION_KEY)
            }
        }
    }

    /// Populate the sample posts if, and only if, there are no posts.
    /// Returns whether it seeded.
    pub fn seed_if_empty(&self) -> Result<bool> {
        self.seed_if_empty_at(Utc::now())
    }

    pub fn seed_if_empty_at(&self, now: DateTime<Utc>) -> Result<bool> {
        match load::<_, Vec<Blog>>(&self.backend, BLOGS_KEY)? {
            Stored::Parsed(blogs) if !blogs.is_empty() => Ok(false),
            Stored::Unreadable => {
                tracing::warn!(key = BLOGS_KEY, "posts are unreadable, not seeding over them");
                Ok(false)
            }
            Stored::Parsed(_) | Stored::Absent => {
                let samples = seed::sample_blogs(now);
                tracing::info!(count = samples.len(), "seeding sample posts");
                write(&self.backend, BLOGS_KEY, &samples)?;
                Ok(true)
            }
        }
    }
}
