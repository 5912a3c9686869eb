use super::backend::KvBackend;
use super::{load, write};
use crate::error::Result;
use crate::model::{Blog, BlogPatch, Comment, CommentPatch, User, UserPatch};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::marker::PhantomData;

/// Where `save` puts a new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Newest first (posts: the newest is the featured one).
    Prepend,
    /// Insertion order (registration / posting order).
    Append,
}

/// A record type stored as one JSON array under a fixed key.
pub trait Record: Serialize + DeserializeOwned + Clone {
    const KEY: &'static str;
    const PLACEMENT: Placement;
    type Patch;

    fn id(&self) -> &str;
    fn merge(&mut self, patch: Self::Patch);
}

impl Record for User {
    const KEY: &'static str = super::USERS_KEY;
    const PLACEMENT: Placement = Placement::Append;
    type Patch = UserPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn merge(&mut self, patch: UserPatch) {
        patch.apply(self);
    }
}

impl Record for Blog {
    const KEY: &'static str = super::BLOGS_KEY;
    const PLACEMENT: Placement = Placement::Prepend;
    type Patch = BlogPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn merge(&mut self, patch: BlogPatch) {
        patch.apply(self);
    }
}

impl Record for Comment {
    const KEY: &'static str = super::COMMENTS_KEY;
    const PLACEMENT: Placement = Placement::Append;
    type Patch = CommentPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn merge(&mut self, patch: CommentPatch) {
        patch.apply(self);
    }
}

/// Typed view over one collection. Every call reads the whole blob from the
/// backend; every write replaces it.
pub struct Collection<'a, B: KvBackend, T: Record> {
    backend: &'a B,
    _record: PhantomData<T>,
}

impl<'a, B: KvBackend, T: Record> Collection<'a, B, T> {
    pub(crate) fn new(backend: &'a B) -> Self {
        Self {
            backend,
            _record: PhantomData,
        }
    }

    /// All records in stored order. Absent or unreadable blobs read as empty.
    pub fn all(&self) -> Result<Vec<T>> {
        Ok(load::<_, Vec<T>>(self.backend, T::KEY)?.or_empty(T::KEY))
    }

    /// First record with `id`.
    pub fn get(&self, id: &str) -> Result<Option<T>> {
        Ok(self.all()?.into_iter().find(|r| r.id() == id))
    }

    pub fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.all()?.iter().any(|r| r.id() == id))
    }

    /// Insert `record` at the collection's [`Placement`] and rewrite the blob.
    /// Id uniqueness is the caller's concern.
    pub fn save(&self, record: T) -> Result<()> {
        let mut records = self.all()?;
        match T::PLACEMENT {
            Placement::Prepend => records.insert(0, record),
            Placement::Append => records.push(record),
        }
        write(self.backend, T::KEY, &records)
    }

    /// Shallow-merge `patch` onto the first record with `id`.
    /// Unknown ids are a silent no-op; returns whether a record was updated.
    pub fn update(&self, id: &str, patch: T::Patch) -> Result<bool> {
        let mut records = self.all()?;
        let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
            return Ok(false);
        };
        record.merge(patch);
        write(self.backend, T::KEY, &records)?;
        Ok(true)
    }

    /// Rewrite the collection without the record(s) carrying `id`.
    /// The blob is rewritten even when nothing matched.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let records = self.all()?;
        let before = records.len();
        let kept: Vec<T> = records.into_iter().filter(|r| r.id() != id).collect();
        let removed = kept.len() != before;
        write(self.backend, T::KEY, &kept)?;
        Ok(removed)
    }
}

impl<'a, B: KvBackend> Collection<'a, B, User> {
    pub fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.all()?.into_iter().find(|u| u.email == email))
    }
}

impl<'a, B: KvBackend> Collection<'a, B, Blog> {
    pub fn by_author(&self, author_id: &str) -> Result<Vec<Blog>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|b| b.author_id == author_id)
            .collect())
    }
}

impl<'a, B: KvBackend> Collection<'a, B, Comment> {
    /// Comments on one post, in posting order. Scans every comment.
    pub fn by_blog(&self, blog_id: &str) -> Result<Vec<Comment>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|c| c.blog_id == blog_id)
            .collect())
    }

    /// Comment count per blog id from a single read.
    pub fn tally(&self) -> Result<HashMap<String, usize>> {
        let mut counts = HashMap::new();
        for comment in self.all()? {
            *counts.entry(comment.blog_id).or_insert(0) += 1;
        }
        Ok(counts)
    }
}
