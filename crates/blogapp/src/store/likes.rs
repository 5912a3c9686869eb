use super::backend::KvBackend;
use super::{load, write, LIKES_KEY};
use crate::error::Result;
use crate::model::like_key;
use std::collections::{BTreeMap, HashMap};

/// The likes set: `"{blog_id}_{user_id}" -> true`.
///
/// A key is either present (liked) or absent; there is no stored count.
pub type LikeMap = BTreeMap<String, bool>;

pub struct Likes<'a, B: KvBackend> {
    backend: &'a B,
}

impl<'a, B: KvBackend> Likes<'a, B> {
    pub(crate) fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    pub fn all(&self) -> Result<LikeMap> {
        Ok(load::<_, LikeMap>(self.backend, LIKES_KEY)?.or_empty(LIKES_KEY))
    }

    /// Flip the like of `user_id` on `blog_id`. Returns the new state.
    pub fn toggle(&self, blog_id: &str, user_id: &str) -> Result<bool> {
        let mut likes = self.all()?;
        let key = like_key(blog_id, user_id);
        let liked = if likes.get(&key).copied().unwrap_or(false) {
            likes.remove(&key);
            false
        } else {
            likes.insert(key, true);
            true
        };
        write(self.backend, LIKES_KEY, &likes)?;
        Ok(liked)
    }

    pub fn is_liked(&self, blog_id: &str, user_id: &str) -> Result<bool> {
        let likes = self.all()?;
        Ok(likes
            .get(&like_key(blog_id, user_id))
            .copied()
            .unwrap_or(false))
    }

    /// Likes on one post. Scans every like in the store.
    pub fn count(&self, blog_id: &str) -> Result<usize> {
        let prefix = like_key(blog_id, "");
        Ok(self
            .all()?
            .iter()
            .filter(|(key, liked)| **liked && key.starts_with(&prefix))
            .count())
    }

    /// Like count per blog id from a single read.
    pub fn tally(&self) -> Result<HashMap<String, usize>> {
        Ok(tally_of(&self.all()?))
    }
}

/// Like count per blog id.
///
/// Keys are split at their first `_`, which matches [`Likes::count`] for the
/// numeric ids the app generates.
pub fn tally_of(likes: &LikeMap) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for (key, liked) in likes {
        if !liked {
            continue;
        }
        if let Some((blog_id, _)) = key.split_once('_') {
            *counts.entry(blog_id.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use crate::store::backend::KvBackend;
    use crate::store::mem_backend::MemBackend;
    use crate::store::{BlogStore, LIKES_KEY};

    fn store() -> BlogStore<MemBackend> {
        BlogStore::with_backend(MemBackend::new())
    }

    #[test]
    fn toggle_twice_likes_then_unlikes() {
        let store = store();
        let likes = store.likes();

        assert!(likes.toggle("b1", "u1").unwrap());
        assert!(likes.is_liked("b1", "u1").unwrap());

        assert!(!likes.toggle("b1", "u1").unwrap());
        assert!(!likes.is_liked("b1", "u1").unwrap());

        assert!(likes.toggle("b1", "u1").unwrap());
        assert!(likes.is_liked("b1", "u1").unwrap());
    }

    #[test]
    fn unliked_key_is_removed_not_set_false() {
        let store = store();
        store.likes().toggle("b1", "u1").unwrap();
        store.likes().toggle("b1", "u1").unwrap();
        let raw = store.backend.get_item(LIKES_KEY).unwrap().unwrap();
        assert_eq!(raw, "{}");
    }

    #[test]
    fn count_matches_distinct_likers() {
        let store = store();
        let likes = store.likes();
        let toggles = [
            ("b1", "u1"),
            ("b2", "u1"),
            ("b1", "u2"),
            ("b1", "u3"),
            ("b1", "u2"), // unlike
            ("b3", "u3"),
            ("b1", "u2"), // like again
            ("b2", "u2"),
        ];
        for (blog, user) in toggles {
            likes.toggle(blog, user).unwrap();
        }

        for blog in ["b1", "b2", "b3", "b4"] {
            let expected = ["u1", "u2", "u3"]
                .iter()
                .filter(|u| likes.is_liked(blog, u).unwrap())
                .count();
            assert_eq!(likes.count(blog).unwrap(), expected, "blog {}", blog);
        }
        assert_eq!(likes.count("b1").unwrap(), 3);
        assert_eq!(likes.count("b4").unwrap(), 0);
    }

    #[test]
    fn tally_agrees_with_count() {
        let store = store();
        let likes = store.likes();
        likes.toggle("10", "1").unwrap();
        likes.toggle("10", "2").unwrap();
        likes.toggle("1", "2").unwrap();

        let tally = likes.tally().unwrap();
        assert_eq!(tally.get("10"), Some(&likes.count("10").unwrap()));
        assert_eq!(tally.get("1"), Some(&likes.count("1").unwrap()));
        assert_eq!(likes.count("1").unwrap(), 1);
    }

    #[test]
    fn stored_shape_is_map_of_true() {
        let store = store();
        store.likes().toggle("7", "42").unwrap();
        let raw = store.backend.get_item(LIKES_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["7_42"], true);
    }

    #[test]
    fn malformed_likes_read_as_empty() {
        let store = store();
        store.backend.set_item(LIKES_KEY, "[1,2,3]").unwrap();
        assert!(!store.likes().is_liked("b1", "u1").unwrap());
        assert_eq!(store.likes().count("b1").unwrap(), 0);
        // A toggle starts over from an empty set
        assert!(store.likes().toggle("b1", "u1").unwrap());
        assert_eq!(store.likes().count("b1").unwrap(), 1);
    }
}
