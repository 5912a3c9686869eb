use crate::error::Result;

/// Abstract interface for the key-value substrate the collections live in.
///
/// Modeled on browser local storage: flat string keys, UTF-8 text values,
/// synchronous access. This trait handles the "how" of storage (filesystem vs
/// memory), while [`BlogStore`](super::BlogStore) handles the "what" (collections,
/// likes, session, seeding).
pub trait KvBackend {
    /// Read the text stored under `key`.
    /// Returns Ok(None) if the key is absent.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the text stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;

    /// Human readable location of the data, for diagnostics.
    fn describe(&self) -> String;
}
