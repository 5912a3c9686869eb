use super::backend::KvBackend;
use crate::error::{BlogError, Result};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// Filesystem backend: one `<key>.json` file per key inside `root`.
///
/// The directory is created lazily on first write, so a fresh data dir reads as
/// an empty store.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of the file holding `key`.
    pub fn item_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || key.starts_with('.')
            || key.contains(['/', '\\'])
            || key.contains("..")
        {
            return Err(BlogError::Store(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(BlogError::Io)?;
        }
        Ok(())
    }
}

impl KvBackend for FsBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.item_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(path).map_err(BlogError::Io)?;
        // Invalid UTF-8 is passed on lossily so the store sees unreadable text
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(key, "stored file is not valid UTF-8");
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };
        Ok(Some(content))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let target = self.item_path(key)?;
        self.ensure_dir()?;

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, value).map_err(BlogError::Io)?;
        fs::rename(&tmp, &target).map_err(BlogError::Io)?;

        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.item_path(key)?;
        if path.exists() {
            fs::remove_file(path).map_err(BlogError::Io)?;
        }
        Ok(())
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
