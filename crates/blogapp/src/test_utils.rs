use crate::store::fs_backend::FsBackend;
use crate::store::BlogStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // Held so the directory lives as long as the store
    pub _temp_dir: TempDir,
    pub store: BlogStore<FsBackend>,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().join("data");
        let store = BlogStore::with_backend(FsBackend::new(root.clone()));
        Self {
            _temp_dir: temp_dir,
            store,
            root,
        }
    }

    /// Raw text stored under `key`, read straight from disk.
    pub fn raw(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.root.join(format!("{}.json", key))).ok()
    }
}
