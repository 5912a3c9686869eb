//! # Initialization
//!
//! Every UI starts from [`initialize`], which turns a few inputs into a ready
//! [`BlogApi`] over the filesystem.
//!
//! ## Data Directory Resolution
//!
//! 1. An explicit `data_override` (the CLI's `--data` flag) wins.
//! 2. Otherwise the `BLOG_DATA` environment variable, used by tests to
//!    isolate state.
//! 3. Otherwise the OS data directory from the `directories` crate
//!    (e.g. `~/.local/share/blog` on Linux).
//!
//! Each collection is one file in that directory:
//!
//! ```text
//! <data_dir>/
//!   blogUsers.json
//!   currentUser.json
//!   blogs.json
//!   blogLikes.json
//!   blogComments.json
//!   blog.toml          # optional
//! ```
//!
//! ## Configuration
//!
//! `blog.toml` is searched in the OS config directory and then the data
//! directory; both are merged with the data directory winning. A missing or
//! broken file falls back to defaults.
//!
//! ## Seeding
//!
//! When `seed_sample_posts` is on, the sample posts are written if the store
//! has no posts yet.

use crate::api::BlogApi;
use crate::config::{BlogConfig, CONFIG_FILE};
use crate::error::{BlogError, Result};
use crate::store::fs_backend::FsBackend;
use crate::store::BlogStore;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::PathBuf;

pub const DATA_ENV: &str = "BLOG_DATA";

pub struct BlogContext {
    pub api: BlogApi<FsBackend>,
    pub config: BlogConfig,
    pub data_dir: PathBuf,
}

/// Build the filesystem-backed API.
///
/// # Arguments
///
/// * `data_override` - Explicit data directory. When absent, `BLOG_DATA`
///   and then the OS data directory are used.
pub fn initialize(data_override: Option<PathBuf>) -> Result<BlogContext> {
    let dirs = ProjectDirs::from("com", "blogsphere", "blog");

    let data_dir = match data_override.or_else(|| std::env::var_os(DATA_ENV).map(PathBuf::from)) {
        Some(dir) => dir,
        None => dirs
            .as_ref()
            .map(|d| d.data_dir().to_path_buf())
            .ok_or_else(|| BlogError::Config("Could not determine data dir".into()))?,
    };

    let mut search_paths = Vec::new();
    if let Some(dirs) = &dirs {
        search_paths.push(SearchPath::Path(dirs.config_dir().to_path_buf()));
    }
    search_paths.push(SearchPath::Path(data_dir.clone()));

    let config: BlogConfig = Clapfig::builder()
        .app_name("blog")
        .file_name(CONFIG_FILE)
        .search_paths(search_paths)
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_default();

    let store = BlogStore::with_backend(FsBackend::new(data_dir.clone()));
    if config.seed_sample_posts && store.seed_if_empty()? {
        tracing::info!(dir = %data_dir.display(), "seeded sample posts");
    }

    tracing::debug!(dir = %data_dir.display(), ?config, "initialized");
    let api = BlogApi::new(store, config.clone());
    Ok(BlogContext {
        api,
        config,
        data_dir,
    })
}
