//! # Configuration
//!
//! Configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files and environment variables.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `BLOG__SEED_SAMPLE_POSTS`, `BLOG__RELATED_LIMIT`, etc.
//! 2. **Data-dir Config**: `<data_dir>/blog.toml`.
//! 3. **User Config**: `blog.toml` in the OS config directory (via `directories`).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `seed_sample_posts` | `true` | Write the sample posts when the store has none |
//! | `related_limit` | `3` | Related posts shown next to a post |
//! | `min_password_len` | `6` | Minimum password length at signup |

use confique::Config;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "blog.toml";

/// Configuration for the blog app, stored in `blog.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BlogConfig {
    /// Seed the ten sample posts on startup when no posts exist.
    #[config(default = true)]
    pub seed_sample_posts: bool,

    /// How many same-category posts to show next to a post.
    #[config(default = 3)]
    pub related_limit: usize,

    /// Minimum password length accepted at signup.
    #[config(default = 6)]
    pub min_password_len: usize,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            seed_sample_posts: true,
            related_limit: 3,
            min_password_len: 6,
        }
    }
}
