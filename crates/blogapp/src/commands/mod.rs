//! # Command Layer
//!
//! This module contains the **business rules** of the app. Each user flow lives
//! in its own submodule as plain functions over a [`BlogStore`].
//!
//! ## Role and Responsibilities
//!
//! Commands are where caller-side rules live:
//! - Form validation (blank titles, email shape, password length)
//! - Session checks ("log in to comment")
//! - Ownership checks (only authors edit their posts and comments)
//! - Id generation and the email uniqueness check before inserting a user
//!
//! The store below them enforces none of this.
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr or formatting
//! - **Argument parsing**: that's the CLI layer's job
//! - **Prompts**: return data, the UI decides
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings:
//! - `listed_posts`: posts decorated with like/comment counts
//! - `post`: a post detail (comments, related posts)
//! - `comments`: comments touched by the command
//! - `user`: the user the command acted as or on
//! - `categories`: category names for filters
//! - `messages`: leveled messages
//!
//! ## Testing Strategy
//!
//! Command tests use `MemBackend` and cover every rule and error branch.
//!
//! ## Command Modules
//!
//! - [`auth`]: signup, login, logout, whoami
//! - [`posts`]: create, edit, delete, list, mine, view, categories
//! - [`likes`]: toggle a like
//! - [`comments`]: add, edit, delete comments

use crate::error::{BlogError, Result};
use crate::model::{next_id, Blog, Comment, User};
use crate::store::backend::KvBackend;
use crate::store::collection::Record;
use crate::store::BlogStore;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub mod auth;
pub mod comments;
pub mod likes;
pub mod posts;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A post as shown in listings.
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub blog: Blog,
    pub likes: usize,
    pub comments: usize,
    /// Whether the logged-in user likes it. Always false when logged out.
    pub liked: bool,
}

/// A single post with everything its page shows.
#[derive(Debug, Clone, Serialize)]
pub struct PostDetail {
    pub blog: Blog,
    pub likes: usize,
    pub liked: bool,
    pub comments: Vec<Comment>,
    pub related: Vec<Blog>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_posts: Vec<PostView>,
    pub affected_posts: Vec<Blog>,
    pub post: Option<PostDetail>,
    pub comments: Vec<Comment>,
    pub user: Option<User>,
    pub categories: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_posts(mut self, posts: Vec<PostView>) -> Self {
        self.listed_posts = posts;
        self
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }
}

/// The logged-in user, or `NotLoggedIn` naming the attempted action.
pub(crate) fn require_user<B: KvBackend>(store: &BlogStore<B>, action: &str) -> Result<User> {
    store
        .current_user()?
        .ok_or_else(|| BlogError::NotLoggedIn(action.to_string()))
}

/// A time-based id not yet used in `records`.
pub(crate) fn fresh_id<T: Record>(records: &[T], now: DateTime<Utc>) -> String {
    next_id(now, |candidate| records.iter().any(|r| r.id() == candidate))
}

pub(crate) fn non_blank(value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BlogError::Validation(message.to_string()));
    }
    Ok(())
}
