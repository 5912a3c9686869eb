//! # Blogapp Architecture
//!
//! Blogapp is the **UI-agnostic core** of a small local-first blogging app:
//! users sign up, write posts, like them and comment on them, and everything
//! lives in a handful of text documents on the local machine.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI (the `blog` CLI, or anything else)                      │
//! │  - Parses input, renders output, owns the terminal          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, supplies configuration        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, session and ownership rules                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BlogStore: collections over a KvBackend                  │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust values and returns
//! `Result<CmdResult>`. It never writes to stdout/stderr and never exits the
//! process. Diagnostics go through `tracing`; installing a subscriber is the
//! UI's business.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: business rules per user flow
//! - [`store`]: collections, likes, session and seeding over a backend
//! - [`model`]: `User`, `Blog`, `Comment` and their patches
//! - [`seed`]: the sample posts
//! - [`config`]: `blog.toml` settings
//! - [`init`]: builds a filesystem-backed API
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod seed;
pub mod store;

#[cfg(test)]
pub(crate) mod test_utils;
