//! # CLI Layer
//!
//! This module is **one possible UI client** for blogapp.
//!
//! The CLI layer is the **only** place that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `setup`: clap definitions and the version string
//! - `commands`: `run()`, context setup and the `handle_*` functions
//! - `print`: colored messages, post lines and the post page

mod commands;
mod print;
mod setup;

pub use commands::run;
