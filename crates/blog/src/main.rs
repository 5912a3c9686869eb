//! # Blog CLI
//!
//! The `blog` binary is a thin client of the `blogapp` library: this file only
//! invokes `cli::run()` and handles process termination. Everything it shows
//! comes from `blogapp::api::BlogApi`, and nothing in the library knows about
//! the terminal.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/blog/src/cli/)                           │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring and dispatch (commands.rs)                │
//! │  - Terminal output (print.rs)                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/blogapp/src/api.rs)                      │
//! │  - Dispatches to command modules                            │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - Business rules are tested in `blogapp`'s command modules.
//! - Argument parsing and line formatting are unit tested in `cli/`.
//! - `tests/cli_e2e.rs` drives the built binary against a temporary data
//!   directory (`BLOG_DATA`).

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
