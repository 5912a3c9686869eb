use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "blog", bin_name = "blog", version = get_version())]
#[command(about = "Write, like and comment on blog posts stored on this machine", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $BLOG_DATA, then the OS data directory)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output (debug logging to stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account and log in
    #[command(display_order = 1)]
    Signup {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Password confirmation (defaults to --password)
        #[arg(long)]
        confirm: Option<String>,
    },

    /// Log in with email and password
    #[command(display_order = 2)]
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Log out
    #[command(display_order = 3)]
    Logout,

    /// Show the logged-in user
    #[command(display_order = 4)]
    Whoami,

    /// List posts, newest first
    #[command(alias = "ls", display_order = 10)]
    List {
        /// Only posts in this category ("All" for every category)
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive match against title or content
        #[arg(short, long)]
        search: Option<String>,
    },

    /// List your own posts
    #[command(display_order = 11)]
    Mine,

    /// Show a post with its comments and related posts
    #[command(alias = "v", display_order = 12)]
    View { id: String },

    /// Write a new post
    #[command(alias = "n", display_order = 13)]
    Create {
        #[arg(long)]
        title: String,

        /// One of the fixed categories (default: Tech)
        #[arg(short, long)]
        category: Option<String>,

        /// Image URL
        #[arg(long)]
        image: Option<String>,

        /// Post body (read from stdin when omitted)
        #[arg(long)]
        content: Option<String>,
    },

    /// Edit one of your posts
    #[command(alias = "e", display_order = 14)]
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(long)]
        content: Option<String>,

        /// New image URL
        #[arg(long, conflicts_with = "no_image")]
        image: Option<String>,

        /// Remove the image
        #[arg(long)]
        no_image: bool,
    },

    /// Delete one of your posts
    #[command(alias = "rm", display_order = 15)]
    Delete { id: String },

    /// Like a post, or unlike it if you already do
    #[command(display_order = 20)]
    Like { id: String },

    /// Add, edit or delete comments
    #[command(subcommand, display_order = 21)]
    Comment(CommentCommands),

    /// List categories in use
    #[command(display_order = 30)]
    Categories,

    /// Show the effective configuration
    #[command(display_order = 31)]
    Config,
}

#[derive(Subcommand, Debug)]
pub enum CommentCommands {
    /// Comment on a post
    Add {
        blog_id: String,

        /// Comment text (joined with spaces)
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Change one of your comments
    Edit {
        id: String,

        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Delete one of your comments
    Delete { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn naked_invocation_has_no_command() {
        let cli = Cli::try_parse_from(["blog"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["blog", "list", "--data", "/tmp/x", "-v"]).unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/x")));
        assert!(cli.verbose);
    }

    #[test]
    fn comment_text_words_are_collected() {
        let cli = Cli::try_parse_from(["blog", "comment", "add", "3", "great", "post"]).unwrap();
        match cli.command {
            Some(Commands::Comment(CommentCommands::Add { blog_id, text })) => {
                assert_eq!(blog_id, "3");
                assert_eq!(text, vec!["great", "post"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn image_and_no_image_conflict() {
        assert!(Cli::try_parse_from(["blog", "edit", "1", "--image", "u", "--no-image"]).is_err());
    }
}
