//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every blog operation, whichever UI drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the matching command function
//! - **Supplies configuration** the commands take as arguments
//!   (`min_password_len` for signup, `related_limit` for the post page)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O operations**: no stdout, stderr, or formatting
//! - **Presentation concerns**: returns data structures, not strings
//!
//! ## Generic Over KvBackend
//!
//! `BlogApi<B: KvBackend>` is generic over the storage backend:
//! - Production: `BlogApi<FsBackend>`
//! - Testing: `BlogApi<MemBackend>`
//!
//! ## Testing Strategy
//!
//! API tests check that arguments and configuration reach the right command.
//! Command rules are tested in the command modules, storage in the store modules.

use crate::commands::{self, CmdResult};
use crate::config::BlogConfig;
use crate::error::Result;
use crate::store::backend::KvBackend;
use crate::store::BlogStore;

pub use crate::commands::auth::SignupForm;
pub use crate::commands::posts::{PostDraft, PostEdit, PostFilter};

/// The main API facade for blog operations.
pub struct BlogApi<B: KvBackend> {
    store: BlogStore<B>,
    config: BlogConfig,
}

impl<B: KvBackend> BlogApi<B> {
    pub fn new(store: BlogStore<B>, config: BlogConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &BlogStore<B> {
        &self.store
    }

    pub fn config(&self) -> &BlogConfig {
        &self.config
    }

    pub fn signup(&self, form: SignupForm) -> Result<CmdResult> {
        commands::auth::signup(&self.store, form, self.config.min_password_len)
    }

    pub fn login(&self, email: &str, password: &str) -> Result<CmdResult> {
        commands::auth::login(&self.store, email, password)
    }

    pub fn logout(&self) -> Result<CmdResult> {
        commands::auth::logout(&self.store)
    }

    pub fn whoami(&self) -> Result<CmdResult> {
        commands::auth::whoami(&self.store)
    }

    pub fn create_post(&self, draft: PostDraft) -> Result<CmdResult> {
        commands::posts::create(&self.store, draft)
    }

    pub fn edit_post(&self, id: &str, edit: PostEdit) -> Result<CmdResult> {
        commands::posts::edit(&self.store, id, edit)
    }

    pub fn delete_post(&self, id: &str) -> Result<CmdResult> {
        commands::posts::delete(&self.store, id)
    }

    pub fn list_posts(&self, filter: PostFilter) -> Result<CmdResult> {
        commands::posts::list(&self.store, filter)
    }

    pub fn my_posts(&self) -> Result<CmdResult> {
        commands::posts::mine(&self.store)
    }

    pub fn view_post(&self, id: &str) -> Result<CmdResult> {
        commands::posts::view(&self.store, id, self.config.related_limit)
    }

    pub fn categories(&self) -> Result<CmdResult> {
        commands::posts::categories(&self.store)
    }

    pub fn toggle_like(&self, blog_id: &str) -> Result<CmdResult> {
        commands::likes::toggle(&self.store, blog_id)
    }

    pub fn add_comment(&self, blog_id: &str, text: &str) -> Result<CmdResult> {
        commands::comments::add(&self.store, blog_id, text)
    }

    pub fn edit_comment(&self, id: &str, text: &str) -> Result<CmdResult> {
        commands::comments::edit(&self.store, id, text)
    }

    pub fn delete_comment(&self, id: &str) -> Result<CmdResult> {
        commands::comments::delete(&self.store, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlogError;
    use crate::store::mem_backend::MemBackend;

    fn api_with(config: BlogConfig) -> BlogApi<MemBackend> {
        let store = BlogStore::with_backend(MemBackend::new());
        store.seed_if_empty().unwrap();
        BlogApi::new(store, config)
    }

    fn form(password: &str) -> SignupForm {
        SignupForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: password.into(),
            confirm_password: password.into(),
        }
    }

    #[test]
    fn signup_uses_configured_password_length() {
        let strict = api_with(BlogConfig {
            min_password_len: 10,
            ..BlogConfig::default()
        });
        assert!(matches!(
            strict.signup(form("secret1")),
            Err(BlogError::Validation(_))
        ));

        let lenient = api_with(BlogConfig::default());
        assert!(lenient.signup(form("secret1")).is_ok());
    }

    #[test]
    fn view_uses_configured_related_limit() {
        let api = api_with(BlogConfig {
            related_limit: 1,
            ..BlogConfig::default()
        });
        // Seeded posts 1 and 10 are both Tech
        let detail = api.view_post("1").unwrap().post.unwrap();
        assert_eq!(detail.related.len(), 1);

        let none = api_with(BlogConfig {
            related_limit: 0,
            ..BlogConfig::default()
        });
        assert!(none.view_post("1").unwrap().post.unwrap().related.is_empty());
    }

    #[test]
    fn session_flows_through_to_commands() {
        let api = api_with(BlogConfig::default());
        assert!(matches!(
            api.toggle_like("1"),
            Err(BlogError::NotLoggedIn(_))
        ));

        api.signup(form("secret1")).unwrap();
        assert!(api.toggle_like("1").unwrap().listed_posts[0].liked);
        assert_eq!(api.add_comment("1", "Nice").unwrap().comments.len(), 1);

        api.logout().unwrap();
        assert!(api.whoami().unwrap().user.is_none());
        assert!(api.login("ada@example.com", "secret1").is_ok());
    }

    #[test]
    fn list_is_newest_first() {
        let api = api_with(BlogConfig::default());
        let listed = api.list_posts(PostFilter::default()).unwrap().listed_posts;
        assert_eq!(listed.len(), 10);
        assert_eq!(listed[0].blog.id, "1");
    }
}
