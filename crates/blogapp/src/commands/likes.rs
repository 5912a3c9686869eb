use crate::commands::{require_user, CmdMessage, CmdResult, PostView};
use crate::error::{BlogError, Result};
use crate::store::backend::KvBackend;
use crate::store::BlogStore;

/// Like or unlike a post as the logged-in user.
pub fn toggle<B: KvBackend>(store: &BlogStore<B>, blog_id: &str) -> Result<CmdResult> {
    let user = require_user(store, "like posts")?;
    let blog = store
        .blogs()
        .get(blog_id)?
        .ok_or_else(|| BlogError::BlogNotFound(blog_id.to_string()))?;

    let liked = store.likes().toggle(&blog.id, &user.id)?;
    let likes = store.likes().count(&blog.id)?;
    let comments = store.comments().by_blog(&blog.id)?.len();

    let mut result = CmdResult::default();
    let verb = if liked { "Liked" } else { "Unliked" };
    result.add_message(CmdMessage::success(format!("{}: {}", verb, blog.title)));
    result.listed_posts.push(PostView {
        blog,
        likes,
        comments,
        liked,
    });
    Ok(result)
}
