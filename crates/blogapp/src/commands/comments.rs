use crate::commands::{fresh_id, non_blank, require_user, CmdMessage, CmdResult};
use crate::error::{BlogError, Result};
use crate::model::{Comment, CommentPatch};
use crate::store::backend::KvBackend;
use crate::store::BlogStore;
use chrono::Utc;

/// Comment on a post as the logged-in user. The user's current name is
/// copied onto the comment.
pub fn add<B: KvBackend>(store: &BlogStore<B>, blog_id: &str, text: &str) -> Result<CmdResult> {
    let user = require_user(store, "comment")?;
    if !store.blogs().contains(blog_id)? {
        return Err(BlogError::BlogNotFound(blog_id.to_string()));
    }
    non_blank(text, "Comment cannot be empty")?;

    let now = Utc::now();
    let existing = store.comments().all()?;
    let comment = Comment::new(
        fresh_id(&existing, now),
        blog_id.to_string(),
        &user,
        text.to_string(),
        now,
    );
    store.comments().save(comment.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Comment added!"));
    result.comments.push(comment);
    Ok(result)
}

pub fn edit<B: KvBackend>(store: &BlogStore<B>, id: &str, text: &str) -> Result<CmdResult> {
    let user = require_user(store, "edit comments")?;
    owned_comment(store, id, &user.id, "You can only edit your own comments")?;
    non_blank(text, "Comment cannot be empty")?;

    store.comments().update(id, CommentPatch::text(text))?;
    let updated = store
        .comments()
        .get(id)?
        .ok_or_else(|| BlogError::CommentNotFound(id.to_string()))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Comment updated!"));
    result.comments.push(updated);
    Ok(result)
}

pub fn delete<B: KvBackend>(store: &BlogStore<B>, id: &str) -> Result<CmdResult> {
    let user = require_user(store, "delete comments")?;
    let comment = owned_comment(store, id, &user.id, "You can only delete your own comments")?;

    store.comments().delete(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Comment deleted!"));
    result.comments.push(comment);
    Ok(result)
}

fn owned_comment<B: KvBackend>(
    store: &BlogStore<B>,
    id: &str,
    user_id: &str,
    denied: &str,
) -> Result<Comment> {
    let comment = store
        .comments()
        .get(id)?
        .ok_or_else(|| BlogError::CommentNotFound(id.to_string()))?;
    if comment.user_id != user_id {
        return Err(BlogError::Forbidden(denied.to_string()));
    }
    Ok(comment)
}
