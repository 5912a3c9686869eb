use crate::commands::{
    fresh_id, non_blank, require_user, CmdMessage, CmdResult, PostDetail, PostView,
};
use crate::error::{BlogError, Result};
use crate::model::{
    canonical_category, like_key, Blog, BlogPatch, ALL_CATEGORIES, CATEGORIES, DEFAULT_CATEGORY,
};
use crate::store::backend::KvBackend;
use crate::store::likes::tally_of;
use crate::store::BlogStore;
use chrono::Utc;

#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: String,
    /// Defaults to "Tech" when absent.
    pub category: Option<String>,
    pub content: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PostEdit {
    pub title: Option<String>,
    pub category: Option<String>,
    pub content: Option<String>,
    /// `Some(None)` removes the image.
    pub image: Option<Option<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    /// `None` or "All" matches every category.
    pub category: Option<String>,
    /// Case-insensitive match against title or content.
    pub search: Option<String>,
}

impl PostFilter {
    fn is_unfiltered(&self) -> bool {
        matches!(self.category.as_deref(), None | Some(ALL_CATEGORIES)) && self.search.is_none()
    }

    fn matches(&self, blog: &Blog) -> bool {
        let category_ok = match self.category.as_deref() {
            None | Some(ALL_CATEGORIES) => true,
            Some(category) => blog.category == category,
        };
        let search_ok = match self.search.as_deref().map(str::to_lowercase) {
            None => true,
            Some(term) => {
                blog.title.to_lowercase().contains(&term)
                    || blog.content.to_lowercase().contains(&term)
            }
        };
        category_ok && search_ok
    }
}

pub fn create<B: KvBackend>(store: &BlogStore<B>, draft: PostDraft) -> Result<CmdResult> {
    let user = require_user(store, "create a post")?;
    non_blank(&draft.title, "Title is required")?;
    non_blank(&draft.content, "Content is required")?;
    let category = resolve_category(draft.category.as_deref().unwrap_or(DEFAULT_CATEGORY))?;

    let now = Utc::now();
    let blogs = store.blogs().all()?;
    let blog = Blog::new(
        fresh_id(&blogs, now),
        draft.title,
        category.to_string(),
        draft.content,
        draft.image.filter(|i| !i.trim().is_empty()),
        &user,
        now,
    );
    store.blogs().save(blog.clone())?;
    tracing::info!(blog_id = %blog.id, "created post");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Post created: {}", blog.title)));
    result.affected_posts.push(blog);
    Ok(result)
}

pub fn edit<B: KvBackend>(store: &BlogStore<B>, id: &str, edit: PostEdit) -> Result<CmdResult> {
    let user = require_user(store, "edit posts")?;
    let blog = owned_blog(store, id, &user.id, "You can only edit your own posts")?;

    if let Some(title) = &edit.title {
        non_blank(title, "Title is required")?;
    }
    if let Some(content) = &edit.content {
        non_blank(content, "Content is required")?;
    }
    let category = edit
        .category
        .as_deref()
        .map(resolve_category)
        .transpose()?
        .map(str::to_string);

    let patch = BlogPatch {
        title: edit.title,
        category,
        content: edit.content,
        image: edit.image,
        ..Default::default()
    };

    let mut result = CmdResult::default();
    if patch.is_empty() {
        result.add_message(CmdMessage::info("Nothing to change"));
        result.affected_posts.push(blog);
        return Ok(result);
    }

    store.blogs().update(id, patch)?;
    let updated = store
        .blogs()
        .get(id)?
        .ok_or_else(|| BlogError::BlogNotFound(id.to_string()))?;
    result.add_message(CmdMessage::success(format!("Post updated: {}", updated.title)));
    result.affected_posts.push(updated);
    Ok(result)
}

/// Delete a post. Its comments and likes stay behind.
pub fn delete<B: KvBackend>(store: &BlogStore<B>, id: &str) -> Result<CmdResult> {
    let user = require_user(store, "delete posts")?;
    let blog = owned_blog(store, id, &user.id, "You can only delete your own posts")?;

    store.blogs().delete(id)?;
    tracing::info!(blog_id = %id, "deleted post");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Post deleted: {}", blog.title)));
    result.affected_posts.push(blog);
    Ok(result)
}

/// All posts in stored order (newest first) matching `filter`.
pub fn list<B: KvBackend>(store: &BlogStore<B>, filter: PostFilter) -> Result<CmdResult> {
    let blogs: Vec<Blog> = store
        .blogs()
        .all()?
        .into_iter()
        .filter(|b| filter.matches(b))
        .collect();

    let mut result = CmdResult::default();
    if blogs.is_empty() {
        if filter.is_unfiltered() {
            result.add_message(CmdMessage::info("No posts yet"));
        } else {
            result.add_message(CmdMessage::warning("No posts match your filters"));
        }
    }
    let views = decorate(store, blogs)?;
    Ok(result.with_listed_posts(views))
}

/// Posts written by the logged-in user.
pub fn mine<B: KvBackend>(store: &BlogStore<B>) -> Result<CmdResult> {
    let user = require_user(store, "view your posts")?;
    let blogs = store.blogs().by_author(&user.id)?;

    let mut result = CmdResult::default();
    if blogs.is_empty() {
        result.add_message(CmdMessage::info("You haven't written any posts yet"));
    }
    let views = decorate(store, blogs)?;
    Ok(result.with_listed_posts(views).with_user(user))
}

pub fn view<B: KvBackend>(store: &BlogStore<B>, id: &str, related_limit: usize) -> Result<CmdResult> {
    let blogs = store.blogs().all()?;
    let blog = blogs
        .iter()
        .find(|b| b.id == id)
        .cloned()
        .ok_or_else(|| BlogError::BlogNotFound(id.to_string()))?;

    let related = blogs
        .iter()
        .filter(|b| b.id != blog.id && b.category == blog.category)
        .take(related_limit)
        .cloned()
        .collect();

    let liked = match store.current_user()? {
        Some(user) => store.likes().is_liked(&blog.id, &user.id)?,
        None => false,
    };

    let detail = PostDetail {
        likes: store.likes().count(&blog.id)?,
        liked,
        comments: store.comments().by_blog(&blog.id)?,
        related,
        blog,
    };
    Ok(CmdResult {
        post: Some(detail),
        ..Default::default()
    })
}

/// "All" followed by the distinct categories in use, first-seen order.
pub fn categories<B: KvBackend>(store: &BlogStore<B>) -> Result<CmdResult> {
    let mut names = vec![ALL_CATEGORIES.to_string()];
    for blog in store.blogs().all()? {
        if !names.contains(&blog.category) {
            names.push(blog.category);
        }
    }
    Ok(CmdResult {
        categories: names,
        ..Default::default()
    })
}

fn decorate<B: KvBackend>(store: &BlogStore<B>, blogs: Vec<Blog>) -> Result<Vec<PostView>> {
    let likes = store.likes().all()?;
    let like_tally = tally_of(&likes);
    let comment_tally = store.comments().tally()?;
    let current = store.current_user()?;

    Ok(blogs
        .into_iter()
        .map(|blog| {
            let liked = current.as_ref().is_some_and(|u| {
                likes
                    .get(&like_key(&blog.id, &u.id))
                    .copied()
                    .unwrap_or(false)
            });
            PostView {
                likes: like_tally.get(&blog.id).copied().unwrap_or(0),
                comments: comment_tally.get(&blog.id).copied().unwrap_or(0),
                liked,
                blog,
            }
        })
        .collect())
}

fn owned_blog<B: KvBackend>(
    store: &BlogStore<B>,
    id: &str,
    user_id: &str,
    denied: &str,
) -> Result<Blog> {
    let blog = store
        .blogs()
        .get(id)?
        .ok_or_else(|| BlogError::BlogNotFound(id.to_string()))?;
    if blog.author_id != user_id {
        return Err(BlogError::Forbidden(denied.to_string()));
    }
    Ok(blog)
}

fn resolve_category(input: &str) -> Result<&'static str> {
    canonical_category(input).ok_or_else(|| {
        BlogError::Validation(format!(
            "Unknown category '{}' (expected one of: {})",
            input,
            CATEGORIES.join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{empty_store, store_as};
    use crate::commands::MessageLevel;
    use crate::model::Comment;

    fn draft(title: &str, category: &str) -> PostDraft {
        PostDraft {
            title: title.into(),
            category: Some(category.into()),
            content: format!("{} body", title),
            image: None,
        }
    }

    fn created_id(result: CmdResult) -> String {
        result.affected_posts[0].id.clone()
    }

    #[test]
    fn create_requires_login() {
        let store = empty_store();
        assert!(matches!(
            create(&store, draft("Hello", "Tech")),
            Err(BlogError::NotLoggedIn(_))
        ));
        assert!(store.blogs().all().unwrap().is_empty());
    }

    #[test]
    fn create_prepends_and_records_author() {
        let store = store_as("Ada");
        let first = created_id(create(&store, draft("First", "Tech")).unwrap());
        let second = created_id(create(&store, draft("Second", "food")).unwrap());

        let blogs = store.blogs().all().unwrap();
        assert_eq!(blogs[0].id, second);
        assert_eq!(blogs[1].id, first);
        assert_eq!(blogs[0].category, "Food");
        assert_eq!(blogs[0].author, "Ada");
        assert_eq!(blogs[0].author_id, "u1");
    }

    #[test]
    fn create_defaults_category_and_drops_blank_image() {
        let store = store_as("Ada");
        let result = create(
            &store,
            PostDraft {
                title: "T".into(),
                category: None,
                content: "C".into(),
                image: Some("  ".into()),
            },
        )
        .unwrap();
        let blog = &result.affected_posts[0];
        assert_eq!(blog.category, "Tech");
        assert_eq!(blog.image, None);
    }

    #[test]
    fn create_validates_fields() {
        let store = store_as("Ada");
        assert!(matches!(
            create(&store, draft("   ", "Tech")),
            Err(BlogError::Validation(_))
        ));
        let mut no_body = draft("Title", "Tech");
        no_body.content = "\n".into();
        assert!(matches!(create(&store, no_body), Err(BlogError::Validation(_))));
        assert!(matches!(
            create(&store, draft("Title", "Gardening")),
            Err(BlogError::Validation(_))
        ));
        assert!(store.blogs().all().unwrap().is_empty());
    }

    #[test]
    fn edit_by_author_merges_fields() {
        let store = store_as("Ada");
        let id = created_id(create(&store, draft("Old", "Tech")).unwrap());

        let result = edit(
            &store,
            &id,
            PostEdit {
                title: Some("New".into()),
                image: Some(Some("https://img".into())),
                ..Default::default()
            },
        )
        .unwrap();

        let updated = &result.affected_posts[0];
        assert_eq!(updated.title, "New");
        assert_eq!(updated.content, "Old body");
        assert_eq!(updated.image.as_deref(), Some("https://img"));
        assert_eq!(store.blogs().get(&id).unwrap().unwrap().title, "New");
    }

    #[test]
    fn edit_by_other_user_is_forbidden() {
        let store = store_as("Ada");
        let id = created_id(create(&store, draft("Ada's", "Tech")).unwrap());

        let bo = store.users().get("u2").unwrap().unwrap();
        store.set_current_user(Some(&bo)).unwrap();

        let err = edit(
            &store,
            &id,
            PostEdit {
                title: Some("Hijacked".into()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, BlogError::Forbidden(_)));
        assert!(matches!(delete(&store, &id), Err(BlogError::Forbidden(_))));
        assert_eq!(store.blogs().get(&id).unwrap().unwrap().title, "Ada's");
    }

    #[test]
    fn edit_unknown_post() {
        let store = store_as("Ada");
        assert!(matches!(
            edit(&store, "nope", PostEdit::default()),
            Err(BlogError::BlogNotFound(_))
        ));
    }

    #[test]
    fn edit_with_no_changes_does_not_write() {
        let store = store_as("Ada");
        let id = created_id(create(&store, draft("Same", "Tech")).unwrap());
        let writes = store.backend.write_count();
        let result = edit(&store, &id, PostEdit::default()).unwrap();
        assert_eq!(result.messages[0].content, "Nothing to change");
        assert_eq!(store.backend.write_count(), writes);
    }

    #[test]
    fn delete_leaves_comments_and_likes() {
        let store = store_as("Ada");
        let id = created_id(create(&store, draft("Doomed", "Tech")).unwrap());
        let ada = store.current_user().unwrap().unwrap();
        store
            .comments()
            .save(Comment::new("c1".into(), id.clone(), &ada, "hi".into(), Utc::now()))
            .unwrap();
        store.likes().toggle(&id, &ada.id).unwrap();

        delete(&store, &id).unwrap();
        assert!(store.blogs().get(&id).unwrap().is_none());
        assert_eq!(store.comments().by_blog(&id).unwrap().len(), 1);
        assert_eq!(store.likes().count(&id).unwrap(), 1);
    }

    #[test]
    fn list_filters_by_category_and_search() {
        let store = empty_store();
        store.seed_if_empty().unwrap();

        let all = list(&store, PostFilter::default()).unwrap();
        assert_eq!(all.listed_posts.len(), 10);
        assert_eq!(all.listed_posts[0].blog.id, "1");

        let design = list(
            &store,
            PostFilter {
                category: Some("Design".into()),
                search: None,
            },
        )
        .unwrap();
        let ids: Vec<&str> = design.listed_posts.iter().map(|p| p.blog.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "9"]);

        let everything = list(
            &store,
            PostFilter {
                category: Some("All".into()),
                search: Some("SOURDOUGH".into()),
            },
        )
        .unwrap();
        assert_eq!(everything.listed_posts.len(), 1);
        assert_eq!(everything.listed_posts[0].blog.id, "5");

        // Search hits content too
        let content_hit = list(
            &store,
            PostFilter {
                category: None,
                search: Some("negative space".into()),
            },
        )
        .unwrap();
        assert_eq!(content_hit.listed_posts[0].blog.id, "2");
    }

    #[test]
    fn empty_listing_explains_itself() {
        let store = empty_store();
        let nothing = list(&store, PostFilter::default()).unwrap();
        assert_eq!(nothing.messages[0].level, MessageLevel::Info);

        store.seed_if_empty().unwrap();
        let missed = list(
            &store,
            PostFilter {
                category: Some("Other".into()),
                search: Some("zzz".into()),
            },
        )
        .unwrap();
        assert!(missed.listed_posts.is_empty());
        assert_eq!(missed.messages[0].level, MessageLevel::Warning);
        assert!(list(&store, PostFilter::default()).unwrap().messages.is_empty());
    }

    #[test]
    fn list_decorates_counts() {
        let store = store_as("Ada");
        store.seed_if_empty().unwrap();
        store.likes().toggle("3", "u1").unwrap();
        store.likes().toggle("3", "u2").unwrap();
        let ada = store.current_user().unwrap().unwrap();
        store
            .comments()
            .save(Comment::new("c1".into(), "3".into(), &ada, "nice".into(), Utc::now()))
            .unwrap();

        let result = list(&store, PostFilter::default()).unwrap();
        let third = result.listed_posts.iter().find(|p| p.blog.id == "3").unwrap();
        assert_eq!(third.likes, 2);
        assert_eq!(third.comments, 1);
        assert!(third.liked);

        let first = result.listed_posts.iter().find(|p| p.blog.id == "1").unwrap();
        assert_eq!(first.likes, 0);
        assert!(!first.liked);
    }

    #[test]
    fn mine_lists_only_own_posts() {
        let store = store_as("Ada");
        store.seed_if_empty().unwrap();
        let id = created_id(create(&store, draft("Mine", "Travel")).unwrap());

        let result = mine(&store).unwrap();
        assert_eq!(result.listed_posts.len(), 1);
        assert_eq!(result.listed_posts[0].blog.id, id);

        store.set_current_user(None).unwrap();
        assert!(matches!(mine(&store), Err(BlogError::NotLoggedIn(_))));
    }

    #[test]
    fn view_shows_detail_and_related() {
        let store = store_as("Bo");
        store.seed_if_empty().unwrap();
        store.likes().toggle("1", "u2").unwrap();

        let detail = view(&store, "1", 3).unwrap().post.unwrap();
        assert_eq!(detail.blog.id, "1");
        assert_eq!(detail.likes, 1);
        assert!(detail.liked);
        let related: Vec<&str> = detail.related.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(related, vec!["10"]);

        let lifestyle = view(&store, "3", 3).unwrap().post.unwrap();
        assert_eq!(lifestyle.related.len(), 1);
        assert_eq!(lifestyle.related[0].id, "8");

        let limited = view(&store, "3", 0).unwrap().post.unwrap();
        assert!(limited.related.is_empty());
    }

    #[test]
    fn view_unknown_post() {
        let store = empty_store();
        assert!(matches!(view(&store, "42", 3), Err(BlogError::BlogNotFound(_))));
    }

    #[test]
    fn categories_in_first_seen_order() {
        let store = empty_store();
        store.seed_if_empty().unwrap();
        let result = categories(&store).unwrap();
        assert_eq!(
            result.categories,
            vec!["All", "Tech", "Design", "Lifestyle", "Travel", "Food", "Health", "Business"]
        );
    }
}
