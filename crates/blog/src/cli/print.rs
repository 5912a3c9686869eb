use blogapp::commands::{CmdMessage, MessageLevel, PostDetail, PostView};
use blogapp::config::BlogConfig;
use blogapp::model::{Comment, User};
use chrono::{DateTime, Utc};
use colored::Colorize;
use std::path::Path;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const CATEGORY_WIDTH: usize = 11;
const FEATURED_MARKER: &str = "★";
const RULE: &str = "--------------------------------";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// One line per post. With `featured`, the first post is marked.
pub(super) fn print_posts(posts: &[PostView], featured: bool) {
    let now = Utc::now();
    for (i, view) in posts.iter().enumerate() {
        println!("{}", format_post_line(view, featured && i == 0, now));
    }
}

pub(super) fn print_post_detail(detail: &PostDetail) {
    let now = Utc::now();
    let blog = &detail.blog;

    println!("{} {}", format!("{}.", blog.id).yellow(), blog.title.bold());
    println!(
        "{}",
        format!(
            "by {} · {} · {} ({})",
            blog.author,
            blog.category,
            blog.date.format("%b %-d, %Y"),
            time_ago(blog.date, now)
        )
        .dimmed()
    );
    if let Some(image) = &blog.image {
        println!("{}", image.dimmed());
    }
    println!("{}", RULE);
    println!("{}", blog.content);
    println!("{}", RULE);

    let likes = format!("♥ {}", detail.likes);
    if detail.liked {
        println!("{} {}", likes.red(), "(you like this)".dimmed());
    } else {
        println!("{}", likes);
    }

    println!();
    println!("{}", format!("Comments ({})", detail.comments.len()).bold());
    if detail.comments.is_empty() {
        println!("{}", "  No comments yet.".dimmed());
    }
    for comment in &detail.comments {
        print_comment(comment, now);
    }

    if !detail.related.is_empty() {
        println!();
        println!("{}", "Related posts".bold());
        for related in &detail.related {
            println!("  {} {}", format!("{}.", related.id).yellow(), related.title);
        }
    }
}

pub(super) fn print_comments(comments: &[Comment]) {
    let now = Utc::now();
    for comment in comments {
        print_comment(comment, now);
    }
}

fn print_comment(comment: &Comment, now: DateTime<Utc>) {
    println!(
        "  {} {} {}",
        format!("[{}]", comment.id).dimmed(),
        comment.user_name.bold(),
        time_ago(comment.date, now).trim().dimmed()
    );
    for line in comment.text.lines() {
        println!("    {}", line);
    }
}

pub(super) fn print_user(user: &User) {
    println!("{} <{}>", user.name.bold(), user.email);
}

pub(super) fn print_categories(categories: &[String]) {
    for category in categories {
        println!("{}", category);
    }
}

pub(super) fn print_config(config: &BlogConfig, data_dir: &Path) {
    println!("data_dir = {}", data_dir.display());
    println!("seed_sample_posts = {}", config.seed_sample_posts);
    println!("related_limit = {}", config.related_limit);
    println!("min_password_len = {}", config.min_password_len);
}

fn format_post_line(view: &PostView, featured: bool, now: DateTime<Utc>) -> String {
    let left_prefix = if featured {
        format!("  {} ", FEATURED_MARKER)
    } else {
        "    ".to_string()
    };
    let idx_str = format!("{}. ", view.blog.id);

    let category = format!("[{}]", view.blog.category);
    let meta = format!(
        " {:<width$} ♥{:>3} ✎{:>3} ",
        category,
        view.likes,
        view.comments,
        width = CATEGORY_WIDTH
    );

    let fixed_width = left_prefix.width() + idx_str.width() + meta.width() + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);
    let title = truncate_to_width(&view.blog.title, available);
    let padding = available.saturating_sub(title.width());

    let idx_colored = if featured {
        idx_str.yellow()
    } else {
        idx_str.normal()
    };
    let meta_colored = if view.liked {
        meta.red()
    } else {
        meta.normal()
    };

    format!(
        "{}{}{}{}{}{}",
        left_prefix,
        idx_colored,
        title,
        " ".repeat(padding),
        meta_colored,
        time_ago(view.blog.date, now).dimmed()
    )
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Relative time, right-aligned to `TIME_WIDTH`.
fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogapp::model::Blog;
    use chrono::Duration;

    fn view(title: &str, days_ago: i64, now: DateTime<Utc>) -> PostView {
        let author = User::new("u1".into(), "Ada".into(), "a@b.co".into(), "pw".into());
        PostView {
            blog: Blog::new(
                "7".into(),
                title.into(),
                "Travel".into(),
                "body".into(),
                None,
                &author,
                now - Duration::days(days_ago),
            ),
            likes: 4,
            comments: 2,
            liked: false,
        }
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn truncate_respects_wide_chars() {
        let cut = truncate_to_width("日本語のタイトル", 7);
        assert!(cut.ends_with('…'));
        assert!(cut.width() <= 7);
        assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
    }

    #[test]
    fn time_ago_is_right_aligned() {
        let now = Utc::now();
        let s = time_ago(now - Duration::days(3), now);
        assert_eq!(s.len(), TIME_WIDTH);
        assert_eq!(s.trim(), "3 days ago");
    }

    #[test]
    fn post_line_fits_width() {
        colored::control::set_override(false);
        let now = Utc::now();
        let long = "A very long title ".repeat(10);
        for title in ["Short", long.as_str()] {
            let line = format_post_line(&view(title, 2, now), false, now);
            assert_eq!(line.width(), LINE_WIDTH, "{}", line);
            assert!(line.contains("7. "));
            assert!(line.contains("[Travel]"));
            assert!(line.contains("♥  4"));
            assert!(line.trim_end().ends_with("2 days ago"));
        }
    }

    #[test]
    fn featured_post_is_marked() {
        colored::control::set_override(false);
        let now = Utc::now();
        assert!(format_post_line(&view("T", 1, now), true, now).contains(FEATURED_MARKER));
        assert!(!format_post_line(&view("T", 1, now), false, now).contains(FEATURED_MARKER));
    }
}
