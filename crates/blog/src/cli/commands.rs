use super::print::{
    print_categories, print_comments, print_config, print_messages, print_post_detail,
    print_posts, print_user,
};
use super::setup::{Cli, CommentCommands, Commands};
use blogapp::api::{BlogApi, PostDraft, PostEdit, PostFilter, SignupForm};
use blogapp::config::BlogConfig;
use blogapp::error::Result;
use blogapp::init::initialize;
use blogapp::store::fs_backend::FsBackend;
use clap::Parser;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_ENV: &str = "BLOG_LOG";

struct AppContext {
    api: BlogApi<FsBackend>,
    config: BlogConfig,
    data_dir: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Signup {
            name,
            email,
            password,
            confirm,
        }) => {
            let confirm_password = confirm.unwrap_or_else(|| password.clone());
            handle_signup(
                &ctx,
                SignupForm {
                    name,
                    email,
                    password,
                    confirm_password,
                },
            )
        }
        Some(Commands::Login { email, password }) => handle_login(&ctx, &email, &password),
        Some(Commands::Logout) => handle_logout(&ctx),
        Some(Commands::Whoami) => handle_whoami(&ctx),
        Some(Commands::List { category, search }) => {
            handle_list(&ctx, PostFilter { category, search })
        }
        Some(Commands::Mine) => handle_mine(&ctx),
        Some(Commands::View { id }) => handle_view(&ctx, &id),
        Some(Commands::Create {
            title,
            category,
            image,
            content,
        }) => handle_create(&ctx, title, category, image, content),
        Some(Commands::Edit {
            id,
            title,
            category,
            content,
            image,
            no_image,
        }) => {
            let image = if no_image { Some(None) } else { image.map(Some) };
            handle_edit(
                &ctx,
                &id,
                PostEdit {
                    title,
                    category,
                    content,
                    image,
                },
            )
        }
        Some(Commands::Delete { id }) => handle_delete(&ctx, &id),
        Some(Commands::Like { id }) => handle_like(&ctx, &id),
        Some(Commands::Comment(cmd)) => match cmd {
            CommentCommands::Add { blog_id, text } => {
                handle_comment_add(&ctx, &blog_id, &text.join(" "))
            }
            CommentCommands::Edit { id, text } => handle_comment_edit(&ctx, &id, &text.join(" ")),
            CommentCommands::Delete { id } => handle_comment_delete(&ctx, &id),
        },
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::Config) => handle_config(&ctx),
        None => handle_list(&ctx, PostFilter::default()),
    }
}

/// Logs go to stderr. `BLOG_LOG` takes a filter directive and wins over `-v`.
fn init_logging(verbose: bool) {
    let default = if verbose {
        "blogapp=debug,blog=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(cli.data.clone())?;
    Ok(AppContext {
        api: ctx.api,
        config: ctx.config,
        data_dir: ctx.data_dir,
    })
}

fn handle_signup(ctx: &AppContext, form: SignupForm) -> Result<()> {
    let result = ctx.api.signup(form)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_login(ctx: &AppContext, email: &str, password: &str) -> Result<()> {
    let result = ctx.api.login(email, password)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_logout(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.logout()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_whoami(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.whoami()?;
    if let Some(user) = &result.user {
        print_user(user);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, filter: PostFilter) -> Result<()> {
    // Only the unfiltered home page has a featured post
    let featured = filter.category.is_none() && filter.search.is_none();
    let result = ctx.api.list_posts(filter)?;
    print_posts(&result.listed_posts, featured);
    print_messages(&result.messages);
    Ok(())
}

fn handle_mine(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.my_posts()?;
    if !result.listed_posts.is_empty() {
        print_posts(&result.listed_posts, false);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.view_post(id)?;
    if let Some(detail) = &result.post {
        print_post_detail(detail);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_create(
    ctx: &AppContext,
    title: String,
    category: Option<String>,
    image: Option<String>,
    content: Option<String>,
) -> Result<()> {
    let content = match content {
        Some(content) => content,
        None => read_piped_stdin()?,
    };
    let result = ctx.api.create_post(PostDraft {
        title,
        category,
        content,
        image,
    })?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &AppContext, id: &str, edit: PostEdit) -> Result<()> {
    let result = ctx.api.edit_post(id, edit)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_post(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_like(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.toggle_like(id)?;
    print_messages(&result.messages);
    if let Some(view) = result.listed_posts.first() {
        println!("{} like(s)", view.likes);
    }
    Ok(())
}

fn handle_comment_add(ctx: &AppContext, blog_id: &str, text: &str) -> Result<()> {
    let result = ctx.api.add_comment(blog_id, text)?;
    print_comments(&result.comments);
    print_messages(&result.messages);
    Ok(())
}

fn handle_comment_edit(ctx: &AppContext, id: &str, text: &str) -> Result<()> {
    let result = ctx.api.edit_comment(id, text)?;
    print_comments(&result.comments);
    print_messages(&result.messages);
    Ok(())
}

fn handle_comment_delete(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_comment(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.categories()?;
    print_categories(&result.categories);
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    print_config(&ctx.config, &ctx.data_dir);
    Ok(())
}

/// Post body from a pipe. An interactive terminal yields an empty body.
fn read_piped_stdin() -> Result<String> {
    let mut buffer = String::new();
    if !std::io::stdin().is_terminal() {
        std::io::stdin().read_to_string(&mut buffer)?;
    }
    Ok(buffer)
}
