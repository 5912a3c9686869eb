use crate::commands::{fresh_id, CmdMessage, CmdResult};
use crate::error::{BlogError, Result};
use crate::model::User;
use crate::store::backend::KvBackend;
use crate::store::BlogStore;
use chrono::Utc;

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Register a new user and log them in.
pub fn signup<B: KvBackend>(
    store: &BlogStore<B>,
    form: SignupForm,
    min_password_len: usize,
) -> Result<CmdResult> {
    validate(&form, min_password_len)?;

    let users = store.users().all()?;
    if users.iter().any(|u| u.email == form.email) {
        return Err(BlogError::EmailTaken(form.email));
    }

    let user = User::new(
        fresh_id(&users, Utc::now()),
        form.name,
        form.email,
        form.password,
    );
    store.users().save(user.clone())?;
    store.set_current_user(Some(&user))?;
    tracing::info!(user_id = %user.id, "registered user");

    let mut result = CmdResult::default().with_user(user);
    result.add_message(CmdMessage::success("Account created successfully!"));
    Ok(result)
}

pub fn login<B: KvBackend>(store: &BlogStore<B>, email: &str, password: &str) -> Result<CmdResult> {
    let user = store
        .users()
        .all()?
        .into_iter()
        .find(|u| u.email == email && u.password == password)
        .ok_or(BlogError::InvalidCredentials)?;

    store.set_current_user(Some(&user))?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Welcome back, {}!", user.name)));
    Ok(result.with_user(user))
}

pub fn logout<B: KvBackend>(store: &BlogStore<B>) -> Result<CmdResult> {
    let previous = store.current_user()?;
    store.set_current_user(None)?;

    let mut result = CmdResult::default();
    match previous {
        Some(user) => result.add_message(CmdMessage::success(format!("Logged out {}", user.name))),
        None => result.add_message(CmdMessage::info("Not logged in")),
    }
    Ok(result)
}

pub fn whoami<B: KvBackend>(store: &BlogStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.current_user()? {
        Some(user) => result.user = Some(user),
        None => result.add_message(CmdMessage::info("Not logged in")),
    }
    Ok(result)
}

fn validate(form: &SignupForm, min_password_len: usize) -> Result<()> {
    if form.name.trim().is_empty() {
        return Err(BlogError::Validation("Name is required".into()));
    }
    if form.email.trim().is_empty() {
        return Err(BlogError::Validation("Email is required".into()));
    }
    if !looks_like_email(&form.email) {
        return Err(BlogError::Validation("Email is invalid".into()));
    }
    if form.password.is_empty() {
        return Err(BlogError::Validation("Password is required".into()));
    }
    if form.password.chars().count() < min_password_len {
        return Err(BlogError::Validation(format!(
            "Password must be at least {} characters",
            min_password_len
        )));
    }
    if form.password != form.confirm_password {
        return Err(BlogError::Validation("Passwords do not match".into()));
    }
    Ok(())
}

/// Some run of non-space text containing `x@y.z`, each part non-empty.
fn looks_like_email(input: &str) -> bool {
    input.split_whitespace().any(|token| {
        let chars: Vec<char> = token.chars().collect();
        chars.iter().enumerate().any(|(at, c)| {
            *c == '@'
                && at >= 1
                && chars
                    .iter()
                    .enumerate()
                    .any(|(dot, d)| *d == '.' && dot >= at + 2 && dot + 1 < chars.len())
        })
    })
}
