use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("Blog not found: {0}")]
    BlogNotFound(String),

    #[error("Comment not found: {0}")]
    CommentNotFound(String),

    #[error("You must be logged in to {0}")]
    NotLoggedIn(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("Email already registered: {0}")]
    EmailTaken(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("{0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BlogError>;
