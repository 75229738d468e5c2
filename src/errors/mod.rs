use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    // Metadata repository errors
    #[error("Metadata repository sync failed: {0}")]
    RepoSync(String),

    #[error("News item not found: {0}")]
    NewsItemNotFound(String),

    // Storage errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    // Output errors
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // User input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type NewsResult<T> = Result<T, NewsError>;
