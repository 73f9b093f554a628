use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmbedError {
    /// The host user directory has no entry for this id.
    #[error("User not cached: {0}")]
    UserNotCached(String),

    #[error("Unknown direction: {0}")]
    UnknownDirection(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EmbedResult<T> = Result<T, EmbedError>;
