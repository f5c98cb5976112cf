use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarqueeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Every gateway failure (transport, status, body) collapses into this one.
    #[error("Failed to fetch movies")]
    SearchFailed,

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, MarqueeError>;
