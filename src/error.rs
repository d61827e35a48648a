use thiserror::Error;

/// bpm統一エラー型
#[derive(Debug, Error)]
pub enum BpmError {
    #[error("Invalid option count: {count}. Expected between 1 and 256 options")]
    InvalidOptionCount { count: usize },

    #[error("Invalid option label {0:?}. Labels must not contain control characters")]
    InvalidOptionLabel(String),

    #[error("Terminal unavailable: {0}")]
    TerminalUnavailable(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Draft not found: {0}")]
    DraftNotFound(String),

    #[error("Draft already exists: {0}")]
    DraftExists(String),

    #[error("Post already exists: {0}")]
    PostExists(String),

    #[error("Invalid title: {0}")]
    InvalidTitle(String),

    #[error("Front matter error: {0}")]
    FrontMatter(#[from] serde_yaml::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialize error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BpmError>;
