use thiserror::Error;

pub const NOT_CONFIGURED_MESSAGE: &str =
    "OpenAI API key is not configured. Please set OPENAI_API_KEY in your environment variables.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("{}", NOT_CONFIGURED_MESSAGE)]
    NotConfigured,
    #[error("{prefix}: {message}")]
    Upstream { prefix: &'static str, message: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
