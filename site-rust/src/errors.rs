use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Preference storage error: {0}")]
    Storage(#[source] BoxedError),
    #[error("Language model error: {0}")]
    LanguageModel(#[from] portfolio_sdk::LanguageModelError),
    #[error("Form relay error: {0}")]
    Relay(#[from] portfolio_sdk::RelayError),
}

pub(crate) type BoxedError = Box<dyn std::error::Error + Send + Sync>;

pub type SiteResult<T> = Result<T, SiteError>;
