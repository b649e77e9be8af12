use thiserror::Error;

/// Errors raised by a translation provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request error")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error")]
    Json(#[from] serde_json::Error),

    #[error("API Error: {0}")]
    Api(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Provider error: {0}")]
    Other(String),
}

/// Errors returned by `TranslationService`.
#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Translation service failure")]
    ServiceFailure(#[source] ProviderError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize config")]
    Serialize(#[from] toml::ser::Error),

    #[error("Cannot determine config directory")]
    NoConfigDir,
}

/// Join an error and its `source()` chain into one line.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
