use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing Google Gemini API key. Set {} in your .env file.", .variable)]
    MissingApiKey { variable: String },

    #[error("Error loading env file at `{}`: {}", .path, .original)]
    EnvFile {
        path: String,
        original: dotenvy::Error,
    },

    #[error("No cheatsheet found for: {}", _0)]
    TopicNotFound(String),

    #[error("Unknown operation: {}", _0)]
    UnknownOperation(String),

    #[error("Input stream was closed")]
    InputClosed,

    #[error("Failed to copy to clipboard: {}", _0)]
    Clipboard(String),

    #[error("Failed to connect to AI: {}", _0)]
    OracleUnavailable(String),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn missing_api_key(variable: &str) -> Self {
        Self::MissingApiKey {
            variable: variable.to_string(),
        }
    }

    pub fn env_file(path: String, original: dotenvy::Error) -> Self {
        Self::EnvFile { path, original }
    }

    /// Whether the session can carry on after reporting this error.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::TopicNotFound(_)
                | Self::UnknownOperation(_)
                | Self::Clipboard(_)
                | Self::OracleUnavailable(_)
        )
    }
}
