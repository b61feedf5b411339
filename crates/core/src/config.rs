//! Startup configuration for seedhe-cmd.
//!
//! This module resolves the Gemini API key, model and endpoint from the
//! environment, optionally after loading a `.env` file.

use std::env;

use log::{debug, info};

use crate::error::{Error, Result};

/// Environment variable holding the Gemini API key
pub const API_KEY_VARIABLE: &str = "GOOGLE_GEMINI_API_KEY";
/// Environment variable overriding the Gemini model
pub const MODEL_VARIABLE: &str = "SEEDHE_GEMINI_MODEL";
/// Environment variable overriding the Gemini API base URL
pub const BASE_URL_VARIABLE: &str = "SEEDHE_GEMINI_BASE_URL";

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
/// Gemini API base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Everything the oracle needs to reach the completion endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct OracleConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl std::fmt::Debug for OracleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl OracleConfig {
    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`] if the API key variable is unset or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = non_empty(API_KEY_VARIABLE)
            .ok_or_else(|| Error::missing_api_key(API_KEY_VARIABLE))?;

        Ok(Self {
            api_key,
            model: non_empty(MODEL_VARIABLE).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: non_empty(BASE_URL_VARIABLE)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`] if the API key is not set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Replaces the model, if one is given.
    #[must_use]
    pub fn with_model(mut self, model: Option<String>) -> Self {
        if let Some(model) = model {
            self.model = model;
        }
        self
    }

    /// Replaces the base URL, if one is given. A trailing slash is dropped.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url.trim_end_matches('/').to_string();
        }
        self
    }
}

/// Loads variables from a `.env` file into the process environment.
///
/// With an explicit path (which may start with `~`) the file must exist. Without
/// one, a `.env` in the current directory or any parent is used if present.
/// Variables already set in the environment are never overwritten.
///
/// # Errors
///
/// Returns [`Error::EnvFile`] if an explicitly given file cannot be loaded.
pub fn load_env_file(env_file_arg: &Option<String>) -> Result<()> {
    match env_file_arg {
        Some(env_file) => {
            let path = shellexpand::tilde(env_file).to_string();
            dotenvy::from_path(&path).map_err(|e| Error::env_file(path.clone(), e))?;
            info!("Loaded environment from `{}`", path);
        }
        None => match dotenvy::dotenv() {
            Ok(path) => info!("Loaded environment from `{}`", path.display()),
            Err(e) => debug!("No .env file loaded: {}", e),
        },
    }

    Ok(())
}
