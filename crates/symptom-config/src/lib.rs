//! Runtime configuration for the symptom API.
//!
//! The only environment option is `GROK_API_KEY`. Its presence selects live
//! mode; absence (or an empty value) selects mock mode. Everything else is
//! fixed, but can be overridden programmatically when embedding the handler
//! or pointing it at a stand-in upstream.
//!
//! ```rust
//! use symptom_config::AppConfig;
//!
//! let config = AppConfig::default()
//!     .with_api_key(Some("xai-test".into()))
//!     .with_api_url("http://localhost:9000/v1/chat/completions");
//!
//! assert!(config.is_live());
//! assert_eq!(config.model, "grok-2");
//! ```

use std::fmt;

/// Environment variable holding the provider credential.
pub const API_KEY_ENV: &str = "GROK_API_KEY";

/// Chat-completion endpoint of the upstream provider.
pub const DEFAULT_API_URL: &str = "https://api.x.ai/v1/chat/completions";

/// Model identifier sent with every upstream request.
pub const DEFAULT_MODEL: &str = "grok-2";

/// Address the HTTP server binds to.
pub const BIND_ADDR: &str = "0.0.0.0:8000";

/// Configuration injected into the analysis handler at construction time.
#[derive(Clone)]
pub struct AppConfig {
    /// Provider credential. `None` means mock mode.
    pub api_key: Option<String>,
    /// Full URL of the chat-completion endpoint.
    pub api_url: String,
    /// Model identifier.
    pub model: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the credential from the process environment.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV).ok();
        if api_key.as_deref() == Some("") {
            tracing::warn!("{} is set but empty; treating as unset", API_KEY_ENV);
        }
        Self::default().with_api_key(api_key)
    }

    /// Sets the credential. Empty strings are treated as absent.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|k| !k.is_empty());
        self
    }

    /// Overrides the chat-completion endpoint.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Overrides the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Returns true if a credential is configured.
    pub fn is_live(&self) -> bool {
        self.api_key.is_some()
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .finish()
    }
}
