use std::time::Duration;

/// Primary credential variable; checked before [`FALLBACK_KEY_ENV`].
pub const API_KEY_ENV: &str = "API_KEY";
pub const FALLBACK_KEY_ENV: &str = "ALGOVIZ_TUTOR_API_KEY";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorConfig {
    pub api_key: Option<String>,
    pub model: String,
    /// Base URL; the model name and method are appended per request.
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl TutorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            api_key: non_empty(API_KEY_ENV).or_else(|| non_empty(FALLBACK_KEY_ENV)),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}
