//! Server configuration, loaded from environment variables at startup.

use crate::services::chatbot::ChatSettings;

/// Placeholder key shipped in sample environments; treated as unset.
const PLACEHOLDER_API_KEY: &str = "MiniChef";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,

    /// `None` when no usable key is configured.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub chat: ChatSettings,

    /// Directory served as the web UI.
    pub static_dir: String,

    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// Emit log records as newline-delimited JSON.
    pub log_json: bool,
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = ChatSettings::default();
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: parse_env("PORT", 5000),
            openai_api_key: usable_key(std::env::var("OPENAI_API_KEY").ok()),
            openai_base_url: env_or("OPENAI_BASE_URL", "https://api.openai.com/v1"),
            chat: ChatSettings {
                model: env_or("OPENAI_MODEL", &defaults.model),
                max_tokens: parse_env("OPENAI_MAX_TOKENS", defaults.max_tokens),
                temperature: parse_env("OPENAI_TEMPERATURE", defaults.temperature),
                history_window: parse_env("CHEF_HISTORY_WINDOW", defaults.history_window),
            },
            static_dir: env_or("CHEF_STATIC_DIR", "public"),
            cors_origins: std::env::var("CHEF_CORS_ORIGINS")
                .map(|v| split_list(&v))
                .unwrap_or_default(),
            log_level: env_or("CHEF_LOG", "info"),
            log_json: std::env::var("CHEF_LOG_JSON")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn usable_key(key: Option<String>) -> Option<String> {
    key.map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty() && k != PLACEHOLDER_API_KEY)
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
