use std::fmt;
use std::path::PathBuf;
use teloxide::types::ChatId;

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// A required variable is not set.
    Missing(&'static str),
    /// A variable is set but unusable.
    Validation(String),
    /// Log chat id is not an integer.
    InvalidChatId { value: String, source: std::num::ParseIntError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(var) => write!(f, "{} is not set", var),
            Self::Validation(msg) => write!(f, "config validation error: {}", msg),
            Self::InvalidChatId { value, source } => {
                write!(f, "invalid {} '{}': {}", LOG_CHAT_ID_VAR, value, source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidChatId { source, .. } => Some(source),
            Self::Missing(_) | Self::Validation(_) => None,
        }
    }
}

pub const TOKEN_VAR: &str = "TELEGRAM_TOKEN";
pub const LOG_DIR_VAR: &str = "FURIA_LOG_DIR";
pub const LOG_CHAT_ID_VAR: &str = "FURIA_LOG_CHAT_ID";
pub const CONTENT_PATH_VAR: &str = "FURIA_CONTENT_PATH";

pub struct Config {
    pub telegram_token: String,
    /// Directory for the log file.
    pub log_dir: PathBuf,
    /// Chat that receives WARN/ERROR log lines, if any.
    pub log_chat_id: Option<ChatId>,
    /// Replacement for the embedded content table.
    pub content_path: Option<PathBuf>,
}

impl Config {
    /// Read configuration from the process environment, after loading `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let telegram_token = get(TOKEN_VAR).ok_or(ConfigError::Missing(TOKEN_VAR))?;
        // Telegram tokens are formatted as {bot_id}:{secret} where bot_id is numeric
        let valid = match telegram_token.split_once(':') {
            Some((id, secret)) => id.parse::<u64>().is_ok() && !secret.is_empty() && !secret.contains(':'),
            None => false,
        };
        if !valid {
            return Err(ConfigError::Validation(format!(
                "{TOKEN_VAR} appears invalid (expected format: 123456789:ABCdefGHI...)"
            )));
        }

        let log_chat_id = get(LOG_CHAT_ID_VAR)
            .map(|value| match value.parse::<i64>() {
                Ok(id) => Ok(ChatId(id)),
                Err(source) => Err(ConfigError::InvalidChatId { value, source }),
            })
            .transpose()?;

        Ok(Self {
            telegram_token,
            log_dir: get(LOG_DIR_VAR).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("logs")),
            log_chat_id,
            content_path: get(CONTENT_PATH_VAR).map(PathBuf::from),
        })
    }
}
