use teloxide::prelude::*;
use teloxide::types::ChatId;
use tokio::sync::mpsc;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;

use crate::redact::MessageVisitor;

/// Telegram caps messages at 4096 chars; leave room for the prefix.
const MAX_LOG_CHARS: usize = 4000;

/// Most verbose level worth sending to the operator chat.
pub const MAX_LEVEL: LevelFilter = LevelFilter::WARN;

/// Forwards WARN and ERROR events to an operator chat.
pub struct TelegramLogLayer {
    tx: mpsc::UnboundedSender<String>,
}

impl TelegramLogLayer {
    /// Must be called inside a tokio runtime; spawns the sender task.
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();

        tokio::spawn(async move {
            while let Some(text) = rx.recv().await {
                if let Err(e) = bot.send_message(chat_id, text).await {
                    eprintln!("Failed to send log to Telegram: {e}");
                }
            }
        });

        Self { tx }
    }
}

/// Chat prefix for a forwarded event, or `None` if the level stays local.
fn prefix(level: Level) -> Option<&'static str> {
    match level {
        Level::ERROR => Some("❌"),
        Level::WARN => Some("⚠️"),
        _ => None,
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() > MAX_LOG_CHARS {
        let truncated: String = text.chars().take(MAX_LOG_CHARS).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

impl<S: Subscriber> Layer<S> for TelegramLogLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let Some(prefix) = prefix(*event.metadata().level()) else {
            return;
        };

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let line = truncate(&format!("{prefix} {}", visitor.message));

        if self.tx.send(line).is_err() {
            eprintln!("Log channel closed, message dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_warn_and_error_forwarded() {
        assert_eq!(prefix(Level::ERROR), Some("❌"));
        assert_eq!(prefix(Level::WARN), Some("⚠️"));
        assert_eq!(prefix(Level::INFO), None);
        assert_eq!(prefix(Level::DEBUG), None);
        assert_eq!(prefix(Level::TRACE), None);
    }

    #[test]
    fn test_prefix_agrees_with_max_level() {
        for level in [Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE] {
            assert_eq!(prefix(level).is_some(), MAX_LEVEL >= level, "{level}");
        }
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("⚠️ slow reply"), "⚠️ slow reply");
    }

    #[test]
    fn test_truncate_long_text() {
        let long = "é".repeat(MAX_LOG_CHARS + 10);
        let out = truncate(&long);
        assert!(out.ends_with("..."));
        assert_eq!(out.chars().count(), MAX_LOG_CHARS + 3);
    }
}
