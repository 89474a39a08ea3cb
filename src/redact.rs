//! Per-layer log filter that drops events mentioning secrets.

use std::sync::LazyLock;

use regex::Regex;
use tracing::field::{Field, Visit};
use tracing::{Event, Metadata};
use tracing_subscriber::layer::{Context, Filter};

static SENSITIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)token|senha|password").expect("valid pattern"));

/// True if the text mentions a credential-like keyword.
pub fn is_sensitive(text: &str) -> bool {
    SENSITIVE.is_match(text)
}

/// Collects an event's fields into one line.
#[derive(Default)]
pub(crate) struct MessageVisitor {
    pub message: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let rest = std::mem::take(&mut self.message);
            self.message = format!("{:?}", value);
            if !rest.is_empty() {
                self.message.push_str(", ");
                self.message.push_str(&rest);
            }
        } else if self.message.is_empty() {
            self.message = format!("{} = {:?}", field.name(), value);
        } else {
            self.message
                .push_str(&format!(", {} = {:?}", field.name(), value));
        }
    }
}

/// Suppresses any event whose fields mention `token`, `senha` or `password`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedactSecrets;

impl<S> Filter<S> for RedactSecrets {
    fn enabled(&self, _meta: &Metadata<'_>, _cx: &Context<'_, S>) -> bool {
        true
    }

    fn event_enabled(&self, event: &Event<'_>, _cx: &Context<'_, S>) -> bool {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        !is_sensitive(&visitor.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::{Subscriber, info, warn};
    use tracing_subscriber::Layer;
    use tracing_subscriber::prelude::*;

    struct CountEvents(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for CountEvents {
        fn on_event(&self, _event: &Event<'_>, _ctx: Context<'_, S>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_keywords() {
        assert!(is_sensitive("loaded TELEGRAM_TOKEN"));
        assert!(is_sensitive("Senha incorreta"));
        assert!(is_sensitive("password=hunter2"));
        assert!(!is_sensitive("Sending reply to chat 42"));
    }

    #[test]
    fn test_filter_drops_sensitive_events() {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry()
            .with(CountEvents(count.clone()).with_filter(RedactSecrets));

        tracing::subscriber::with_default(subscriber, || {
            info!("bot started");
            warn!("request failed with token 123:abc");
            info!(secret = "token", "field values are checked too");
            info!(chat = 42, "reply delivered");
        });

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
