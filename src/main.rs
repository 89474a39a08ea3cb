use teloxide::prelude::*;
use tracing::{error, info};
use tracing_subscriber::prelude::*;

use furiabot::bot;
use furiabot::config::Config;
use furiabot::content::ContentStore;
use furiabot::redact::RedactSecrets;
use furiabot::telegram_log::{self, TelegramLogLayer};

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Fatal: {e}");
            std::process::exit(1);
        }
    };

    let bot = Bot::new(&config.telegram_token);

    // Setup logging
    std::fs::create_dir_all(&config.log_dir).ok();
    let log_file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_dir.join("furiabot.log"))
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Fatal: failed to open log file in {}: {e}", config.log_dir.display());
            std::process::exit(1);
        }
    };
    let (non_blocking, guard) = tracing_appender::non_blocking(log_file);

    let env_filter = || {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into())
    };

    let registry = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_filter(RedactSecrets)
                .with_filter(env_filter()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(RedactSecrets)
                .with_filter(env_filter()),
        );

    if let Some(log_chat_id) = config.log_chat_id {
        let tg_layer = TelegramLogLayer::new(bot.clone(), log_chat_id)
            .with_filter(RedactSecrets)
            .with_filter(telegram_log::MAX_LEVEL);
        registry.with(tg_layer).init();
    } else {
        registry.init();
    }

    info!("🐆 Starting furiabot...");

    let store = match &config.content_path {
        Some(path) => ContentStore::load(path),
        None => ContentStore::embedded(),
    };
    let store = match store {
        Ok(store) => store,
        Err(e) => {
            error!("Fatal: {e}");
            drop(guard);
            std::process::exit(1);
        }
    };
    if let Some(path) = &config.content_path {
        info!("Loaded content from {}", path.display());
    }

    bot::run(bot::throttled(bot), store).await;

    info!("👋 furiabot stopped");
    drop(guard);
}
