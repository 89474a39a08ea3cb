//! Bot module - keyword/button router over the content store, served with teloxide.

pub mod commands;
pub mod handlers;
pub mod keyboard;
pub mod pick;
pub mod render;
pub mod router;


use std::sync::Arc;

use teloxide::adaptors::Throttle;
use teloxide::adaptors::throttle::Limits;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::requests::RequesterExt;
use teloxide::update_listeners::Polling;
use teloxide::utils::command::BotCommands;
use tracing::{info, warn};

use crate::content::ContentStore;

pub use commands::Command;
pub use handlers::{BotState, Outbox, TelegramOutbox};
pub use keyboard::{Category, Screen, Trigger};
pub use pick::{FixedPick, Pick, RandomPick};
pub use router::{Intent, Reply};

/// Bot with Telegram's send limits applied.
pub type FuriaBot = Throttle<Bot>;

pub fn throttled(bot: Bot) -> FuriaBot {
    bot.throttle(Limits::default())
}

/// Long polling that skips updates queued while the bot was down.
pub fn polling(bot: FuriaBot) -> Polling<FuriaBot> {
    Polling::builder(bot).drop_pending_updates().build()
}

/// Register commands and serve updates until Ctrl-C.
pub async fn run(bot: FuriaBot, store: ContentStore) {
    match bot.set_my_commands(Command::bot_commands()).await {
        Ok(_) => info!("Registered bot commands"),
        Err(e) => warn!("Failed to register bot commands: {e}"),
    }

    let state = Arc::new(BotState { store });

    let listener = polling(bot.clone());

    Dispatcher::builder(bot, handlers::schema())
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;
}
