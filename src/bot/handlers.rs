//! Update handlers and the delivery seam.
//!
//! Endpoints never return an error to the dispatcher. A failed reply is
//! logged and answered with one plain apology; a failed apology is logged
//! and dropped.

use std::future::Future;
use std::sync::Arc;

use teloxide::dispatching::{HandlerExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::{LinkPreviewOptions, MessageId, ParseMode};
use teloxide::{ApiError, RequestError};
use tracing::{debug, error, info, warn};

use crate::content::ContentStore;

use super::FuriaBot;
use super::commands::Command;
use super::keyboard::{self, Trigger};
use super::pick::{Pick, RandomPick};
use super::router::{self, Reply};

/// Sent when a reply could not be delivered.
pub const APOLOGY: &str = "⚠️ Ocorreu um erro inesperado. Tente novamente mais tarde.";

pub struct BotState {
    pub store: ContentStore,
}

/// Where replies go. Implemented over teloxide in production and recorded in tests.
pub trait Outbox {
    /// Send a new MarkdownV2 message with the reply's keyboard.
    fn send(&self, chat: ChatId, reply: &Reply) -> impl Future<Output = Result<(), RequestError>> + Send;

    /// Replace the text and keyboard of an existing message.
    fn edit(
        &self,
        chat: ChatId,
        message: MessageId,
        reply: &Reply,
    ) -> impl Future<Output = Result<(), RequestError>> + Send;

    /// Send unformatted text without a keyboard.
    fn send_plain(&self, chat: ChatId, text: &str) -> impl Future<Output = Result<(), RequestError>> + Send;
}

pub struct TelegramOutbox {
    bot: FuriaBot,
}

impl TelegramOutbox {
    pub fn new(bot: FuriaBot) -> Self {
        Self { bot }
    }
}

fn no_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

impl Outbox for TelegramOutbox {
    async fn send(&self, chat: ChatId, reply: &Reply) -> Result<(), RequestError> {
        self.bot
            .send_message(chat, reply.text.clone())
            .parse_mode(ParseMode::MarkdownV2)
            .link_preview_options(no_preview())
            .reply_markup(keyboard::markup(reply.screen))
            .await?;
        Ok(())
    }

    async fn edit(&self, chat: ChatId, message: MessageId, reply: &Reply) -> Result<(), RequestError> {
        let result = self
            .bot
            .edit_message_text(chat, message, reply.text.clone())
            .parse_mode(ParseMode::MarkdownV2)
            .link_preview_options(no_preview())
            .reply_markup(keyboard::markup(reply.screen))
            .await;
        settle_edit(result.map(|_| ()), chat, message)
    }

    async fn send_plain(&self, chat: ChatId, text: &str) -> Result<(), RequestError> {
        self.bot.send_message(chat, text.to_string()).await?;
        Ok(())
    }
}

/// A repeated button press leaves the message unchanged; that is not a failure.
pub(crate) fn settle_edit(result: Result<(), RequestError>, chat: ChatId, message: MessageId) -> Result<(), RequestError> {
    match result {
        Err(RequestError::Api(ApiError::MessageNotModified)) => {
            debug!("Message {} in chat {} not modified", message.0, chat);
            Ok(())
        }
        other => other,
    }
}

async fn deliver_or_apologize<O: Outbox>(outbox: &O, chat: ChatId, what: &str, result: Result<(), RequestError>) {
    let Err(e) = result else {
        return;
    };
    error!("Failed to deliver {what} to chat {chat}: {e}");
    if let Err(e) = outbox.send_plain(chat, APOLOGY).await {
        error!("Failed to send apology to chat {chat}: {e}");
    }
}

pub async fn on_command<O: Outbox, P: Pick>(
    outbox: &O,
    store: &ContentStore,
    chat: ChatId,
    command: Command,
    pick: &mut P,
) {
    let reply = match command {
        Command::Start => router::welcome(store, pick),
        Command::Help => router::help(),
    };
    let result = outbox.send(chat, &reply).await;
    deliver_or_apologize(outbox, chat, "command reply", result).await;
}

pub async fn on_text<O: Outbox, P: Pick>(outbox: &O, store: &ContentStore, chat: ChatId, text: &str, pick: &mut P) {
    let reply = router::reply_to_text(text, store, pick);
    let result = outbox.send(chat, &reply).await;
    deliver_or_apologize(outbox, chat, "text reply", result).await;
}

/// Button presses edit the message that carried the keyboard. `target` is
/// `None` when Telegram no longer gives the bot access to that message.
pub async fn on_button<O: Outbox, P: Pick>(
    outbox: &O,
    store: &ContentStore,
    target: Option<(ChatId, MessageId)>,
    data: &str,
    pick: &mut P,
) {
    let Some((chat, message)) = target else {
        warn!("Ignoring button {:?} on a message the bot can no longer access", data);
        return;
    };
    let Some(trigger) = Trigger::parse(data) else {
        warn!("Ignoring unknown button {:?} in chat {}", data, chat);
        return;
    };
    let reply = router::reply_to_trigger(trigger, store, pick);
    let result = outbox.edit(chat, message, &reply).await;
    deliver_or_apologize(outbox, chat, "button reply", result).await;
}

async fn handle_command(bot: FuriaBot, msg: Message, cmd: Command, state: Arc<BotState>) -> ResponseResult<()> {
    info!("📨 {:?} in chat {}", cmd, msg.chat.id);
    let outbox = TelegramOutbox::new(bot);
    on_command(&outbox, &state.store, msg.chat.id, cmd, &mut RandomPick).await;
    Ok(())
}

async fn handle_text(bot: FuriaBot, msg: Message, state: Arc<BotState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    if text.starts_with('/') {
        debug!("Ignoring unknown command in chat {}", msg.chat.id);
        return Ok(());
    }

    let text_preview: String = text.chars().take(100).collect();
    info!("💬 Chat {}: \"{text_preview}\"", msg.chat.id);

    let outbox = TelegramOutbox::new(bot);
    on_text(&outbox, &state.store, msg.chat.id, text, &mut RandomPick).await;
    Ok(())
}

async fn handle_callback(bot: FuriaBot, q: CallbackQuery, state: Arc<BotState>) -> ResponseResult<()> {
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        warn!("Failed to answer callback query: {e}");
    }

    let target = q.regular_message().map(|m| (m.chat.id, m.id));
    let data = q.data.as_deref().unwrap_or_default();
    info!("🔘 Button {:?} from user {}", data, q.from.id);

    let outbox = TelegramOutbox::new(bot);
    on_button(&outbox, &state.store, target, data, &mut RandomPick).await;
    Ok(())
}

pub fn schema() -> UpdateHandler<RequestError> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(Update::filter_message().endpoint(handle_text))
        .branch(Update::filter_callback_query().endpoint(handle_callback))
}
