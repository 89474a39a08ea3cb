//! FURIA fan bot: canned answers about the team's rosters, schedule,
//! results and news over Telegram.

pub mod bot;
pub mod config;
pub mod content;
pub mod markup;
pub mod redact;
pub mod telegram_log;
