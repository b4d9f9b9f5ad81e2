//! # Roster Notify
//!
//! Fire-and-forget notification delivery through the Telegram bot API.
//!
//! The bot token is held in a runtime-replaceable cell: it may be seeded
//! from the environment or saved later through the HTTP surface. A
//! notifier without a token silently skips sends, so an unconfigured
//! deployment still serves the record collection.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod telegram;

pub use telegram::{NotifierConfig, TelegramNotifier};
