//! Telegram delivery adapter.
//!
//! Implements the [`Messenger`](crate::port::Messenger) and
//! [`PresenceSink`](crate::port::PresenceSink) ports over the Telegram
//! Bot API. Requires the `telegram` feature.

mod messenger;
mod render;

pub use messenger::{TelegramConfig, TelegramMessenger};
