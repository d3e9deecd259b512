//! Telegram message delivery.
//!
//! Provides the [`TelegramMessenger`] that carries notification text,
//! item attachments, and presence updates to Telegram. Spawns a
//! background worker for outbound delivery so every port method stays
//! fire-and-forget.

use teloxide::prelude::*;
use teloxide::types::InputFile;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::config::TelegramAppConfig;
use crate::domain::{TradedItem, UserId};
use crate::port::{Messenger, Panel, PresenceSink};

use super::render::{attributed, clip_presence, panel_block};

/// Settings for the Telegram messenger.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Shared chat that receives broadcast panels.
    pub broadcast_chat_id: i64,
}

impl TelegramConfig {
    /// Build settings from the app config plus the bot token in the
    /// `TELEGRAM_BOT_TOKEN` environment variable.
    ///
    /// Returns `None` when the token is missing; the token never comes
    /// from the config file.
    #[must_use]
    pub fn from_env(app: &TelegramAppConfig) -> Option<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN").ok()?;
        Some(Self {
            bot_token,
            broadcast_chat_id: app.broadcast_chat_id,
        })
    }
}

/// One queued delivery command.
enum Outbound<T> {
    Message {
        chat: ChatId,
        text: String,
    },
    Item {
        chat: ChatId,
        item: T,
        caption: String,
        include_export: bool,
    },
    Presence {
        status: String,
    },
}

/// Telegram messenger that delivers through a background worker.
///
/// Implements [`Messenger`] and [`PresenceSink`]; port methods enqueue
/// into an unbounded channel and return immediately. The spawned worker
/// owns the [`Bot`] and logs delivery failures without retrying.
pub struct TelegramMessenger<T: TradedItem> {
    /// Channel sender for queuing outbound deliveries.
    sender: mpsc::UnboundedSender<Outbound<T>>,
    broadcast_chat: ChatId,
}

impl<T: TradedItem> TelegramMessenger<T> {
    /// Create a new messenger and spawn the background worker.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn new(config: TelegramConfig) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let broadcast_chat = ChatId(config.broadcast_chat_id);

        // Background task owns the bot and performs all delivery.
        tokio::spawn(telegram_worker(config, receiver));

        Self {
            sender,
            broadcast_chat,
        }
    }

    /// A user's private chat shares the user's numeric id.
    fn private_chat(user: UserId) -> ChatId {
        ChatId(user.value() as i64)
    }

    fn push(&self, outbound: Outbound<T>) {
        if self.sender.send(outbound).is_err() {
            warn!("Telegram messenger channel closed");
        }
    }
}

impl<T: TradedItem> Messenger<T> for TelegramMessenger<T> {
    fn send_text(&self, user: UserId, text: String) {
        self.push(Outbound::Message {
            chat: Self::private_chat(user),
            text,
        });
    }

    fn send_item(&self, user: UserId, item: &T, caption: String, include_export: bool) {
        self.push(Outbound::Item {
            chat: Self::private_chat(user),
            item: item.clone(),
            caption,
            include_export,
        });
    }

    fn send_panel(&self, user: UserId, intro: String, panel: Panel) {
        self.push(Outbound::Message {
            chat: Self::private_chat(user),
            text: panel_block(&intro, &panel),
        });
    }

    fn broadcast_panel(&self, user: UserId, intro: String, panel: Panel) {
        self.push(Outbound::Message {
            chat: self.broadcast_chat,
            text: attributed(user, &panel_block(&intro, &panel)),
        });
    }
}

impl<T: TradedItem> PresenceSink for TelegramMessenger<T> {
    fn set_presence(&self, status: String) {
        self.push(Outbound::Presence { status });
    }
}

/// Background worker that performs Telegram delivery.
///
/// Messages go out without a parse mode: notification text must reach
/// the user exactly as composed.
async fn telegram_worker<T: TradedItem>(
    config: TelegramConfig,
    mut receiver: mpsc::UnboundedReceiver<Outbound<T>>,
) {
    let bot = Bot::new(&config.bot_token);

    info!(
        broadcast_chat_id = config.broadcast_chat_id,
        "Telegram messenger started"
    );

    while let Some(outbound) = receiver.recv().await {
        match outbound {
            Outbound::Message { chat, text } => {
                if let Err(e) = bot.send_message(chat, text).await {
                    error!(error = %e, "Failed to send Telegram message");
                }
            }
            Outbound::Item {
                chat,
                item,
                caption,
                include_export,
            } => {
                let document = InputFile::memory(item.to_bytes()).file_name(item.file_name());
                if let Err(e) = bot.send_document(chat, document).caption(caption).await {
                    error!(error = %e, "Failed to send Telegram document");
                }
                if include_export {
                    if let Err(e) = bot.send_message(chat, item.export_text()).await {
                        error!(error = %e, "Failed to send Telegram export text");
                    }
                }
            }
            Outbound::Presence { status } => {
                let status = clip_presence(&status);
                if let Err(e) = bot.set_my_short_description().short_description(status).await {
                    error!(error = %e, "Failed to update Telegram presence");
                }
            }
        }
    }

    warn!("Telegram messenger worker shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize tests that modify environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn app_config(chat_id: i64) -> TelegramAppConfig {
        TelegramAppConfig {
            enabled: true,
            broadcast_chat_id: chat_id,
        }
    }

    #[test]
    fn from_env_missing_token() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var("TELEGRAM_BOT_TOKEN");

        assert!(TelegramConfig::from_env(&app_config(99)).is_none());
    }

    #[test]
    fn from_env_reads_token_and_app_chat_id() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("TELEGRAM_BOT_TOKEN", "test-token");

        let config = TelegramConfig::from_env(&app_config(99)).unwrap();
        assert_eq!(config.bot_token, "test-token");
        assert_eq!(config.broadcast_chat_id, 99);

        std::env::remove_var("TELEGRAM_BOT_TOKEN");
    }
}
