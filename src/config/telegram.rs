//! Telegram messenger configuration.

use serde::Deserialize;

/// Telegram messenger configuration.
///
/// The bot token is read from the `TELEGRAM_BOT_TOKEN` environment
/// variable, never from the config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramAppConfig {
    /// Enable Telegram delivery.
    #[serde(default)]
    pub enabled: bool,
    /// Shared chat that receives broadcast seed reports.
    ///
    /// Required (non-zero) when `enabled` is set.
    #[serde(default)]
    pub broadcast_chat_id: i64,
}
