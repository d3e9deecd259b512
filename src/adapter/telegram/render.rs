//! Plain-text rendering for Telegram delivery.
//!
//! Messages go out without a parse mode so notification text reaches
//! the user exactly as composed; Markdown-escaping user-controlled
//! nicknames is not worth the lost fidelity.

use crate::domain::UserId;
use crate::port::Panel;

/// Telegram caps the bot short description at this many characters.
const SHORT_DESCRIPTION_LIMIT: usize = 120;

/// Render a panel under its intro line.
pub(super) fn panel_block(intro: &str, panel: &Panel) -> String {
    format!("{intro}\n{}\n{}", panel.title, panel.body)
}

/// Prefix broadcast text with the user it concerns.
pub(super) fn attributed(user: UserId, text: &str) -> String {
    format!("User {}: {text}", user.value())
}

/// Clip presence text to the short-description limit.
pub(super) fn clip_presence(status: &str) -> String {
    if status.chars().count() <= SHORT_DESCRIPTION_LIMIT {
        status.to_string()
    } else {
        status.chars().take(SHORT_DESCRIPTION_LIMIT).collect()
    }
}
