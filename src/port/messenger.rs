//! Messenger port for outbound chat delivery.
//!
//! This module defines the traits adapters implement to carry
//! notification text, item attachments, and presence updates to a chat
//! platform.

use crate::domain::{TradedItem, UserId};

/// Rich-content block with a title line and a body.
///
/// Rendered by adapters in whatever form the platform supports; the
/// plain-text fallback is `title` followed by `body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    /// Title line.
    pub title: String,
    /// Body text, possibly multi-line.
    pub body: String,
}

impl Panel {
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Trait for outbound message delivery.
///
/// Implement this trait to connect the dispatcher to a chat platform.
/// Deliveries are fire-and-forget (async but not awaited).
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - Methods should not block or perform slow I/O synchronously
/// - Consider enqueueing into a spawned async task for slow operations
/// - Delivery failures are the implementation's to log, never to surface
pub trait Messenger<T: TradedItem>: Send + Sync {
    /// Send plain text to the user's private channel.
    fn send_text(&self, user: UserId, text: String);

    /// Send an item as a file attachment with a caption.
    ///
    /// When `include_export` is set, the item's portable text form
    /// follows the attachment.
    fn send_item(&self, user: UserId, item: &T, caption: String, include_export: bool);

    /// Send a rich-content panel to the user's private channel.
    fn send_panel(&self, user: UserId, intro: String, panel: Panel);

    /// Post a rich-content panel to the shared channel, attributed to
    /// `user`.
    fn broadcast_panel(&self, user: UserId, intro: String, panel: Panel);
}

/// Trait for presence/status publication.
///
/// The presence string is global and last-writer-wins; implementations
/// overwrite whatever was shown before.
pub trait PresenceSink: Send + Sync {
    /// Replace the currently displayed presence text.
    fn set_presence(&self, status: String);
}

/// A no-op messenger for testing or when delivery is disabled.
pub struct NullMessenger;

impl<T: TradedItem> Messenger<T> for NullMessenger {
    fn send_text(&self, _user: UserId, _text: String) {}
    fn send_item(&self, _user: UserId, _item: &T, _caption: String, _include_export: bool) {}
    fn send_panel(&self, _user: UserId, _intro: String, _panel: Panel) {}
    fn broadcast_panel(&self, _user: UserId, _intro: String, _panel: Panel) {}
}

impl PresenceSink for NullMessenger {
    fn set_presence(&self, _status: String) {}
}

/// A logging messenger that writes deliveries via tracing.
pub struct LogMessenger;

impl<T: TradedItem> Messenger<T> for LogMessenger {
    fn send_text(&self, user: UserId, text: String) {
        tracing::info!(user = user.value(), text = %text, "Message");
    }

    fn send_item(&self, user: UserId, item: &T, caption: String, include_export: bool) {
        tracing::info!(
            user = user.value(),
            file = %item.file_name(),
            caption = %caption,
            include_export,
            "Item attachment"
        );
    }

    fn send_panel(&self, user: UserId, intro: String, panel: Panel) {
        tracing::info!(
            user = user.value(),
            intro = %intro,
            title = %panel.title,
            "Panel"
        );
    }

    fn broadcast_panel(&self, user: UserId, intro: String, panel: Panel) {
        tracing::info!(
            user = user.value(),
            intro = %intro,
            title = %panel.title,
            "Broadcast panel"
        );
    }
}

impl PresenceSink for LogMessenger {
    fn set_presence(&self, status: String) {
        tracing::info!(status = %status, "Presence");
    }
}
