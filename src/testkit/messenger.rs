//! Recording messenger for delivery assertions.

use parking_lot::Mutex;

use crate::domain::{TradedItem, UserId};
use crate::port::{Messenger, Panel, PresenceSink};

/// One recorded delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Private text message.
    Text { user: UserId, text: String },
    /// Item attachment.
    Item {
        user: UserId,
        file_name: String,
        caption: String,
        include_export: bool,
    },
    /// Private panel.
    Panel {
        user: UserId,
        intro: String,
        title: String,
        body: String,
    },
    /// Shared-channel panel.
    Broadcast {
        user: UserId,
        intro: String,
        title: String,
        body: String,
    },
    /// Presence update.
    Presence { status: String },
}

/// Messenger and presence sink that records everything it is handed.
///
/// Items are recorded by file name rather than by value so the recorder
/// stays item-type-agnostic.
#[derive(Default)]
pub struct RecordingMessenger {
    deliveries: Mutex<Vec<Delivery>>,
}

impl RecordingMessenger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, in delivery order.
    #[must_use]
    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.lock().clone()
    }

    /// Only the private text messages, in delivery order.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.deliveries
            .lock()
            .iter()
            .filter_map(|delivery| match delivery {
                Delivery::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Every presence update, in delivery order.
    #[must_use]
    pub fn presence_history(&self) -> Vec<String> {
        self.deliveries
            .lock()
            .iter()
            .filter_map(|delivery| match delivery {
                Delivery::Presence { status } => Some(status.clone()),
                _ => None,
            })
            .collect()
    }

    /// The most recent presence update.
    #[must_use]
    pub fn last_presence(&self) -> Option<String> {
        self.deliveries.lock().iter().rev().find_map(|delivery| {
            match delivery {
                Delivery::Presence { status } => Some(status.clone()),
                _ => None,
            }
        })
    }

    fn record(&self, delivery: Delivery) {
        self.deliveries.lock().push(delivery);
    }
}

impl<T: TradedItem> Messenger<T> for RecordingMessenger {
    fn send_text(&self, user: UserId, text: String) {
        self.record(Delivery::Text { user, text });
    }

    fn send_item(&self, user: UserId, item: &T, caption: String, include_export: bool) {
        self.record(Delivery::Item {
            user,
            file_name: item.file_name(),
            caption,
            include_export,
        });
    }

    fn send_panel(&self, user: UserId, intro: String, panel: Panel) {
        self.record(Delivery::Panel {
            user,
            intro,
            title: panel.title,
            body: panel.body,
        });
    }

    fn broadcast_panel(&self, user: UserId, intro: String, panel: Panel) {
        self.record(Delivery::Broadcast {
            user,
            intro,
            title: panel.title,
            body: panel.body,
        });
    }
}

impl PresenceSink for RecordingMessenger {
    fn set_presence(&self, status: String) {
        self.record(Delivery::Presence { status });
    }
}
