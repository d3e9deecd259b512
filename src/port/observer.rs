//! Lifecycle observer port: the contract the automation engine drives.

use crate::domain::{CancelReason, NotificationSummary, TradeSession, TradedItem};

/// Observer of trade session lifecycle events.
///
/// The automation engine calls these as a session advances; each call
/// carries the session plus whatever the event produced. All methods are
/// fire-and-forget: they must return quickly, never panic, and keep
/// internal failures to themselves.
pub trait TradeObserver<T: TradedItem>: Send + Sync {
    /// The session is being set up; `offered` is what the bot will hand
    /// over.
    fn on_initialize(&self, session: &TradeSession, offered: &T);

    /// The bot is now searching for the partner under `in_game_name`.
    fn on_searching(&self, session: &TradeSession, in_game_name: &str);

    /// The session ended without completing.
    fn on_canceled(&self, session: &TradeSession, reason: CancelReason);

    /// The trade completed; `received` is what the partner gave back.
    fn on_finished(&self, session: &TradeSession, offered: &T, received: &T);

    /// Free-form progress text from a mid-trade checkpoint.
    fn notify_text(&self, session: &TradeSession, text: &str);

    /// Structured progress report from a mid-trade checkpoint.
    fn notify_summary(&self, session: &TradeSession, summary: &NotificationSummary);

    /// An item surfaced mid-trade (dump and clone flows), with
    /// accompanying text.
    fn notify_item(&self, session: &TradeSession, received: &T, text: &str);
}
