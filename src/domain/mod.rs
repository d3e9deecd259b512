//! Engine-agnostic trade domain types.

mod id;
mod item;
mod session;
mod summary;

// Identifiers
pub use id::{LinkCode, SessionId, UserId};

// Sessions and items
pub use item::TradedItem;
pub use session::{CancelReason, TradeMode, TradeSession};

// Notification payloads
pub use summary::{NotificationSummary, SeedReport, SummaryField, TextSummary};
