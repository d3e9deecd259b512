//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with external
//! systems (chat platforms, the trade queue, the automation engine).
//!
//! # Available Ports
//!
//! - [`Messenger`], [`PresenceSink`] - Chat platform delivery (Telegram, logging, etc.)
//! - [`QueueInfo`] - Pending-queue size for presence text
//! - [`TradeObserver`] - Lifecycle contract the automation engine calls

mod messenger;
mod observer;
mod queue;

// Messaging ports
pub use messenger::{LogMessenger, Messenger, NullMessenger, Panel, PresenceSink};

// Lifecycle observer port
pub use observer::TradeObserver;

// Queue port
pub use queue::QueueInfo;
