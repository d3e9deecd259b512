//! Core notification services built on the ports.

mod dispatcher;
mod outcome;
mod presence;

pub use dispatcher::{FinishHook, TradeDispatcher};
pub use outcome::{outcome_message, summary_line};
pub use presence::{PresencePhase, PresenceUpdater};
