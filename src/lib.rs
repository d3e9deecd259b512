//! Tradeherald - Lifecycle notification layer for automated link-trade bots.
//!
//! An automation engine drives trade sessions against remote
//! counterparties; this crate informs the initiating user of every state
//! change, formats outcome messages, keeps the global presence string in
//! step with the queue, and records per-user cooldown timestamps for the
//! egg-roll giveaway mode.
//!
//! # Architecture
//!
//! Hexagonal: the engine calls the [`TradeObserver`](port::TradeObserver)
//! port, implemented by [`TradeDispatcher`](notify::TradeDispatcher),
//! which fans out through the [`Messenger`](port::Messenger) and
//! [`PresenceSink`](port::PresenceSink) ports. Both stay generic over
//! the [`TradedItem`](domain::TradedItem) the engine trades in.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Sessions, items, identifiers, notification payloads
//! - [`error`] - Error types for the crate
//! - [`port`] - Trait boundaries: messenger, queue, lifecycle observer
//! - [`notify`] - Dispatcher, outcome formatting, presence derivation
//! - [`store`] - File-backed cooldown bookkeeping
//! - [`adapter`] - Telegram delivery (requires `telegram` feature)
//!
//! # Features
//!
//! - `telegram` - Telegram delivery adapter via teloxide (default)
//! - `testkit` - Expose the test doubles to integration tests
//!
//! # Example
//!
//! ```no_run
//! use tradeherald::config::Config;
//! use tradeherald::store::CooldownStore;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("tradeherald.toml")?;
//!     config.init_logging();
//!     let _cooldowns = CooldownStore::new(&config.notify.cooldown_file);
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod config;
pub mod domain;
pub mod error;
pub mod notify;
pub mod port;
pub mod store;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
