//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! - [`TestItem`] — traded item with settable species, egg flag, and
//!   nickname.
//! - [`RecordingMessenger`] — records every delivery and presence
//!   update for assertions.
//! - [`StaticQueue`] — queue stub with a settable length.

mod item;
mod messenger;
mod queue;

pub use item::TestItem;
pub use messenger::{Delivery, RecordingMessenger};
pub use queue::StaticQueue;
