//! File-backed persistence.

mod cooldown;

pub use cooldown::{CooldownStore, DEFAULT_COOLDOWN_FILE};
