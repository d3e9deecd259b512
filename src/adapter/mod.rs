//! Implementations of ports (hexagonal adapters).

#[cfg(feature = "telegram")]
pub mod telegram;
