//! Notification behavior configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::store::DEFAULT_COOLDOWN_FILE;

/// Where seed-check reports are delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedReportDelivery {
    /// Post to the shared channel only.
    SharedOnly,
    /// Post to the shared channel and message the user.
    Both,
    /// Message the user only.
    #[default]
    PrivateOnly,
}

/// Notification behavior configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct NotifyConfig {
    /// Echo the received item back to the user after a finished trade.
    #[serde(default)]
    pub return_items: bool,

    /// Egg-roll cooldown duration in seconds.
    ///
    /// Zero disables cooldown recording entirely; enforcement happens at
    /// queue admission, outside this crate.
    #[serde(default)]
    pub egg_roll_cooldown_seconds: u64,

    /// Presence template; the derived status text replaces its `{0}`
    /// placeholder.
    #[serde(default = "default_presence_template")]
    pub presence_template: String,

    /// Seed-report delivery policy.
    #[serde(default)]
    pub seed_report_delivery: SeedReportDelivery,

    /// Backing file for egg-roll cooldown records.
    ///
    /// A second cooldown-bearing trade mode should point its own store
    /// at a different file.
    #[serde(default = "default_cooldown_file")]
    pub cooldown_file: PathBuf,
}

fn default_presence_template() -> String {
    "{0}".to_string()
}

fn default_cooldown_file() -> PathBuf {
    PathBuf::from(DEFAULT_COOLDOWN_FILE)
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            return_items: false,
            egg_roll_cooldown_seconds: 0,
            presence_template: default_presence_template(),
            seed_report_delivery: SeedReportDelivery::default(),
            cooldown_file: default_cooldown_file(),
        }
    }
}
