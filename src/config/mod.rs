//! Configuration loading, validation, and logging setup.

mod logging;
mod notify;
mod settings;
mod telegram;

pub use logging::LoggingConfig;
pub use notify::{NotifyConfig, SeedReportDelivery};
pub use settings::Config;
pub use telegram::TelegramAppConfig;
