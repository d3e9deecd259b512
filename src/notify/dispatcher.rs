//! Lifecycle dispatcher: turns engine callbacks into user-facing
//! messages, presence updates, and cooldown bookkeeping.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::warn;

use crate::config::{NotifyConfig, SeedReportDelivery};
use crate::domain::{
    CancelReason, NotificationSummary, SeedReport, SessionId, TradeMode, TradeSession, TradedItem,
};
use crate::notify::outcome::{outcome_message, summary_line};
use crate::notify::presence::{PresencePhase, PresenceUpdater};
use crate::port::{Messenger, Panel, PresenceSink, QueueInfo, TradeObserver};
use crate::store::CooldownStore;

/// Callback run once when a session reaches a terminal state.
///
/// Registered per session by the automation engine, which uses it to
/// release per-agent state. `Sync` because the hook sits in the shared
/// registry until it fires.
pub type FinishHook = Box<dyn FnOnce() + Send + Sync>;

/// The lifecycle observer wired to real collaborators.
///
/// One dispatcher serves every session; the engine calls it from
/// whatever context runs each session concurrently. Every operation is
/// fire-and-forget: delivery is handed to the [`Messenger`] without
/// waiting, and internal failures are logged and swallowed so the
/// engine never sees an error from here.
pub struct TradeDispatcher<T: TradedItem> {
    messenger: Arc<dyn Messenger<T>>,
    queue: Arc<dyn QueueInfo>,
    presence: PresenceUpdater,
    config: NotifyConfig,
    cooldowns: Arc<CooldownStore>,
    finish_hooks: DashMap<SessionId, FinishHook>,
}

impl<T: TradedItem> TradeDispatcher<T> {
    /// Wire a dispatcher to its collaborators.
    ///
    /// Adapters that carry both messages and presence (the Telegram
    /// adapter does) are passed twice, once under each trait.
    pub fn new(
        messenger: Arc<dyn Messenger<T>>,
        presence_sink: Arc<dyn PresenceSink>,
        queue: Arc<dyn QueueInfo>,
        config: NotifyConfig,
        cooldowns: Arc<CooldownStore>,
    ) -> Self {
        let presence = PresenceUpdater::new(presence_sink, config.presence_template.clone());
        Self {
            messenger,
            queue,
            presence,
            config,
            cooldowns,
            finish_hooks: DashMap::new(),
        }
    }

    /// Register the terminal-state callback for `session`.
    ///
    /// Registering again replaces the previous hook. The hook runs at
    /// most once, at the first of cancel or finish.
    pub fn set_finish_hook(&self, session: SessionId, hook: impl FnOnce() + Send + Sync + 'static) {
        self.finish_hooks.insert(session, Box::new(hook));
    }

    fn run_finish_hook(&self, session: SessionId) {
        if let Some((_, hook)) = self.finish_hooks.remove(&session) {
            hook();
        }
    }

    fn deliver_seed_report(&self, session: &TradeSession, report: &SeedReport) {
        let intro = format!("Here's your seed details for `{:016X}`:", report.seed);
        let body = report
            .fields
            .iter()
            .map(|field| format!("{}: {}", field.heading, field.detail))
            .collect::<Vec<_>>()
            .join("\n");
        let panel = Panel::new(format!("Seed: {:016X}", report.seed), body);
        match self.config.seed_report_delivery {
            SeedReportDelivery::SharedOnly => {
                self.messenger.broadcast_panel(session.user, intro, panel);
            }
            SeedReportDelivery::Both => {
                self.messenger
                    .broadcast_panel(session.user, intro.clone(), panel.clone());
                self.messenger.send_panel(session.user, intro, panel);
            }
            SeedReportDelivery::PrivateOnly => {
                self.messenger.send_panel(session.user, intro, panel);
            }
        }
    }
}

impl<T: TradedItem> TradeObserver<T> for TradeDispatcher<T> {
    fn on_initialize(&self, session: &TradeSession, offered: &T) {
        let receive = if offered.species_id() == 0 {
            String::new()
        } else {
            format!(" ({})", offered.nickname())
        };
        self.messenger.send_text(
            session.user,
            format!(
                "Initializing trade{receive}. Please be ready. Your code is **{}**.",
                session.code
            ),
        );
    }

    fn on_searching(&self, session: &TradeSession, in_game_name: &str) {
        let trainer = if session.trainer_name.is_empty() {
            String::new()
        } else {
            format!(", {}", session.trainer_name)
        };
        self.messenger.send_text(
            session.user,
            format!(
                "I'm waiting for you{trainer}! Your code is **{}**. My IGN is **{in_game_name}**.",
                session.code
            ),
        );
        self.presence
            .update(self.queue.len(), session.id, PresencePhase::Searching);
    }

    fn on_canceled(&self, session: &TradeSession, reason: CancelReason) {
        self.run_finish_hook(session.id);
        self.messenger
            .send_text(session.user, format!("Trade canceled: {reason}"));
        // Queue length read after the session left the queue.
        self.presence
            .update(self.queue.len(), session.id, PresencePhase::Completed);
    }

    fn on_finished(&self, session: &TradeSession, offered: &T, received: &T) {
        self.run_finish_hook(session.id);
        self.presence
            .update(self.queue.len(), session.id, PresencePhase::Completed);
        self.messenger
            .send_text(session.user, outcome_message(session.mode, offered, received));
        if self.config.return_items && received.species_id() != 0 {
            self.messenger.send_item(
                session.user,
                received,
                "Here's what you traded me!".to_string(),
                true,
            );
        }
        if session.mode == TradeMode::EggRoll && self.config.egg_roll_cooldown_seconds > 0 {
            if let Err(e) = self.cooldowns.record_use(session.user) {
                warn!(user = session.user.value(), error = %e, "Failed to record cooldown use");
            }
        }
    }

    fn notify_text(&self, session: &TradeSession, text: &str) {
        self.messenger.send_text(session.user, text.to_string());
    }

    fn notify_summary(&self, session: &TradeSession, summary: &NotificationSummary) {
        match summary {
            NotificationSummary::Seed(report) => self.deliver_seed_report(session, report),
            NotificationSummary::Text(text) => {
                self.messenger.send_text(session.user, summary_line(text));
            }
        }
    }

    fn notify_item(&self, session: &TradeSession, received: &T, text: &str) {
        if received.species_id() == 0 {
            return;
        }
        if !self.config.return_items && session.mode != TradeMode::Dump {
            return;
        }
        self.messenger
            .send_item(session.user, received, text.to_string(), false);
    }
}
