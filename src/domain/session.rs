//! Trade session descriptions shared between the engine and the notifier.

use std::fmt;

use crate::domain::id::{LinkCode, SessionId, UserId};

/// How a trade session exchanges items with the remote party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradeMode {
    /// Ordinary exchange of a specifically requested item.
    Standard,
    /// Duplicate the partner's item and hand the copy back.
    Clone,
    /// Partner shows items one by one; the bot reports what it sees.
    Dump,
    /// The offered item is inspected for its RNG seed, not kept.
    SeedCheck,
    /// Mystery-egg giveaway, rate-limited per user via the cooldown store.
    EggRoll,
    /// LAN-play egg giveaway.
    LanRoll,
}

/// Why a session ended without completing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// The routine running this session was stopped.
    RoutineCancel,
    /// Nobody searched with the matching link code.
    NoPartnerFound,
    /// A partner connected but never confirmed the trade.
    PartnerTooSlow,
    /// The partner disconnected mid-trade.
    PartnerLeft,
    /// The offered item failed legality checks.
    IllegalTrade,
    /// The partner's behavior tripped a safety check.
    SuspiciousActivity,
    /// The link to the game console dropped.
    ConnectionLost,
    /// An operator aborted the session.
    Aborted,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::RoutineCancel => "routine canceled",
            Self::NoPartnerFound => "no trading partner found",
            Self::PartnerTooSlow => "partner took too long",
            Self::PartnerLeft => "partner left the trade",
            Self::IllegalTrade => "offered item failed legality checks",
            Self::SuspiciousActivity => "suspicious activity detected",
            Self::ConnectionLost => "connection to the game was lost",
            Self::Aborted => "aborted by the operator",
        };
        f.write_str(text)
    }
}

/// One trade negotiation instance between the automation agent and a
/// remote party.
///
/// Created by the automation engine when a session is admitted from the
/// queue and treated as immutable by the notification layer; the engine
/// drops it after the terminal lifecycle callback returns.
#[derive(Debug, Clone)]
pub struct TradeSession {
    /// Sequence number identifying this session.
    pub id: SessionId,
    /// Trade mode the session runs under.
    pub mode: TradeMode,
    /// Link code shown to the remote party.
    pub code: LinkCode,
    /// User who requested the trade; all private messages go here.
    pub user: UserId,
    /// Partner's display name as given at enqueue time; may be empty.
    pub trainer_name: String,
}

impl TradeSession {
    /// Create a new session description.
    pub fn new(
        id: SessionId,
        mode: TradeMode,
        code: LinkCode,
        user: UserId,
        trainer_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            mode,
            code,
            user,
            trainer_name: trainer_name.into(),
        }
    }
}
