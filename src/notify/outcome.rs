//! Outcome and summary message construction.
//!
//! Pure functions: they read the session and items, produce a string,
//! and perform no I/O, so they are testable without a live session.

use crate::domain::{TextSummary, TradeMode, TradedItem};

/// Build the completion message for a finished trade.
///
/// Branches on the offered item's egg flag and the session mode; giveaway
/// modes hide the real species behind their fixed labels. When the
/// partner gave nothing back (`received.species_id() == 0`) the message
/// carries no species at all.
pub fn outcome_message<T: TradedItem>(mode: TradeMode, offered: &T, received: &T) -> String {
    if received.species_id() == 0 {
        return "Trade finished!".to_string();
    }
    let species = if offered.is_egg() && mode == TradeMode::EggRoll {
        "Mysterious egg".to_string()
    } else if offered.is_egg() && mode == TradeMode::LanRoll {
        "Really Illegal Egg".to_string()
    } else {
        received.species_name()
    };
    format!("Trade finished. Enjoy your {species}!")
}

/// Join a text summary into a single line.
///
/// Headline first, then each field as `heading: detail`, all separated
/// by `", "`. A summary with no fields is just the headline.
pub fn summary_line(summary: &TextSummary) -> String {
    let mut parts = Vec::with_capacity(1 + summary.fields.len());
    parts.push(summary.headline.clone());
    for field in &summary.fields {
        parts.push(format!("{}: {}", field.heading, field.detail));
    }
    parts.join(", ")
}
