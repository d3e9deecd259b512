//! Presence text derivation from queue state.

use std::sync::Arc;

use crate::domain::SessionId;
use crate::port::PresenceSink;

/// Lifecycle phase a presence update reflects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresencePhase {
    /// The session is searching for its partner.
    Searching,
    /// The session reached a terminal state.
    Completed,
}

/// Derives the global presence string and pushes it to a sink.
///
/// The presence string is global state: last writer wins, with no
/// ordering guarantee across sessions finishing near-simultaneously
/// beyond what the sink itself serializes.
pub struct PresenceUpdater {
    sink: Arc<dyn PresenceSink>,
    template: String,
}

impl PresenceUpdater {
    /// Create an updater over `sink`.
    ///
    /// `template` must contain the `{0}` placeholder the status text is
    /// substituted into; config validation enforces this.
    pub fn new(sink: Arc<dyn PresenceSink>, template: impl Into<String>) -> Self {
        Self {
            sink,
            template: template.into(),
        }
    }

    /// Derive the status for the given queue size and push it.
    ///
    /// An empty queue always reads `Queue is Empty`, regardless of the
    /// session; otherwise the status names the session per `phase`.
    pub fn update(&self, queue_len: usize, session: SessionId, phase: PresencePhase) {
        let status = if queue_len == 0 {
            "Queue is Empty".to_string()
        } else {
            match phase {
                PresencePhase::Searching => format!("On Trade #{session}"),
                PresencePhase::Completed => format!("Completed Trade #{session}"),
            }
        };
        self.sink.set_presence(self.template.replace("{0}", &status));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::RecordingMessenger;

    fn updater(template: &str) -> (Arc<RecordingMessenger>, PresenceUpdater) {
        let sink = Arc::new(RecordingMessenger::new());
        let updater = PresenceUpdater::new(sink.clone(), template);
        (sink, updater)
    }

    #[test]
    fn empty_queue_reads_queue_is_empty_regardless_of_session() {
        let (sink, updater) = updater("{0}");
        updater.update(0, SessionId::new(7), PresencePhase::Searching);
        updater.update(0, SessionId::new(8), PresencePhase::Completed);
        assert_eq!(
            sink.presence_history(),
            vec!["Queue is Empty".to_string(), "Queue is Empty".to_string()]
        );
    }

    #[test]
    fn busy_queue_names_the_session_per_phase() {
        let (sink, updater) = updater("{0}");
        updater.update(3, SessionId::new(7), PresencePhase::Searching);
        updater.update(2, SessionId::new(7), PresencePhase::Completed);
        assert_eq!(
            sink.presence_history(),
            vec!["On Trade #7".to_string(), "Completed Trade #7".to_string()]
        );
    }

    #[test]
    fn status_substitutes_into_template_placeholder() {
        let (sink, updater) = updater("EggRoll 9000 | {0}");
        updater.update(1, SessionId::new(42), PresencePhase::Searching);
        assert_eq!(
            sink.last_presence().as_deref(),
            Some("EggRoll 9000 | On Trade #42")
        );
    }
}
