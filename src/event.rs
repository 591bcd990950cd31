use std::collections::BTreeSet;

/// A single print event delivered by the host client, one per line of
/// buffer output.
#[derive(Debug, Clone)]
pub struct RawEvent {
    pub tags: BTreeSet<String>,
    pub prefix: String,
    pub message: String,
    pub buffer_name: String,
    pub buffer_short_name: String,
    pub highlighted: bool,
}

impl RawEvent {
    pub fn has_tags(&self, required: &[&str]) -> bool {
        required.iter().all(|tag| self.tags.contains(*tag))
    }
}

/// Connection-lifecycle signals, delivered outside the print-event path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    ServerConnected { network: String },
    ServerDisconnected { network: String },
    UpgradeEnded,
}
