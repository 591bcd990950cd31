use strum::Display;

/// Semantic event categories. Every incoming event maps to exactly one
/// of these, or to none at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Category {
    PublicMessage,
    PrivateMessage,
    PublicAction,
    PrivateAction,
    Notice,
    Invite,
    ChannelTopic,
    AwayStatus,
    DccChatRequest,
    DccChatClosed,
    DccGetRequest,
    DccGetCompleted,
    DccGetFailed,
    DccSendCompleted,
    DccSendFailed,
    ServerConnected,
    ServerDisconnected,
    UpgradeEnded,
}

/// Display prominence tier. Critical notifications typically persist
/// until dismissed regardless of timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Urgency {
    Low,
    Normal,
    Critical,
}

pub const DEFAULT_TIMEOUT_MILLIS: u32 = 5000;

/// A formatted notification request, ready for the host's sink. A
/// timeout of `0` means the notification never expires on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub category: Category,
    pub title: String,
    pub body: String,
    pub urgency: Urgency,
    pub timeout_millis: u32,
}

impl Notification {
    pub fn new(
        category: Category,
        title: impl Into<String>,
        body: impl Into<String>,
        urgency: Urgency,
    ) -> Self {
        Self {
            category,
            title: title.into(),
            body: body.into(),
            urgency,
            timeout_millis: DEFAULT_TIMEOUT_MILLIS,
        }
    }
}
