use std::sync::LazyLock;

use regex::Regex;

use crate::classify::{Tagged, Untagged};
use crate::config::Settings;
use crate::event::Signal;
use crate::notification::{Category, Notification, Urgency};

/// Prefix the host uses for `/me` lines; the real nick is the first
/// word of the message instead.
const ACTION_MARKER: &str = " *";

static ACTION_NICK_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+) (.+)$").unwrap());

static CTCP_ACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^CTCP_MESSAGE.+?ACTION (.+)$").unwrap());

static NOTICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S*) [^:]*: (.+)$").unwrap());

static INVITE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^You have been invited to (\S+) by (\S+)$").unwrap()
});

static TOPIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\w+ has (?:changed|unset) topic for (\S+)(?:(?: from "(?:(?:"\w|[^"])+)")? to "((?:"\w|[^"])+)")?"#,
    )
    .unwrap()
});

/// Formats a tagged message event, or decides to stay quiet. Messages
/// whose required sub-pattern fails to match are dropped silently;
/// host text formats vary by locale and version.
pub fn tagged(
    tagged: Tagged,
    prefix: &str,
    message: &str,
    highlighted: bool,
    buffer_short_name: &str,
    settings: &Settings,
) -> Option<Notification> {
    match tagged {
        Tagged::PublicMessageOrAction => public_message_or_action(
            prefix,
            message,
            highlighted,
            buffer_short_name,
            settings,
        ),
        Tagged::PrivateMessageOrAction => {
            private_message_or_action(prefix, message, highlighted, settings)
        }
        Tagged::Notice => notice(message, highlighted, settings),
        Tagged::Invite => invite(message, settings),
        Tagged::ChannelTopic => channel_topic(message, settings),
    }
}

/// Formats a DCC transfer event. All of them hang off one toggle.
pub fn dcc(untagged: &Untagged, settings: &Settings) -> Option<Notification> {
    if !settings.show_dcc {
        return None;
    }

    let (category, title, body) = match untagged {
        Untagged::AwayStatus { .. } => return None,
        Untagged::DccChatRequest { nick } => (
            Category::DccChatRequest,
            "Direct Chat Request",
            format!("{nick} wants to chat directly."),
        ),
        Untagged::DccChatClosed { nick } => (
            Category::DccChatClosed,
            "Direct Chat Ended",
            format!("Direct chat with {nick} has ended."),
        ),
        Untagged::DccGetRequest { nick, filename } => (
            Category::DccGetRequest,
            "File Transfer Request",
            format!("{nick} wants to send you {filename}."),
        ),
        Untagged::DccGetCompleted { filename } => {
            (Category::DccGetCompleted, "Download Complete", filename.clone())
        }
        Untagged::DccGetFailed { filename } => {
            (Category::DccGetFailed, "Download Failed", filename.clone())
        }
        Untagged::DccSendCompleted { filename } => {
            (Category::DccSendCompleted, "Upload Complete", filename.clone())
        }
        Untagged::DccSendFailed { filename } => {
            (Category::DccSendFailed, "Upload Failed", filename.clone())
        }
    };

    Some(Notification::new(category, title, body, Urgency::Low))
}

/// Formats a connection-lifecycle signal.
pub fn signal(signal: &Signal, settings: &Settings) -> Option<Notification> {
    match signal {
        Signal::ServerConnected { network } => {
            settings.show_server.then(|| {
                Notification::new(
                    Category::ServerConnected,
                    "Server Connected",
                    format!("Connected to network {network}."),
                    Urgency::Low,
                )
            })
        }
        Signal::ServerDisconnected { network } => {
            settings.show_server.then(|| {
                Notification::new(
                    Category::ServerDisconnected,
                    "Server Disconnected",
                    format!("Disconnected from network {network}."),
                    Urgency::Low,
                )
            })
        }
        Signal::UpgradeEnded => settings.show_upgrade_ended.then(|| {
            Notification::new(
                Category::UpgradeEnded,
                "Client Upgraded",
                "Chat client has been upgraded.",
                Urgency::Low,
            )
        }),
    }
}

fn public_message_or_action(
    prefix: &str,
    message: &str,
    highlighted: bool,
    buffer_short_name: &str,
    settings: &Settings,
) -> Option<Notification> {
    if prefix == ACTION_MARKER {
        let (nick, text) = split_action(message)?;
        return public_action(nick, text, highlighted, settings);
    }

    if highlighted {
        return highlight(Category::PublicMessage, prefix, message, settings);
    }

    if !settings.show_public_message
        || !settings.whitelist_allows(buffer_short_name)
    {
        return None;
    }

    Some(Notification::new(
        Category::PublicMessage,
        format!("Public Message in {buffer_short_name}"),
        format!("{prefix}: {message}"),
        Urgency::Low,
    ))
}

fn private_message_or_action(
    prefix: &str,
    message: &str,
    highlighted: bool,
    settings: &Settings,
) -> Option<Notification> {
    if let Some(captures) = CTCP_ACTION.captures(message) {
        let text = captures.get(1).map_or("", |m| m.as_str());
        return private_action(prefix, text, highlighted, settings);
    }

    if prefix == ACTION_MARKER {
        let (nick, text) = split_action(message)?;
        return private_action(nick, text, highlighted, settings);
    }

    if highlighted {
        return highlight(Category::PrivateMessage, prefix, message, settings);
    }

    settings.show_private_message.then(|| {
        Notification::new(
            Category::PrivateMessage,
            format!("Private Message - {prefix}"),
            message,
            Urgency::Low,
        )
    })
}

fn public_action(
    nick: &str,
    text: &str,
    highlighted: bool,
    settings: &Settings,
) -> Option<Notification> {
    if highlighted {
        return highlight(Category::PublicAction, nick, text, settings);
    }

    settings.show_public_action_message.then(|| {
        Notification::new(
            Category::PublicAction,
            "Public Action Message",
            format!("{nick}: {text}"),
            Urgency::Normal,
        )
    })
}

fn private_action(
    nick: &str,
    text: &str,
    highlighted: bool,
    settings: &Settings,
) -> Option<Notification> {
    if highlighted {
        return highlight(Category::PrivateAction, nick, text, settings);
    }

    settings.show_private_action_message.then(|| {
        Notification::new(
            Category::PrivateAction,
            "Private Action Message",
            format!("{nick}: {text}"),
            Urgency::Normal,
        )
    })
}

/// Priority override shared by every message category: a highlighted
/// event consults only this toggle, never the category's own.
fn highlight(
    category: Category,
    prefix: &str,
    message: &str,
    settings: &Settings,
) -> Option<Notification> {
    settings.show_highlighted_message.then(|| {
        Notification::new(
            category,
            "Highlighted Message",
            format!("{prefix}: {message}"),
            Urgency::Critical,
        )
    })
}

fn notice(
    message: &str,
    highlighted: bool,
    settings: &Settings,
) -> Option<Notification> {
    let captures = NOTICE.captures(message)?;
    let sender = captures.get(1).map_or("", |m| m.as_str());
    let text = captures.get(2).map_or("", |m| m.as_str());

    if highlighted {
        return highlight(Category::Notice, sender, text, settings);
    }

    settings.show_notice_message.then(|| {
        Notification::new(
            Category::Notice,
            "Notice Message",
            format!("{sender}: {text}"),
            Urgency::Low,
        )
    })
}

fn invite(message: &str, settings: &Settings) -> Option<Notification> {
    if !settings.show_invite_message {
        return None;
    }

    let captures = INVITE.captures(message)?;
    let channel = captures.get(1).map_or("", |m| m.as_str());
    let nick = captures.get(2).map_or("", |m| m.as_str());

    Some(Notification::new(
        Category::Invite,
        "Channel Invitation",
        format!("{nick} has invited you to join {channel}."),
        Urgency::Low,
    ))
}

fn channel_topic(message: &str, settings: &Settings) -> Option<Notification> {
    if !settings.show_channel_topic {
        return None;
    }

    let captures = TOPIC.captures(message)?;
    let channel = captures.get(1).map_or("", |m| m.as_str());
    // No second capture when the topic was unset.
    let topic = captures.get(2).map_or("", |m| m.as_str());

    Some(Notification::new(
        Category::ChannelTopic,
        "Channel Topic",
        format!("{channel}: {topic}"),
        Urgency::Low,
    ))
}

fn split_action(message: &str) -> Option<(&str, &str)> {
    let captures = ACTION_NICK_TEXT.captures(message)?;

    Some((
        captures.get(1)?.as_str(),
        captures.get(2)?.as_str(),
    ))
}
