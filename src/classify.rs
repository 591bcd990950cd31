use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::event::RawEvent;

/// Buffers for private DCC chats. The host tags their messages as
/// public even though they are direct messages.
pub const DCC_BUFFER_PREFIX: &str = "irc_dcc.";

pub const PUBLIC_MESSAGE_TAGS: &[&str] = &["irc_privmsg", "notify_message"];
pub const PRIVATE_MESSAGE_TAGS: &[&str] = &["irc_privmsg", "notify_private"];
pub const NOTICE_TAGS: &[&str] = &["irc_notice", "notify_private"];
pub const INVITE_TAGS: &[&str] = &["irc_invite", "notify_highlight"];
pub const TOPIC_TAGS: &[&str] = &["irc_topic"];

/// Categories identified from structured event tags. A rule matches
/// when the event's tag set is a superset of the rule's required tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tagged {
    PublicMessageOrAction,
    PrivateMessageOrAction,
    Notice,
    Invite,
    ChannelTopic,
}

/// Fixed evaluation order; the first superset match wins.
pub const TAG_RULES: &[(Tagged, &[&str])] = &[
    (Tagged::PublicMessageOrAction, PUBLIC_MESSAGE_TAGS),
    (Tagged::PrivateMessageOrAction, PRIVATE_MESSAGE_TAGS),
    (Tagged::Notice, NOTICE_TAGS),
    (Tagged::Invite, INVITE_TAGS),
    (Tagged::ChannelTopic, TOPIC_TAGS),
];

/// Categories identified from raw message text when no reliable tag
/// exists, with the fields extracted by their patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Untagged {
    /// `away` is `None` when the status word is one the pattern admits
    /// but the handler does not recognize.
    AwayStatus { away: Option<bool> },
    DccChatRequest { nick: String },
    DccChatClosed { nick: String },
    DccGetRequest { nick: String, filename: String },
    DccGetCompleted { filename: String },
    DccGetFailed { filename: String },
    DccSendCompleted { filename: String },
    DccSendFailed { filename: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Untagged(Untagged),
    Tagged(Tagged),
}

type Extract = fn(&Captures) -> Untagged;

static UNTAGGED_RULES: LazyLock<Vec<(Regex, Extract)>> = LazyLock::new(|| {
    let rule = |pattern: &str, extract: Extract| {
        (Regex::new(pattern).unwrap(), extract)
    };

    vec![
        rule(r"^You ((\w+).){2,3}marked as being away", |captures| {
            let away = match group(captures, 1) {
                "been " => Some(true),
                "longer " => Some(false),
                _ => None,
            };
            Untagged::AwayStatus { away }
        }),
        rule(r"^xfer: incoming chat request from (\w+)", |captures| {
            Untagged::DccChatRequest {
                nick: group(captures, 1).to_string(),
            }
        }),
        rule(r"^xfer: chat closed with (\w+)", |captures| {
            Untagged::DccChatClosed {
                nick: group(captures, 1).to_string(),
            }
        }),
        rule(
            r"^xfer: incoming file from (\w+) [^:]+: ((?:,\w|[^,])+),",
            |captures| Untagged::DccGetRequest {
                nick: group(captures, 1).to_string(),
                filename: group(captures, 2).to_string(),
            },
        ),
        rule(r"^xfer: file (\S+) received from \w+: OK", |captures| {
            Untagged::DccGetCompleted {
                filename: group(captures, 1).to_string(),
            }
        }),
        rule(r"^xfer: file (\S+) received from \w+: FAILED", |captures| {
            Untagged::DccGetFailed {
                filename: group(captures, 1).to_string(),
            }
        }),
        rule(r"^xfer: file (\S+) sent to \w+: OK", |captures| {
            Untagged::DccSendCompleted {
                filename: group(captures, 1).to_string(),
            }
        }),
        rule(r"^xfer: file (\S+) sent to \w+: FAILED", |captures| {
            Untagged::DccSendFailed {
                filename: group(captures, 1).to_string(),
            }
        }),
    ]
});

fn group<'a>(captures: &'a Captures, index: usize) -> &'a str {
    captures.get(index).map_or("", |m| m.as_str())
}

/// Maps an event to at most one category. Untagged text rules run
/// before tag rules; the DCC-buffer quirk overrides both.
pub fn classify(event: &RawEvent) -> Option<Classification> {
    if event.has_tags(PUBLIC_MESSAGE_TAGS)
        && event.buffer_name.starts_with(DCC_BUFFER_PREFIX)
    {
        return Some(Classification::Tagged(Tagged::PrivateMessageOrAction));
    }

    if let Some(untagged) = classify_untagged(&event.message) {
        return Some(Classification::Untagged(untagged));
    }

    TAG_RULES
        .iter()
        .find(|(_, required)| event.has_tags(required))
        .map(|(tagged, _)| Classification::Tagged(*tagged))
}

fn classify_untagged(message: &str) -> Option<Untagged> {
    let mut first = None;

    for (pattern, extract) in UNTAGGED_RULES.iter() {
        if let Some(captures) = pattern.captures(message) {
            debug_assert!(
                first.is_none(),
                "untagged rules are not mutually exclusive for {message:?}"
            );
            if first.is_none() {
                first = Some(extract(&captures));
            }
        }
    }

    first
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn event(tags: &[&str], message: &str, buffer_name: &str) -> RawEvent {
        RawEvent {
            tags: tags.iter().map(ToString::to_string).collect::<BTreeSet<_>>(),
            prefix: "alice".to_string(),
            message: message.to_string(),
            buffer_name: buffer_name.to_string(),
            buffer_short_name: "#test".to_string(),
            highlighted: false,
        }
    }

    #[test]
    fn untagged_rules_are_mutually_exclusive() {
        // One representative line per rule; each must match its own
        // rule and no other.
        let corpus = [
            "You have been marked as being away",
            "xfer: incoming chat request from alice",
            "xfer: chat closed with alice",
            "xfer: incoming file from alice (192.168.0.1), file: report.pdf, 12345 bytes",
            "xfer: file report.pdf received from alice: OK",
            "xfer: file report.pdf received from alice: FAILED",
            "xfer: file report.pdf sent to alice: OK",
            "xfer: file report.pdf sent to alice: FAILED",
        ];

        for line in corpus {
            let matches = UNTAGGED_RULES
                .iter()
                .filter(|(pattern, _)| pattern.is_match(line))
                .count();
            assert_eq!(matches, 1, "{line:?} matched {matches} rules");
        }
    }

    #[test]
    fn tag_rules_have_no_subset_pairs() {
        // A rule whose required tags are a subset of another's would
        // shadow it (or be shadowed) depending on evaluation order.
        for (index, (_, required)) in TAG_RULES.iter().enumerate() {
            for (other_index, (_, other)) in TAG_RULES.iter().enumerate() {
                if index == other_index {
                    continue;
                }
                assert!(
                    !required.iter().all(|tag| other.contains(tag)),
                    "tag rule {index} is a subset of rule {other_index}"
                );
            }
        }
    }

    #[test]
    fn away_status() {
        let tests = [
            ("You have been marked as being away", Some(true)),
            ("You are no longer marked as being away", Some(false)),
        ];

        for (message, away) in tests {
            assert_eq!(
                classify(&event(&[], message, "server.libera")),
                Some(Classification::Untagged(Untagged::AwayStatus { away })),
            );
        }
    }

    #[test]
    fn dcc_get_request_extracts_nick_and_filename() {
        let message =
            "xfer: incoming file from bob (192.168.0.1), file: notes from class.txt, 999 bytes";

        assert_eq!(
            classify(&event(&[], message, "server.libera")),
            Some(Classification::Untagged(Untagged::DccGetRequest {
                nick: "bob".to_string(),
                filename: "notes from class.txt".to_string(),
            })),
        );
    }

    #[test]
    fn dcc_transfer_outcomes() {
        let tests = [
            (
                "xfer: file report.pdf received from bob: OK",
                Untagged::DccGetCompleted {
                    filename: "report.pdf".to_string(),
                },
            ),
            (
                "xfer: file report.pdf received from bob: FAILED",
                Untagged::DccGetFailed {
                    filename: "report.pdf".to_string(),
                },
            ),
            (
                "xfer: file report.pdf sent to bob: OK",
                Untagged::DccSendCompleted {
                    filename: "report.pdf".to_string(),
                },
            ),
            (
                "xfer: file report.pdf sent to bob: FAILED",
                Untagged::DccSendFailed {
                    filename: "report.pdf".to_string(),
                },
            ),
        ];

        for (message, expected) in tests {
            assert_eq!(
                classify(&event(&[], message, "server.libera")),
                Some(Classification::Untagged(expected)),
            );
        }
    }

    #[test]
    fn tagged_categories() {
        let tests = [
            (
                &["irc_privmsg", "notify_message"][..],
                Tagged::PublicMessageOrAction,
            ),
            (
                &["irc_privmsg", "notify_private"][..],
                Tagged::PrivateMessageOrAction,
            ),
            (&["irc_notice", "notify_private"][..], Tagged::Notice),
            (&["irc_invite", "notify_highlight"][..], Tagged::Invite),
            (&["irc_topic"][..], Tagged::ChannelTopic),
        ];

        for (tags, expected) in tests {
            assert_eq!(
                classify(&event(tags, "hello", "libera.#test")),
                Some(Classification::Tagged(expected)),
            );
        }
    }

    #[test]
    fn extra_tags_still_match() {
        assert_eq!(
            classify(&event(
                &["irc_privmsg", "notify_message", "log1", "nick_alice"],
                "hello",
                "libera.#test",
            )),
            Some(Classification::Tagged(Tagged::PublicMessageOrAction)),
        );
    }

    #[test]
    fn dcc_buffer_reroutes_mistagged_public_message() {
        assert_eq!(
            classify(&event(
                &["irc_privmsg", "notify_message"],
                "hello",
                "irc_dcc.alice",
            )),
            Some(Classification::Tagged(Tagged::PrivateMessageOrAction)),
        );
    }

    #[test]
    fn unclassified_event_is_none() {
        assert_eq!(classify(&event(&["irc_join"], "bob joined", "libera.#test")), None);
    }
}
