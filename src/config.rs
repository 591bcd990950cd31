use serde::Deserialize;

/// Per-category toggles and presentation options. Defaults favor
/// direct messages and highlights over channel noise.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub show_public_message: bool,
    pub show_private_message: bool,
    pub show_public_action_message: bool,
    pub show_private_action_message: bool,
    pub show_notice_message: bool,
    pub show_invite_message: bool,
    pub show_highlighted_message: bool,
    pub show_server: bool,
    pub show_channel_topic: bool,
    pub show_dcc: bool,
    pub show_upgrade_ended: bool,
    /// Comma-separated channel short names, e.g. `"#rust,#chime"`.
    /// Empty means every channel. Matching is substring containment
    /// against the raw string, so `#foo` also passes for an entry
    /// `#foobar`.
    pub public_channel_whitelist: String,
    pub sticky: bool,
    pub sticky_away: bool,
    pub icon: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_public_message: false,
            show_private_message: true,
            show_public_action_message: false,
            show_private_action_message: true,
            show_notice_message: false,
            show_invite_message: true,
            show_highlighted_message: true,
            show_server: true,
            show_channel_topic: true,
            show_dcc: true,
            show_upgrade_ended: true,
            public_channel_whitelist: String::new(),
            sticky: false,
            sticky_away: true,
            icon: "/usr/share/pixmaps/weechat.xpm".to_string(),
        }
    }
}

impl Settings {
    pub fn load(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    pub fn whitelist_allows(&self, buffer_short_name: &str) -> bool {
        self.public_channel_whitelist.is_empty()
            || self.public_channel_whitelist.contains(buffer_short_name)
    }

    /// Host-facing accessor; flags render as `"on"`/`"off"`.
    pub fn get(&self, option: &str) -> Option<String> {
        let value = match option {
            "show_public_message" => flag(self.show_public_message),
            "show_private_message" => flag(self.show_private_message),
            "show_public_action_message" => {
                flag(self.show_public_action_message)
            }
            "show_private_action_message" => {
                flag(self.show_private_action_message)
            }
            "show_notice_message" => flag(self.show_notice_message),
            "show_invite_message" => flag(self.show_invite_message),
            "show_highlighted_message" => flag(self.show_highlighted_message),
            "show_server" => flag(self.show_server),
            "show_channel_topic" => flag(self.show_channel_topic),
            "show_dcc" => flag(self.show_dcc),
            "show_upgrade_ended" => flag(self.show_upgrade_ended),
            "public_channel_whitelist" => {
                return Some(self.public_channel_whitelist.clone());
            }
            "sticky" => flag(self.sticky),
            "sticky_away" => flag(self.sticky_away),
            "icon" => return Some(self.icon.clone()),
            _ => return None,
        };

        Some(value.to_string())
    }

    /// Host-facing mutator, driven by the client's option storage.
    pub fn set(&mut self, option: &str, value: &str) -> Result<(), Error> {
        match option {
            "show_public_message" => {
                self.show_public_message = parse_flag(value)?;
            }
            "show_private_message" => {
                self.show_private_message = parse_flag(value)?;
            }
            "show_public_action_message" => {
                self.show_public_action_message = parse_flag(value)?;
            }
            "show_private_action_message" => {
                self.show_private_action_message = parse_flag(value)?;
            }
            "show_notice_message" => {
                self.show_notice_message = parse_flag(value)?;
            }
            "show_invite_message" => {
                self.show_invite_message = parse_flag(value)?;
            }
            "show_highlighted_message" => {
                self.show_highlighted_message = parse_flag(value)?;
            }
            "show_server" => self.show_server = parse_flag(value)?,
            "show_channel_topic" => {
                self.show_channel_topic = parse_flag(value)?;
            }
            "show_dcc" => self.show_dcc = parse_flag(value)?,
            "show_upgrade_ended" => {
                self.show_upgrade_ended = parse_flag(value)?;
            }
            "public_channel_whitelist" => {
                self.public_channel_whitelist = value.to_string();
            }
            "sticky" => self.sticky = parse_flag(value)?,
            "sticky_away" => self.sticky_away = parse_flag(value)?,
            "icon" => self.icon = value.to_string(),
            _ => return Err(Error::UnknownOption(option.to_string())),
        }

        Ok(())
    }
}

fn flag(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

fn parse_flag(value: &str) -> Result<bool, Error> {
    match value {
        "on" => Ok(true),
        "off" => Ok(false),
        _ => Err(Error::InvalidFlag(value.to_string())),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown option {0:?}")]
    UnknownOption(String),
    #[error("expected \"on\" or \"off\", got {0:?}")]
    InvalidFlag(String),
    #[error(transparent)]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_table() {
        let settings = Settings::default();

        assert!(!settings.show_public_message);
        assert!(settings.show_private_message);
        assert!(settings.show_highlighted_message);
        assert!(settings.sticky_away);
        assert!(!settings.sticky);
        assert!(settings.public_channel_whitelist.is_empty());
    }

    #[test]
    fn load_overrides_defaults() {
        let settings = Settings::load(
            r##"
            show_public_message = true
            public_channel_whitelist = "#rust,#chime"
            "##,
        )
        .unwrap();

        assert!(settings.show_public_message);
        assert_eq!(settings.public_channel_whitelist, "#rust,#chime");
        // Untouched options keep their defaults.
        assert!(settings.show_dcc);
    }

    #[test]
    fn get_set_round_trip() {
        let mut settings = Settings::default();

        settings.set("show_public_message", "on").unwrap();
        assert_eq!(
            settings.get("show_public_message").as_deref(),
            Some("on")
        );

        settings.set("public_channel_whitelist", "#rust").unwrap();
        assert_eq!(
            settings.get("public_channel_whitelist").as_deref(),
            Some("#rust")
        );
    }

    #[test]
    fn unknown_option_is_rejected() {
        let mut settings = Settings::default();

        assert!(matches!(
            settings.set("show_everything", "on"),
            Err(Error::UnknownOption(_)),
        ));
        assert_eq!(settings.get("show_everything"), None);
    }

    #[test]
    fn malformed_flag_is_rejected() {
        let mut settings = Settings::default();

        assert!(matches!(
            settings.set("sticky", "yes"),
            Err(Error::InvalidFlag(_)),
        ));
        assert!(!settings.sticky);
    }

    #[test]
    fn whitelist_substring_containment() {
        let mut settings = Settings::default();
        settings.public_channel_whitelist = "#foobar".to_string();

        // Containment, not token equality: "#foo" passes for "#foobar".
        assert!(settings.whitelist_allows("#foo"));
        assert!(!settings.whitelist_allows("#baz"));

        settings.public_channel_whitelist = String::new();
        assert!(settings.whitelist_allows("#anything"));
    }
}
