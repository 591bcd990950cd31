pub mod bar;
pub mod classify;
pub mod command;
pub mod config;
pub mod event;
pub mod host;
pub mod notification;
pub mod notifier;
pub mod policy;
pub mod toast;

pub use self::command::Command;
pub use self::config::Settings;
pub use self::event::{RawEvent, Signal};
pub use self::host::{Host, TimerId};
pub use self::notification::{Category, Notification, Urgency};
pub use self::policy::Policy;

use self::classify::{Classification, Untagged};

/// The engine: classifies host events, runs them through the
/// suppression policy, and hands surviving notifications to the host.
pub struct Plugin<H: Host> {
    settings: Settings,
    policy: Policy,
    host: H,
}

impl<H: Host> Plugin<H> {
    pub fn new(settings: Settings, host: H) -> Self {
        let policy = Policy::with_icon(settings.icon.clone());

        Self {
            settings,
            policy,
            host,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Entry point for the host's print hook. At most one notification
    /// reaches the sink per event.
    pub fn on_print(&mut self, event: &RawEvent) {
        match classify::classify(event) {
            Some(Classification::Untagged(Untagged::AwayStatus { away })) => {
                if let Some(away) = away {
                    self.policy.set_away(away);
                }
            }
            Some(Classification::Untagged(untagged)) => {
                if let Some(notification) =
                    notifier::dcc(&untagged, &self.settings)
                {
                    self.deliver(notification);
                }
            }
            Some(Classification::Tagged(tagged)) => {
                if let Some(notification) = notifier::tagged(
                    tagged,
                    &event.prefix,
                    &event.message,
                    event.highlighted,
                    &event.buffer_short_name,
                    &self.settings,
                ) {
                    self.deliver(notification);
                }
            }
            None => {}
        }
    }

    /// Entry point for connection-lifecycle signals.
    pub fn on_signal(&mut self, signal: &Signal) {
        if let Some(notification) = notifier::signal(signal, &self.settings) {
            self.deliver(notification);
        }
    }

    /// Entry point for the host's command hook.
    pub fn on_command(&mut self, args: &str) -> Result<(), command::Error> {
        match command::parse(args)? {
            Command::MuteToggle => self.policy.toggle_mute(&mut self.host),
            Command::MuteFor(minutes) => {
                self.policy.mute_for(minutes, &mut self.host);
            }
        }

        Ok(())
    }

    /// Entry point for fired host timers.
    pub fn on_timer(&mut self, timer: TimerId) {
        self.policy.on_timer(timer, &mut self.host);
    }

    /// Render callback for the status-bar item.
    pub fn bar_text(&self) -> String {
        bar::text(&self.policy)
    }

    fn deliver(&mut self, mut notification: Notification) {
        if self.policy.is_muted() {
            log::info!(
                "muted, not showing {} notification; unmute with /chime mute",
                notification.category,
            );
            return;
        }

        notification.timeout_millis =
            self.policy.timeout_millis(&self.settings);

        if let Err(error) =
            self.host.notify(&notification, self.policy.icon())
        {
            log::warn!("failed to show notification: {error}");
        }
    }
}
