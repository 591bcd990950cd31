use std::time::Duration;

use crate::config::Settings;
use crate::host::{Host, TimerId};
use crate::notification::DEFAULT_TIMEOUT_MILLIS;

const DECREMENT_INTERVAL: Duration = Duration::from_secs(60);
const DECREMENT_MINUTES: u16 = 1;

/// Runtime suppression state. Not persisted; every session starts
/// unmuted and not away.
///
/// Invariants: a positive countdown implies muted, and at most one
/// expiry timer and one decrement timer are outstanding at a time.
/// Every new mute request cancels prior timers before scheduling.
#[derive(Debug, Default)]
pub struct Policy {
    muted: bool,
    mute_remaining_minutes: u16,
    away: bool,
    expiry_timer: Option<TimerId>,
    decrement_timer: Option<TimerId>,
    icon: String,
}

impl Policy {
    pub fn with_icon(icon: String) -> Self {
        Self {
            icon,
            ..Self::default()
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn is_away(&self) -> bool {
        self.away
    }

    pub fn set_away(&mut self, away: bool) {
        self.away = away;
    }

    pub fn mute_remaining_minutes(&self) -> u16 {
        self.mute_remaining_minutes
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Timeout for the next notification: sticky notifications (or any
    /// notification while away, if configured) never expire.
    pub fn timeout_millis(&self, settings: &Settings) -> u32 {
        if settings.sticky || (settings.sticky_away && self.away) {
            0
        } else {
            DEFAULT_TIMEOUT_MILLIS
        }
    }

    /// `mute` with no duration: toggle between unmuted and muted
    /// indefinitely.
    pub fn toggle_mute<H: Host>(&mut self, host: &mut H) {
        self.cancel_timers(host);
        self.muted = !self.muted;
        host.request_bar_refresh();
    }

    /// `mute <minutes>`: mute now, schedule the unmute, and tick the
    /// countdown once a minute for the status bar.
    pub fn mute_for<H: Host>(&mut self, minutes: u16, host: &mut H) {
        self.cancel_timers(host);
        self.muted = true;
        self.mute_remaining_minutes = minutes;
        self.expiry_timer = Some(
            host.schedule_once(Duration::from_secs(u64::from(minutes) * 60)),
        );
        self.decrement_timer = Some(host.schedule_once(DECREMENT_INTERVAL));
        host.request_bar_refresh();
    }

    /// Handles a fired timer. Ids that match neither outstanding timer
    /// belong to a superseded mute session and are ignored.
    pub fn on_timer<H: Host>(&mut self, timer: TimerId, host: &mut H) {
        if self.expiry_timer == Some(timer) {
            self.expiry_timer = None;
            self.muted = false;
            self.mute_remaining_minutes = 0;
            log::info!("mute timer expired, notifications enabled again");
            host.request_bar_refresh();
        } else if self.decrement_timer == Some(timer) {
            self.decrement_timer = None;
            self.mute_remaining_minutes = self
                .mute_remaining_minutes
                .saturating_sub(DECREMENT_MINUTES);
            if self.mute_remaining_minutes > 0 {
                self.decrement_timer =
                    Some(host.schedule_once(DECREMENT_INTERVAL));
            }
            host.request_bar_refresh();
        }
    }

    fn cancel_timers<H: Host>(&mut self, host: &mut H) {
        if let Some(timer) = self.expiry_timer.take() {
            host.cancel(timer);
            log::info!("cancelling previous mute timer");
        }
        if let Some(timer) = self.decrement_timer.take() {
            host.cancel(timer);
        }
        self.mute_remaining_minutes = 0;
    }
}
