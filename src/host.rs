use std::time::Duration;

use crate::notification::Notification;

/// Handle for a host-scheduled one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// Services the embedding client provides to the engine. All calls
/// happen on the host's single event loop; implementations never need
/// to be thread-safe.
pub trait Host {
    /// Present a desktop notification. Failures are logged by the
    /// caller and never retried.
    fn notify(
        &mut self,
        notification: &Notification,
        icon: &str,
    ) -> Result<(), Error>;

    /// Schedule a one-shot callback; when it fires the host must call
    /// `Plugin::on_timer` with the returned id.
    fn schedule_once(&mut self, delay: Duration) -> TimerId;

    fn cancel(&mut self, timer: TimerId);

    /// Ask the host to re-render the status-bar item.
    fn request_bar_refresh(&mut self);
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("notification sink failed: {0}")]
    Sink(String),
}
