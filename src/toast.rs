use crate::host;
use crate::notification::Notification;
#[cfg(all(unix, not(target_os = "macos")))]
use crate::notification::Urgency;

#[cfg(target_os = "macos")]
pub fn prepare(application_id: &str) {
    match notify_rust::set_application(application_id) {
        Ok(()) => {}
        Err(error) => {
            log::error!("{error}");
        }
    }
}

#[cfg(not(target_os = "macos"))]
pub fn prepare(_application_id: &str) {}

/// Default desktop sink. A zero timeout maps to a toast that stays
/// until dismissed.
pub fn show(
    notification: &Notification,
    icon: &str,
) -> Result<(), host::Error> {
    let mut toast = notify_rust::Notification::new();

    toast.summary(&notification.title);
    toast.body(&notification.body);
    toast.timeout(if notification.timeout_millis == 0 {
        notify_rust::Timeout::Never
    } else {
        notify_rust::Timeout::Milliseconds(notification.timeout_millis)
    });

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        toast.appname("chime");
        toast.icon(icon);
        toast.urgency(match notification.urgency {
            Urgency::Low => notify_rust::Urgency::Low,
            Urgency::Normal => notify_rust::Urgency::Normal,
            Urgency::Critical => notify_rust::Urgency::Critical,
        });
    }
    #[cfg(not(all(unix, not(target_os = "macos"))))]
    {
        let _ = icon;
    }

    toast
        .show()
        .map(|_| ())
        .map_err(|error| host::Error::Sink(error.to_string()))
}
