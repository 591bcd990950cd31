use crate::policy::Policy;

/// Status-bar item text. Empty while unmuted so the item collapses;
/// the host is expected to style the muted text in its alert color.
pub fn text(policy: &Policy) -> String {
    if !policy.is_muted() {
        return String::new();
    }

    let remaining = policy.mute_remaining_minutes();
    if remaining > 0 {
        format!("notifications: muted ({remaining}m)")
    } else {
        "notifications: muted".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::fake::FakeHost;

    #[test]
    fn empty_while_unmuted() {
        assert_eq!(text(&Policy::default()), "");
    }

    #[test]
    fn indefinite_mute_has_no_countdown() {
        let mut policy = Policy::default();
        let mut host = FakeHost::default();

        policy.toggle_mute(&mut host);

        assert_eq!(text(&policy), "notifications: muted");
    }

    #[test]
    fn timed_mute_shows_remaining_minutes() {
        let mut policy = Policy::default();
        let mut host = FakeHost::default();

        policy.mute_for(25, &mut host);

        assert_eq!(text(&policy), "notifications: muted (25m)");
    }
}
