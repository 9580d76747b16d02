//! Session freshness window.
//!
//! A session is considered active while the last successful sign-in lies
//! within the configured expiry window. This check is layered on top of
//! the token's own signature/expiry validation: a structurally valid
//! token is still rejected once the window has elapsed.

use chrono::{DateTime, Duration, Utc};

/// Expiry window applied to the stored last-login timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionWindow {
    minutes: i64,
}

impl SessionWindow {
    pub fn from_minutes(minutes: i64) -> Self {
        Self { minutes }
    }

    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    /// True when `last_login_on` is present and `last_login_on + window >= now`.
    ///
    /// A user that has never signed in has no active session. `now` is an
    /// explicit argument; callers pass the wall clock.
    pub fn is_active(&self, last_login_on: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        match last_login_on {
            Some(last_login) => last_login + Duration::minutes(self.minutes) >= now,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn never_signed_in_is_inactive() {
        let window = SessionWindow::from_minutes(30);
        assert!(!window.is_active(None, t0()));
    }

    #[test]
    fn one_minute_window_scenario() {
        // Sign-in at t0 with a 1 minute window: still valid 30s later,
        // rejected 61s later.
        let window = SessionWindow::from_minutes(1);
        let login = t0();

        assert!(window.is_active(Some(login), login));
        assert!(window.is_active(Some(login), login + Duration::seconds(30)));
        assert!(!window.is_active(Some(login), login + Duration::seconds(61)));
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let window = SessionWindow::from_minutes(1);
        let login = t0();
        assert!(window.is_active(Some(login), login + Duration::seconds(60)));
    }

    #[test]
    fn validity_is_monotonic_in_time() {
        let window = SessionWindow::from_minutes(5);
        let login = t0();

        let mut previous_active = true;
        for seconds in (0..600).step_by(30) {
            let active = window.is_active(Some(login), login + Duration::seconds(seconds));
            // Once inactive, never active again
            assert!(previous_active || !active);
            previous_active = active;
        }
    }
}
