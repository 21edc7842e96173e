use crate::state::{ms_to_ticks, NOTIFICATION_TIMEOUT_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub close_tick: u64,
}

/// State management for the transient toast notification.
///
/// At most one toast is visible; showing another replaces it and restarts
/// the auto-hide window. Expiry is driven by the event-loop tick counter so
/// tests never need real delays.
#[derive(Debug, Default)]
pub struct NotificationState {
    pub current: Option<Toast>,
}

impl NotificationState {
    pub fn show(&mut self, message: impl Into<String>, severity: Severity, tick_count: u64) {
        self.current = Some(Toast {
            message: message.into(),
            severity,
            close_tick: tick_count + ms_to_ticks(NOTIFICATION_TIMEOUT_MS),
        });
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn should_close(&self, tick_count: u64) -> bool {
        match &self.current {
            Some(toast) => tick_count >= toast.close_tick,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: u64 = ms_to_ticks(NOTIFICATION_TIMEOUT_MS);

    #[test]
    fn toast_expires_after_window() {
        let mut state = NotificationState::default();
        state.show("저장되었습니다.", Severity::Success, 10);
        assert!(state.is_visible());
        assert!(!state.should_close(10 + WINDOW - 1));
        assert!(state.should_close(10 + WINDOW));
    }

    #[test]
    fn newer_toast_replaces_and_restarts_timer() {
        let mut state = NotificationState::default();
        state.show("first", Severity::Error, 0);
        state.show("second", Severity::Success, 30);

        let toast = state.current.as_ref().unwrap();
        assert_eq!(toast.message, "second");
        assert_eq!(toast.severity, Severity::Success);

        // The first toast's window must not fire; only the second's does.
        assert!(!state.should_close(WINDOW));
        assert!(state.should_close(30 + WINDOW));
    }

    #[test]
    fn dismiss_clears_immediately() {
        let mut state = NotificationState::default();
        state.show("msg", Severity::Info, 0);
        state.dismiss();
        assert!(!state.is_visible());
        assert!(!state.should_close(WINDOW));
    }
}
