use crate::state::ms_to_ticks;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum AppMode {
    Login,
    Signup,
    PostList,
    PostDetail,
    Compose,
    Edit,
}

/// Navigation target for scheduled (delayed) transitions.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Route {
    Login,
    PostList,
    PostDetail(u64),
}

/// State management for UI-level state: current screen, quit flag, tick
/// counter, and at most one pending delayed navigation.
pub struct UiState {
    pub mode: AppMode,
    pub should_quit: bool,
    pub tick_count: u64,
    pending_nav: Option<(u64, Route)>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            mode: AppMode::Login,
            should_quit: false,
            tick_count: 0,
            pending_nav: None,
        }
    }
}

impl UiState {
    pub fn set_mode(&mut self, mode: AppMode) {
        self.mode = mode;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tick(&mut self) {
        self.tick_count += 1;
    }

    /// Schedule a navigation `delay_ms` from now. A newer schedule replaces
    /// any pending one.
    pub fn schedule_nav(&mut self, route: Route, delay_ms: u64) {
        self.pending_nav = Some((self.tick_count + ms_to_ticks(delay_ms), route));
    }

    pub fn nav_pending(&self) -> Option<Route> {
        self.pending_nav.map(|(_, route)| route)
    }

    /// Take the scheduled navigation if its delay has elapsed. Returns it at
    /// most once.
    pub fn take_due_nav(&mut self) -> Option<Route> {
        match self.pending_nav {
            Some((due_tick, route)) if self.tick_count >= due_tick => {
                self.pending_nav = None;
                Some(route)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TICK_MS;

    #[test]
    fn scheduled_nav_fires_once_after_delay() {
        let mut ui = UiState::default();
        ui.schedule_nav(Route::PostList, 2000);

        let due = ms_to_ticks(2000);
        for _ in 0..due - 1 {
            ui.tick();
            assert_eq!(ui.take_due_nav(), None);
        }
        ui.tick();
        assert_eq!(ui.take_due_nav(), Some(Route::PostList));
        ui.tick();
        assert_eq!(ui.take_due_nav(), None);
    }

    #[test]
    fn newer_schedule_replaces_pending() {
        let mut ui = UiState::default();
        ui.schedule_nav(Route::PostList, TICK_MS);
        ui.schedule_nav(Route::PostDetail(7), TICK_MS);
        ui.tick();
        assert_eq!(ui.take_due_nav(), Some(Route::PostDetail(7)));
    }
}
