pub mod auth;
pub mod notification;
pub mod posts;
pub mod resource;
pub mod ui;

pub use auth::{AuthState, InputFocus};
pub use notification::{NotificationState, Severity, Toast};
pub use posts::{ComposeFocus, PostsState};
pub use resource::Resource;
pub use ui::{AppMode, Route, UiState};

/// Event loop tick interval. Every timer in the client is expressed in ticks
/// of this length, so tests can drive time by calling `on_tick`.
pub const TICK_MS: u64 = 50;

/// Posts shown per listing page.
pub const PAGE_SIZE: usize = 5;

/// How long a toast stays on screen.
pub const NOTIFICATION_TIMEOUT_MS: u64 = 4000;

/// Delay before navigating back to the listing after a missing post, long
/// enough for the message to be read.
pub const NOT_FOUND_NAV_DELAY_MS: u64 = 2000;

/// Delay between a success toast and the navigation that follows it.
pub const SUCCESS_NAV_DELAY_MS: u64 = 1500;

pub const fn ms_to_ticks(ms: u64) -> u64 {
    ms / TICK_MS
}
