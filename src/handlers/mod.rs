//! Keyboard dispatch. Each screen has its own handler module; global
//! bindings and popup priority are resolved here first.

mod auth;
mod compose;
mod posts;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;
use crate::state::AppMode;

pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+C quits from anywhere.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.ui.quit();
        return;
    }

    // A visible toast absorbs the first keypress.
    if app.notifications.is_visible() {
        app.notifications.dismiss();
        return;
    }

    // The delete confirmation popup takes over all input while open.
    if app.posts.pending_delete.is_some() {
        posts::handle_delete_confirm(app, key);
        return;
    }

    match app.ui.mode {
        AppMode::Login | AppMode::Signup => auth::handle_key(app, key),
        AppMode::PostList => posts::handle_list_key(app, key),
        AppMode::PostDetail => posts::handle_detail_key(app, key),
        AppMode::Compose | AppMode::Edit => compose::handle_key(app, key),
    }
}
