use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::state::Route;

pub fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.posts.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.posts.select_next(),
        KeyCode::Left | KeyCode::Char('h') => app.posts.go_prev(),
        KeyCode::Right | KeyCode::Char('l') => app.posts.go_next(),
        KeyCode::Enter => {
            if let Some(post) = app.posts.selected_post() {
                let id = post.id;
                app.navigate(Route::PostDetail(id));
            }
        }
        KeyCode::Char('n') => {
            if app.session.is_logged_in() {
                app.open_compose();
            } else {
                app.set_notification("로그인이 필요합니다.", crate::state::Severity::Error);
            }
        }
        KeyCode::Char('r') => app.load_posts(),
        KeyCode::Char('d') => {
            if let Some(post) = app.posts.selected_post() {
                let id = post.id;
                app.request_delete(id);
            }
        }
        KeyCode::Char('o') => app.logout(),
        KeyCode::Esc | KeyCode::Char('q') => app.ui.quit(),
        _ => {}
    }
}

pub fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('e') => app.open_edit(),
        KeyCode::Char('d') => {
            if let Some(post) = app.posts.detail.ready() {
                let id = post.id;
                app.request_delete(id);
            }
        }
        KeyCode::Char('r') => {
            if let Some(id) = app.posts.current_post_id {
                app.load_post(id);
            }
        }
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => {
            app.navigate(Route::PostList);
        }
        _ => {}
    }
}

/// Input while the delete confirmation popup is open.
pub fn handle_delete_confirm(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') => app.delete_confirmed(),
        KeyCode::Esc | KeyCode::Char('n') => app.cancel_delete(),
        _ => {}
    }
}
