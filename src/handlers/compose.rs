use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::state::{AppMode, ComposeFocus, Route};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if app.posts.saving {
        // No edits or resubmits while the save is in flight.
        return;
    }
    match key.code {
        KeyCode::Tab => {
            app.posts.compose_focus = match app.posts.compose_focus {
                ComposeFocus::Title => ComposeFocus::Content,
                ComposeFocus::Content => ComposeFocus::Submit,
                ComposeFocus::Submit => ComposeFocus::Title,
            };
        }
        KeyCode::BackTab => {
            app.posts.compose_focus = match app.posts.compose_focus {
                ComposeFocus::Title => ComposeFocus::Submit,
                ComposeFocus::Content => ComposeFocus::Title,
                ComposeFocus::Submit => ComposeFocus::Content,
            };
        }
        KeyCode::Char(c) => match app.posts.compose_focus {
            ComposeFocus::Title => app.posts.draft_title.push(c),
            ComposeFocus::Content => app.posts.draft_content.push(c),
            ComposeFocus::Submit => {}
        },
        KeyCode::Backspace => match app.posts.compose_focus {
            ComposeFocus::Title => {
                app.posts.draft_title.pop();
            }
            ComposeFocus::Content => {
                app.posts.draft_content.pop();
            }
            ComposeFocus::Submit => {}
        },
        KeyCode::Enter => match app.posts.compose_focus {
            ComposeFocus::Title => app.posts.compose_focus = ComposeFocus::Content,
            ComposeFocus::Content => app.posts.draft_content.push('\n'),
            ComposeFocus::Submit => app.submit_draft(),
        },
        KeyCode::Esc => {
            // Back out without saving: edit returns to the post, compose to
            // the listing.
            match app.ui.mode {
                AppMode::Edit => match app.posts.editing_id {
                    Some(id) => app.navigate(Route::PostDetail(id)),
                    None => app.navigate(Route::PostList),
                },
                _ => app.navigate(Route::PostList),
            }
        }
        _ => {}
    }
}
