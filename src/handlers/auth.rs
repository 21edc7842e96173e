use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::state::{AppMode, InputFocus};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    let is_login = app.ui.mode == AppMode::Login;
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.auth.focus_next(is_login),
        KeyCode::BackTab | KeyCode::Up => app.auth.focus_prev(is_login),
        KeyCode::Char(c) => {
            if let Some(field) = app.auth.active_field_mut() {
                field.push(c);
            }
        }
        KeyCode::Backspace => {
            if let Some(field) = app.auth.active_field_mut() {
                field.pop();
            }
        }
        KeyCode::Enter => handle_enter(app),
        KeyCode::Esc => {
            if !is_login {
                // Signup backs out to login; login itself has nothing behind it.
                app.ui.set_mode(AppMode::Login);
                app.auth.focus_login();
            }
        }
        _ => {}
    }
}

/// Enter advances through the form, submits on the submit button, and
/// switches forms on the link row.
fn handle_enter(app: &mut App) {
    match app.auth.focus {
        InputFocus::LoginSubmit => app.submit_login(),
        InputFocus::SignupSubmit => app.submit_signup(),
        InputFocus::LoginToSignup => {
            app.ui.set_mode(AppMode::Signup);
            app.auth.focus_signup();
        }
        InputFocus::SignupToLogin => {
            app.ui.set_mode(AppMode::Login);
            app.auth.focus_login();
        }
        InputFocus::LoginPassword => app.submit_login(),
        InputFocus::SignupConfirm => app.submit_signup(),
        _ => {
            let is_login = app.ui.mode == AppMode::Login;
            app.auth.focus_next(is_login);
        }
    }
}
