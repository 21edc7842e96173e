/// Focusable elements on the login and signup screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFocus {
    LoginUsername,
    LoginPassword,
    LoginSubmit,
    LoginToSignup,
    SignupEmail,
    SignupUsername,
    SignupPassword,
    SignupConfirm,
    SignupSubmit,
    SignupToLogin,
}

/// State management for the authentication forms.
pub struct AuthState {
    pub username_input: String,
    pub password_input: String,
    pub email_input: String,
    pub confirm_input: String,
    pub focus: InputFocus,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            username_input: String::new(),
            password_input: String::new(),
            email_input: String::new(),
            confirm_input: String::new(),
            focus: InputFocus::LoginUsername,
        }
    }
}

const LOGIN_ORDER: [InputFocus; 4] = [
    InputFocus::LoginUsername,
    InputFocus::LoginPassword,
    InputFocus::LoginSubmit,
    InputFocus::LoginToSignup,
];

const SIGNUP_ORDER: [InputFocus; 6] = [
    InputFocus::SignupEmail,
    InputFocus::SignupUsername,
    InputFocus::SignupPassword,
    InputFocus::SignupConfirm,
    InputFocus::SignupSubmit,
    InputFocus::SignupToLogin,
];

impl AuthState {
    pub fn clear_inputs(&mut self) {
        self.username_input.clear();
        self.password_input.clear();
        self.email_input.clear();
        self.confirm_input.clear();
    }

    pub fn focus_login(&mut self) {
        self.clear_inputs();
        self.focus = InputFocus::LoginUsername;
    }

    pub fn focus_signup(&mut self) {
        self.clear_inputs();
        self.focus = InputFocus::SignupEmail;
    }

    fn focus_order(is_login: bool) -> &'static [InputFocus] {
        if is_login {
            &LOGIN_ORDER
        } else {
            &SIGNUP_ORDER
        }
    }

    pub fn focus_next(&mut self, is_login: bool) {
        let order = Self::focus_order(is_login);
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + 1) % order.len()];
    }

    pub fn focus_prev(&mut self, is_login: bool) {
        let order = Self::focus_order(is_login);
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + order.len() - 1) % order.len()];
    }

    /// The text field the focus currently sits on, if any.
    pub fn active_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            InputFocus::LoginUsername | InputFocus::SignupUsername => Some(&mut self.username_input),
            InputFocus::LoginPassword | InputFocus::SignupPassword => Some(&mut self.password_input),
            InputFocus::SignupEmail => Some(&mut self.email_input),
            InputFocus::SignupConfirm => Some(&mut self.confirm_input),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_cycles_login_focus() {
        let mut auth = AuthState::default();
        assert_eq!(auth.focus, InputFocus::LoginUsername);
        auth.focus_next(true);
        assert_eq!(auth.focus, InputFocus::LoginPassword);
        auth.focus_next(true);
        auth.focus_next(true);
        auth.focus_next(true);
        assert_eq!(auth.focus, InputFocus::LoginUsername);
        auth.focus_prev(true);
        assert_eq!(auth.focus, InputFocus::LoginToSignup);
    }

    #[test]
    fn switching_forms_clears_inputs() {
        let mut auth = AuthState::default();
        auth.username_input.push_str("hong");
        auth.password_input.push_str("pw");
        auth.focus_signup();
        assert_eq!(auth.username_input, "");
        assert_eq!(auth.password_input, "");
        assert_eq!(auth.focus, InputFocus::SignupEmail);
    }
}
