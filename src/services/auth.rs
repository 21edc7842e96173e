use crate::api::ApiError;
use crate::model::{LoginRequest, SignupRequest};

/// Validation for the authentication forms.
pub struct AuthService;

impl AuthService {
    pub fn validate_login(username: &str, password: &str) -> Result<LoginRequest, ApiError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(ApiError::Validation(
                "아이디와 비밀번호를 입력해주세요.".to_string(),
            ));
        }
        Ok(LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    pub fn validate_signup(
        email: &str,
        username: &str,
        password: &str,
        confirm: &str,
    ) -> Result<SignupRequest, ApiError> {
        let email = email.trim();
        let username = username.trim();
        if email.is_empty() || username.is_empty() || password.is_empty() {
            return Err(ApiError::Validation(
                "모든 항목을 입력해주세요.".to_string(),
            ));
        }
        if password != confirm {
            return Err(ApiError::Validation(
                "비밀번호가 일치하지 않습니다.".to_string(),
            ));
        }
        Ok(SignupRequest {
            email: email.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_requires_both_fields() {
        assert!(AuthService::validate_login("", "pw").is_err());
        assert!(AuthService::validate_login("hong", "").is_err());
        let req = AuthService::validate_login(" hong ", "pw").unwrap();
        assert_eq!(req.username, "hong");
    }

    #[test]
    fn signup_password_mismatch_short_circuits() {
        let err =
            AuthService::validate_signup("a@b.c", "hong", "pw1", "pw2").unwrap_err();
        assert_eq!(err.to_string(), "비밀번호가 일치하지 않습니다.");
    }

    #[test]
    fn signup_requires_all_fields() {
        assert!(AuthService::validate_signup("", "hong", "pw", "pw").is_err());
        assert!(AuthService::validate_signup("a@b.c", "", "pw", "pw").is_err());
        assert!(AuthService::validate_signup("a@b.c", "hong", "", "").is_err());
        assert!(AuthService::validate_signup("a@b.c", "hong", "pw", "pw").is_ok());
    }
}
