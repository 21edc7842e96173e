use crate::api::ApiError;
use crate::model::PostDraft;

/// Validation and ownership checks for post mutations.
pub struct PostService;

impl PostService {
    /// Client-side validation, run before any network call.
    pub fn validate_draft(title: &str, content: &str) -> Result<PostDraft, ApiError> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() || content.is_empty() {
            return Err(ApiError::Validation(
                "제목과 내용을 모두 입력해주세요.".to_string(),
            ));
        }
        Ok(PostDraft {
            title: title.to_string(),
            content: content.to_string(),
        })
    }

    /// Best-effort ownership pre-check to skip a doomed round trip. The
    /// backend stays authoritative: a 403 response must produce the same
    /// user-visible outcome as a `false` here.
    pub fn can_modify(author: Option<&str>, current_user: Option<&str>) -> bool {
        match (author, current_user) {
            (Some(author), Some(user)) => author == user,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_requires_title_and_content() {
        assert!(PostService::validate_draft("", "c").is_err());
        assert!(PostService::validate_draft("t", "").is_err());
        assert!(PostService::validate_draft("  ", "\n").is_err());

        let err = PostService::validate_draft("", "").unwrap_err();
        assert_eq!(err.to_string(), "제목과 내용을 모두 입력해주세요.");
    }

    #[test]
    fn draft_is_trimmed() {
        let draft = PostService::validate_draft(" 제목 ", " 내용\n").unwrap();
        assert_eq!(draft.title, "제목");
        assert_eq!(draft.content, "내용");
    }

    #[test]
    fn ownership_requires_matching_names() {
        assert!(PostService::can_modify(Some("hong"), Some("hong")));
        assert!(!PostService::can_modify(Some("hong"), Some("kim")));
        assert!(!PostService::can_modify(None, Some("hong")));
        assert!(!PostService::can_modify(Some("hong"), None));
    }
}
