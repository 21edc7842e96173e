use serde::{Deserialize, Deserializer, Serialize};

// --- Data Structures ---

/// A bulletin-board post as returned by the `/writes` endpoints.
///
/// The backend is loose about the wire shape: the id may arrive as a JSON
/// number or a numeric string, and every field except the id may be missing.
/// Deserialization normalizes all of that so the rest of the client never
/// sees a half-formed post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(deserialize_with = "flexible_id")]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Post {
    /// Author name for display; posts without an author render a placeholder.
    pub fn author_display(&self) -> &str {
        self.author_username.as_deref().unwrap_or("작성자 없음")
    }
}

/// Body for POST/PUT `/writes`. Title and content are stored pre-trimmed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Successful login response. The backend always sends the token; the
/// username is echoed back by some deployments only.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// Accept a post id as either a JSON number or a numeric string.
fn flexible_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Num(u64),
        Str(String),
    }

    match Repr::deserialize(deserializer)? {
        Repr::Num(n) => Ok(n),
        Repr::Str(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid post id: {:?}", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_id_accepts_number_and_string() {
        let a: Post = serde_json::from_str(r#"{"id": 7, "title": "t", "content": "c"}"#).unwrap();
        let b: Post = serde_json::from_str(r#"{"id": "7", "title": "t", "content": "c"}"#).unwrap();
        assert_eq!(a.id, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn post_id_rejects_non_numeric_string() {
        let res = serde_json::from_str::<Post>(r#"{"id": "seven"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn missing_optional_fields_normalize_to_defaults() {
        let post: Post = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(post.title, "");
        assert_eq!(post.content, "");
        assert_eq!(post.author_username, None);
        assert_eq!(post.author_display(), "작성자 없음");
    }

    #[test]
    fn author_display_uses_username_when_present() {
        let post: Post = serde_json::from_str(
            r#"{"id": 2, "title": "t", "content": "c", "authorUsername": "hong"}"#,
        )
        .unwrap();
        assert_eq!(post.author_display(), "hong");
    }

    #[test]
    fn token_response_username_is_optional() {
        let res: TokenResponse = serde_json::from_str(r#"{"token": "abc"}"#).unwrap();
        assert_eq!(res.token, "abc");
        assert_eq!(res.username, None);
    }
}
