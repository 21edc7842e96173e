//! Async REST client for the Hong Board backend.
//!
//! Every request runs on a spawned task and reports back into the main event
//! loop as an [`ApiEvent`]; nothing here touches application state directly.

use crate::model::{LoginRequest, Post, PostDraft, SignupRequest, TokenResponse};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::sync::mpsc;

/// Client-facing error taxonomy. HTTP statuses and transport failures are
/// folded into this in one place; user-visible wording is chosen per
/// operation at the app boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    NotFound,
    Unauthorized,
    Forbidden,
    Validation(String),
    /// Non-2xx response outside the mapped statuses, with the backend's
    /// `message`/`error` body field when one was present.
    Server(Option<String>),
    Network(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "not found"),
            ApiError::Unauthorized => write!(f, "unauthorized"),
            ApiError::Forbidden => write!(f, "forbidden"),
            ApiError::Validation(msg) => write!(f, "{}", msg),
            ApiError::Server(Some(msg)) => write!(f, "server error: {}", msg),
            ApiError::Server(None) => write!(f, "server error"),
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Completion of an in-flight request, delivered to the event loop.
///
/// Load completions carry the sequence number of the request that produced
/// them so stale responses can be dropped (last issued load wins).
#[derive(Debug)]
pub enum ApiEvent {
    PostsLoaded {
        seq: u64,
        result: Result<Vec<Post>, ApiError>,
    },
    PostLoaded {
        seq: u64,
        result: Result<Post, ApiError>,
    },
    PostCreated {
        result: Result<Post, ApiError>,
    },
    PostUpdated {
        id: u64,
        result: Result<Post, ApiError>,
    },
    PostDeleted {
        id: u64,
        result: Result<(), ApiError>,
    },
    LoggedIn {
        username: String,
        result: Result<TokenResponse, ApiError>,
    },
    SignedUp {
        result: Result<(), ApiError>,
    },
}

/// Handle for issuing backend requests. Cheap to clone; each request is
/// spawned and its completion sent over the channel the handle was built
/// with.
#[derive(Clone)]
pub struct ApiHandle {
    client: Client,
    base_url: String,
    offline_fallback: bool,
    tx: mpsc::UnboundedSender<ApiEvent>,
}

impl ApiHandle {
    pub fn new(base_url: String, offline_fallback: bool, tx: mpsc::UnboundedSender<ApiEvent>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            offline_fallback,
            tx,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send(&self, event: ApiEvent) {
        // The receiver disappears on teardown; a failed send only means the
        // event loop is already gone.
        let _ = self.tx.send(event);
    }

    pub fn fetch_posts(&self, seq: u64) {
        let this = self.clone();
        tokio::spawn(async move {
            tracing::debug!(seq, "GET /writes");
            let mut result = this.get_json::<Vec<Post>>(&this.url("/writes")).await;
            if this.offline_fallback {
                if let Err(ApiError::Network(msg)) = &result {
                    tracing::warn!(%msg, "backend unreachable, serving seed posts");
                    result = Ok(seed_posts());
                }
            }
            this.send(ApiEvent::PostsLoaded { seq, result });
        });
    }

    pub fn fetch_post(&self, seq: u64, id: u64) {
        let this = self.clone();
        tokio::spawn(async move {
            tracing::debug!(seq, id, "GET /writes/{{id}}");
            let mut result = this.get_json::<Post>(&this.url(&format!("/writes/{}", id))).await;
            if this.offline_fallback {
                if let Err(ApiError::Network(msg)) = &result {
                    tracing::warn!(%msg, id, "backend unreachable, serving seed post");
                    result = seed_posts()
                        .into_iter()
                        .find(|p| p.id == id)
                        .ok_or(ApiError::NotFound);
                }
            }
            this.send(ApiEvent::PostLoaded { seq, result });
        });
    }

    pub fn create_post(&self, token: String, draft: PostDraft) {
        let this = self.clone();
        tokio::spawn(async move {
            tracing::debug!("POST /writes");
            let result = async {
                let resp = this
                    .client
                    .post(this.url("/writes"))
                    .bearer_auth(&token)
                    .json(&draft)
                    .send()
                    .await
                    .map_err(transport_error)?;
                parse_json::<Post>(check_status(resp).await?).await
            }
            .await;
            this.send(ApiEvent::PostCreated { result });
        });
    }

    pub fn update_post(&self, token: String, id: u64, draft: PostDraft) {
        let this = self.clone();
        tokio::spawn(async move {
            tracing::debug!(id, "PUT /writes/{{id}}");
            let result = async {
                let resp = this
                    .client
                    .put(this.url(&format!("/writes/{}", id)))
                    .bearer_auth(&token)
                    .json(&draft)
                    .send()
                    .await
                    .map_err(transport_error)?;
                parse_json::<Post>(check_status(resp).await?).await
            }
            .await;
            this.send(ApiEvent::PostUpdated { id, result });
        });
    }

    pub fn delete_post(&self, token: String, id: u64) {
        let this = self.clone();
        tokio::spawn(async move {
            tracing::debug!(id, "DELETE /writes/{{id}}");
            let result = async {
                let resp = this
                    .client
                    .delete(this.url(&format!("/writes/{}", id)))
                    .bearer_auth(&token)
                    .send()
                    .await
                    .map_err(transport_error)?;
                check_status(resp).await.map(|_| ())
            }
            .await;
            this.send(ApiEvent::PostDeleted { id, result });
        });
    }

    pub fn login(&self, request: LoginRequest) {
        let this = self.clone();
        let username = request.username.clone();
        tokio::spawn(async move {
            tracing::debug!(%username, "POST /users/login");
            let result = async {
                let resp = this
                    .client
                    .post(this.url("/users/login"))
                    .json(&request)
                    .send()
                    .await
                    .map_err(transport_error)?;
                parse_json::<TokenResponse>(check_status(resp).await?).await
            }
            .await;
            this.send(ApiEvent::LoggedIn { username, result });
        });
    }

    pub fn signup(&self, request: SignupRequest) {
        let this = self.clone();
        tokio::spawn(async move {
            tracing::debug!(username = %request.username, "POST /users");
            let result = async {
                let resp = this
                    .client
                    .post(this.url("/users"))
                    .json(&request)
                    .send()
                    .await
                    .map_err(transport_error)?;
                check_status(resp).await.map(|_| ())
            }
            .await;
            this.send(ApiEvent::SignedUp { result });
        });
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let resp = self.client.get(url).send().await.map_err(transport_error)?;
        parse_json(check_status(resp).await?).await
    }
}

fn transport_error(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

async fn parse_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Network(format!("malformed response: {}", e)))
}

/// Error body shape used by the backend; some routes use `message`, the
/// older ones `error`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}

async fn check_status(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    tracing::warn!(status = %status, url = %resp.url(), "request failed");
    Err(match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound,
        _ => {
            let message = resp
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(ErrorBody::into_message);
            ApiError::Server(message)
        }
    })
}

/// Fixed posts served instead of a transport error when `offline_fallback`
/// is enabled, mirroring the development fallback of the hosted board.
pub fn seed_posts() -> Vec<Post> {
    let seed = [
        (1, "게시판 첫 글입니다", "여기는 게시판의 첫 글입니다. 내용을 간단히 소개합니다."),
        (2, "두 번째 글입니다", "두 번째 글 요약입니다. 게시판을 사용해보세요!"),
        (3, "세 번째 글입니다", "게시판 사용법을 알려드릴게요!"),
        (4, "네 번째 글입니다", "자유롭게 글을 작성해보세요."),
        (5, "다섯 번째 글입니다", "게시판 꾸미기 팁입니다"),
        (6, "여섯 번째 글입니다", "더 많은 글을 올려보세요."),
    ];
    seed.iter()
        .map(|(id, title, content)| Post {
            id: *id,
            title: (*title).to_string(),
            content: (*content).to_string(),
            author_username: None,
            picture: None,
            date: None,
            summary: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_prefers_message_over_error() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message": "m", "error": "e"}"#).unwrap();
        assert_eq!(body.into_message(), Some("m".to_string()));

        let body: ErrorBody = serde_json::from_str(r#"{"error": "e"}"#).unwrap();
        assert_eq!(body.into_message(), Some("e".to_string()));

        let body: ErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(body.into_message(), None);
    }

    #[test]
    fn seed_posts_have_distinct_ids() {
        let posts = seed_posts();
        assert_eq!(posts.len(), 6);
        for (i, post) in posts.iter().enumerate() {
            assert_eq!(post.id, i as u64 + 1);
            assert!(!post.title.is_empty());
        }
    }
}
