use crate::api::{ApiError, ApiEvent, ApiHandle};
use crate::services::auth::AuthService;
use crate::services::post::PostService;
use crate::session::Session;
use crate::state::{
    AppMode, AuthState, NotificationState, PostsState, Resource, Route, Severity, UiState,
    NOT_FOUND_NAV_DELAY_MS, SUCCESS_NAV_DELAY_MS,
};

/// The application: all screen state plus the handles needed to fetch and
/// mutate posts. One instance lives for the whole process; every change to
/// it happens on the event-loop task.
pub struct App {
    pub ui: UiState,
    pub auth: AuthState,
    pub posts: PostsState,
    pub notifications: NotificationState,
    pub session: Session,
    pub api: ApiHandle,
}

impl App {
    pub fn new(api: ApiHandle, session: Session) -> App {
        App {
            ui: UiState::default(),
            auth: AuthState::default(),
            posts: PostsState::default(),
            notifications: NotificationState::default(),
            session,
            api,
        }
    }

    pub fn set_notification(&mut self, message: impl Into<String>, severity: Severity) {
        self.notifications
            .show(message, severity, self.ui.tick_count);
    }

    /// Immediate navigation. Entering a data screen issues its load before
    /// the next frame renders, so the screen starts out in `Loading`.
    pub fn navigate(&mut self, route: Route) {
        match route {
            Route::Login => {
                self.ui.set_mode(AppMode::Login);
                self.auth.focus_login();
            }
            Route::PostList => {
                self.ui.set_mode(AppMode::PostList);
                self.load_posts();
            }
            Route::PostDetail(id) => {
                self.ui.set_mode(AppMode::PostDetail);
                self.load_post(id);
            }
        }
    }

    // --- Loads ---

    pub fn load_posts(&mut self) {
        // Only toast "refreshed" when there was already something on screen;
        // the first load stays quiet.
        self.posts.refresh_notice_pending =
            matches!(self.posts.list.ready(), Some(posts) if !posts.is_empty());
        self.posts.list = Resource::Loading;
        self.posts.list_seq += 1;
        self.api.fetch_posts(self.posts.list_seq);
    }

    pub fn load_post(&mut self, id: u64) {
        self.posts.current_post_id = Some(id);
        self.posts.detail = Resource::Loading;
        self.posts.detail_seq += 1;
        self.api.fetch_post(self.posts.detail_seq, id);
    }

    // --- Compose / edit ---

    pub fn open_compose(&mut self) {
        self.posts.start_compose();
        self.ui.set_mode(AppMode::Compose);
    }

    /// Enter edit mode for the currently viewed post.
    pub fn open_edit(&mut self) {
        let Some(post) = self.posts.detail.ready().cloned() else {
            return;
        };
        self.posts.start_edit(&post);
        self.ui.set_mode(AppMode::Edit);
    }

    /// Submit the compose/edit form: create when no editing target, update
    /// otherwise. Credential and validation failures short-circuit without a
    /// network call.
    pub fn submit_draft(&mut self) {
        if self.posts.saving {
            return;
        }
        let Some(token) = self.session.token().map(str::to_string) else {
            self.set_notification("로그인이 필요합니다.", Severity::Error);
            return;
        };
        let draft =
            match PostService::validate_draft(&self.posts.draft_title, &self.posts.draft_content) {
                Ok(draft) => draft,
                Err(err) => {
                    self.set_notification(err.to_string(), Severity::Warning);
                    return;
                }
            };

        match self.posts.editing_id {
            Some(id) => {
                // Local ownership shortcut; the backend's 403 is handled the
                // same way in handle_api_event.
                if let Some(post) = self.posts.detail.ready() {
                    if !PostService::can_modify(
                        post.author_username.as_deref(),
                        self.session.username(),
                    ) {
                        self.set_notification(
                            "자신이 작성한 게시글만 수정할 수 있습니다.",
                            Severity::Warning,
                        );
                        return;
                    }
                }
                self.posts.saving = true;
                self.api.update_post(token, id, draft);
            }
            None => {
                self.posts.saving = true;
                self.api.create_post(token, draft);
            }
        }
    }

    // --- Delete ---

    pub fn request_delete(&mut self, id: u64) {
        self.posts.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.posts.pending_delete = None;
    }

    /// Run the confirmed delete. Precondition failures (no credential, post
    /// gone from the list, foreign author) never reach the network.
    pub fn delete_confirmed(&mut self) {
        let Some(id) = self.posts.pending_delete.take() else {
            return;
        };
        let Some(token) = self.session.token().map(str::to_string) else {
            self.set_notification("로그인이 필요합니다.", Severity::Error);
            return;
        };
        let listed = self.posts.posts().iter().find(|p| p.id == id);
        let viewed = self.posts.detail.ready().filter(|p| p.id == id);
        let author = match listed.or(viewed) {
            Some(post) => post.author_username.clone(),
            None => {
                self.set_notification("삭제하려는 게시글을 찾을 수 없습니다.", Severity::Error);
                return;
            }
        };
        if !PostService::can_modify(author.as_deref(), self.session.username()) {
            self.set_notification(
                "자신이 작성한 게시글만 삭제할 수 있습니다.",
                Severity::Warning,
            );
            return;
        }
        self.api.delete_post(token, id);
    }

    // --- Auth ---

    pub fn submit_login(&mut self) {
        match AuthService::validate_login(&self.auth.username_input, &self.auth.password_input) {
            Ok(request) => self.api.login(request),
            Err(err) => self.set_notification(err.to_string(), Severity::Warning),
        }
    }

    pub fn submit_signup(&mut self) {
        match AuthService::validate_signup(
            &self.auth.email_input,
            &self.auth.username_input,
            &self.auth.password_input,
            &self.auth.confirm_input,
        ) {
            Ok(request) => self.api.signup(request),
            Err(err) => self.set_notification(err.to_string(), Severity::Warning),
        }
    }

    pub fn logout(&mut self) {
        self.session.clear();
        self.set_notification("로그아웃되었습니다.", Severity::Success);
        self.ui.schedule_nav(Route::Login, SUCCESS_NAV_DELAY_MS);
    }

    // --- Completions ---

    pub fn handle_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::PostsLoaded { seq, result } => {
                if seq != self.posts.list_seq {
                    tracing::debug!(seq, latest = self.posts.list_seq, "stale list load dropped");
                    return;
                }
                let notify = self.posts.refresh_notice_pending;
                self.posts.refresh_notice_pending = false;
                match result {
                    Ok(posts) => {
                        self.posts.list = Resource::Ready(posts);
                        self.posts.clamp_page();
                        if self.posts.table_state.selected().is_none() {
                            self.posts.reset_selection();
                        }
                        if notify {
                            self.set_notification("게시글이 새로고침되었습니다.", Severity::Success);
                        }
                    }
                    Err(err) => {
                        tracing::warn!(%err, "list load failed");
                        self.posts.list = Resource::Failed(err);
                        self.set_notification("게시글을 불러오는데 실패했습니다.", Severity::Error);
                    }
                }
            }
            ApiEvent::PostLoaded { seq, result } => {
                if seq != self.posts.detail_seq {
                    tracing::debug!(seq, latest = self.posts.detail_seq, "stale detail load dropped");
                    return;
                }
                match result {
                    Ok(post) => {
                        if self.ui.mode == AppMode::Edit {
                            self.posts.start_edit(&post);
                        }
                        self.posts.detail = Resource::Ready(post);
                    }
                    Err(ApiError::NotFound) => {
                        self.posts.detail = Resource::Failed(ApiError::NotFound);
                        self.set_notification("게시글을 찾을 수 없습니다.", Severity::Error);
                        self.ui.schedule_nav(Route::PostList, NOT_FOUND_NAV_DELAY_MS);
                    }
                    Err(err) => {
                        tracing::warn!(%err, "detail load failed");
                        self.posts.detail = Resource::Failed(err);
                        self.set_notification("게시글을 불러오는데 실패했습니다.", Severity::Error);
                    }
                }
            }
            ApiEvent::PostCreated { result } => {
                self.posts.saving = false;
                match result {
                    Ok(post) => {
                        self.set_notification(
                            "게시글이 성공적으로 작성되었습니다.",
                            Severity::Success,
                        );
                        self.ui
                            .schedule_nav(Route::PostDetail(post.id), SUCCESS_NAV_DELAY_MS);
                    }
                    Err(err) => self.mutation_failed(
                        err,
                        "게시글 작성에 실패했습니다.",
                        "게시글 작성에 실패했습니다.",
                    ),
                }
            }
            ApiEvent::PostUpdated { id, result } => {
                self.posts.saving = false;
                match result {
                    Ok(_) => {
                        self.set_notification(
                            "게시글이 성공적으로 수정되었습니다.",
                            Severity::Success,
                        );
                        self.ui
                            .schedule_nav(Route::PostDetail(id), SUCCESS_NAV_DELAY_MS);
                    }
                    Err(err) => self.mutation_failed(
                        err,
                        "자신이 작성한 게시글만 수정할 수 있습니다.",
                        "게시글 수정에 실패했습니다.",
                    ),
                }
            }
            ApiEvent::PostDeleted { id, result } => match result {
                Ok(()) => {
                    tracing::info!(id, "post deleted");
                    self.set_notification("게시글이 삭제되었습니다.", Severity::Success);
                    self.load_posts();
                }
                Err(err) => self.mutation_failed(
                    err,
                    "자신이 작성한 게시글만 삭제할 수 있습니다.",
                    "게시글 삭제에 실패했습니다.",
                ),
            },
            ApiEvent::LoggedIn { username, result } => match result {
                Ok(response) => {
                    tracing::info!(%username, "login successful");
                    let username = response.username.unwrap_or(username);
                    self.session.store(response.token, username);
                    self.auth.clear_inputs();
                    self.navigate(Route::PostList);
                }
                Err(err) => {
                    tracing::warn!(%err, "login failed");
                    let message = match err {
                        ApiError::Server(Some(msg)) => msg,
                        _ => "로그인에 실패했습니다.".to_string(),
                    };
                    self.set_notification(message, Severity::Error);
                }
            },
            ApiEvent::SignedUp { result } => match result {
                Ok(()) => {
                    self.set_notification("회원가입이 완료되었습니다!", Severity::Success);
                    self.ui.schedule_nav(Route::Login, SUCCESS_NAV_DELAY_MS);
                }
                Err(err) => {
                    tracing::warn!(%err, "signup failed");
                    let message = match err {
                        ApiError::Server(Some(msg)) => msg,
                        _ => "회원가입에 실패했습니다.".to_string(),
                    };
                    self.set_notification(message, Severity::Error);
                }
            },
        }
    }

    /// Uniform status-to-toast mapping for failed mutations. The forbidden
    /// message matches the local ownership pre-check for the same operation.
    fn mutation_failed(&mut self, err: ApiError, forbidden: &str, generic: &str) {
        let (message, severity) = match err {
            ApiError::Unauthorized => ("로그인이 필요합니다.".to_string(), Severity::Error),
            ApiError::Forbidden => (forbidden.to_string(), Severity::Warning),
            ApiError::NotFound => ("게시글을 찾을 수 없습니다.".to_string(), Severity::Error),
            ApiError::Server(Some(msg)) => (msg, Severity::Error),
            _ => (generic.to_string(), Severity::Error),
        };
        self.set_notification(message, severity);
    }

    /// Advance timers: toast auto-hide and delayed navigation.
    pub fn on_tick(&mut self) {
        self.ui.tick();
        if self.notifications.should_close(self.ui.tick_count) {
            self.notifications.dismiss();
        }
        if let Some(route) = self.ui.take_due_nav() {
            self.navigate(route);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Post, TokenResponse};
    use crate::state::ms_to_ticks;
    use tokio::sync::mpsc;

    fn post(id: u64, author: Option<&str>) -> Post {
        Post {
            id,
            title: format!("title {}", id),
            content: format!("content {}", id),
            author_username: author.map(str::to_string),
            picture: None,
            date: None,
            summary: None,
        }
    }

    fn test_app() -> (App, mpsc::UnboundedReceiver<ApiEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        // Nothing listens on this port; requests issued by mistake fail fast.
        let api = ApiHandle::new("http://127.0.0.1:9".to_string(), false, tx);
        (App::new(api, Session::in_memory()), rx)
    }

    fn toast_message(app: &App) -> &str {
        &app.notifications.current.as_ref().unwrap().message
    }

    #[tokio::test]
    async fn create_without_credential_never_hits_network() {
        let (mut app, mut rx) = test_app();
        app.open_compose();
        app.posts.draft_title = "t".to_string();
        app.posts.draft_content = "c".to_string();

        app.submit_draft();

        assert!(!app.posts.saving);
        assert_eq!(toast_message(&app), "로그인이 필요합니다.");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn empty_draft_short_circuits_with_warning() {
        let (mut app, mut rx) = test_app();
        app.session.store("tok".to_string(), "hong".to_string());
        app.open_compose();

        app.submit_draft();

        assert!(!app.posts.saving);
        assert_eq!(toast_message(&app), "제목과 내용을 모두 입력해주세요.");
        assert_eq!(
            app.notifications.current.as_ref().unwrap().severity,
            Severity::Warning
        );
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn stale_list_completion_is_dropped() {
        let (mut app, _rx) = test_app();
        app.load_posts();
        app.load_posts(); // supersedes the first load

        app.handle_api_event(ApiEvent::PostsLoaded {
            seq: 1,
            result: Ok(vec![post(1, None)]),
        });
        assert!(app.posts.list.is_loading());

        app.handle_api_event(ApiEvent::PostsLoaded {
            seq: 2,
            result: Ok(vec![post(2, None)]),
        });
        assert_eq!(app.posts.posts().len(), 1);
        assert_eq!(app.posts.posts()[0].id, 2);
    }

    #[tokio::test]
    async fn detail_not_found_navigates_back_once_after_delay() {
        let (mut app, _rx) = test_app();
        app.navigate(Route::PostDetail(42));

        app.handle_api_event(ApiEvent::PostLoaded {
            seq: app.posts.detail_seq,
            result: Err(ApiError::NotFound),
        });

        assert_eq!(app.posts.detail, Resource::Failed(ApiError::NotFound));
        assert_eq!(toast_message(&app), "게시글을 찾을 수 없습니다.");
        assert_eq!(app.ui.nav_pending(), Some(Route::PostList));

        for _ in 0..ms_to_ticks(NOT_FOUND_NAV_DELAY_MS) - 1 {
            app.on_tick();
            assert_eq!(app.ui.mode, AppMode::PostDetail);
        }
        app.on_tick();
        assert_eq!(app.ui.mode, AppMode::PostList);
        assert!(app.posts.list.is_loading());
        assert_eq!(app.ui.nav_pending(), None);
    }

    #[tokio::test]
    async fn create_success_toasts_then_navigates_to_new_post() {
        let (mut app, _rx) = test_app();
        app.session.store("tok".to_string(), "hong".to_string());
        app.open_compose();

        app.handle_api_event(ApiEvent::PostCreated {
            result: Ok(post(7, Some("hong"))),
        });

        assert_eq!(toast_message(&app), "게시글이 성공적으로 작성되었습니다.");
        assert_eq!(app.ui.nav_pending(), Some(Route::PostDetail(7)));

        for _ in 0..ms_to_ticks(SUCCESS_NAV_DELAY_MS) {
            app.on_tick();
        }
        assert_eq!(app.ui.mode, AppMode::PostDetail);
        assert_eq!(app.posts.current_post_id, Some(7));
        assert!(app.posts.detail.is_loading());
    }

    #[tokio::test]
    async fn delete_forbidden_matches_local_precheck_and_skips_refresh() {
        let (mut app, mut rx) = test_app();
        app.session.store("tok".to_string(), "hong".to_string());
        app.posts.list = Resource::Ready(vec![post(5, Some("kim"))]);
        app.posts.list_seq = 1;

        // Local pre-check path.
        app.request_delete(5);
        app.delete_confirmed();
        let local = toast_message(&app).to_string();
        assert!(rx.try_recv().is_err());

        // Backend 403 path gives the identical message and no side effects.
        app.notifications.dismiss();
        app.handle_api_event(ApiEvent::PostDeleted {
            id: 5,
            result: Err(ApiError::Forbidden),
        });
        assert_eq!(toast_message(&app), local);
        assert_eq!(toast_message(&app), "자신이 작성한 게시글만 삭제할 수 있습니다.");
        assert!(!app.posts.list.is_loading());
        assert_eq!(app.ui.nav_pending(), None);
    }

    #[tokio::test]
    async fn delete_success_reloads_list_immediately_without_navigation() {
        let (mut app, _rx) = test_app();
        app.session.store("tok".to_string(), "hong".to_string());
        app.posts.list = Resource::Ready(vec![post(5, Some("hong"))]);
        app.posts.list_seq = 3;

        app.handle_api_event(ApiEvent::PostDeleted {
            id: 5,
            result: Ok(()),
        });

        assert_eq!(toast_message(&app), "게시글이 삭제되었습니다.");
        assert!(app.posts.list.is_loading());
        assert_eq!(app.posts.list_seq, 4);
        assert_eq!(app.ui.nav_pending(), None);
    }

    #[tokio::test]
    async fn unauthorized_mutation_keeps_stored_credentials() {
        let (mut app, _rx) = test_app();
        app.session.store("tok".to_string(), "hong".to_string());

        app.handle_api_event(ApiEvent::PostUpdated {
            id: 1,
            result: Err(ApiError::Unauthorized),
        });

        assert_eq!(toast_message(&app), "로그인이 필요합니다.");
        assert_eq!(app.session.token(), Some("tok"));
    }

    #[tokio::test]
    async fn login_success_stores_credentials_and_opens_listing() {
        let (mut app, _rx) = test_app();

        app.handle_api_event(ApiEvent::LoggedIn {
            username: "hong".to_string(),
            result: Ok(TokenResponse {
                token: "tok".to_string(),
                username: None,
            }),
        });

        assert_eq!(app.session.token(), Some("tok"));
        assert_eq!(app.session.username(), Some("hong"));
        assert_eq!(app.ui.mode, AppMode::PostList);
        assert!(app.posts.list.is_loading());
    }

    #[tokio::test]
    async fn refresh_notice_only_when_posts_were_on_screen() {
        let (mut app, _rx) = test_app();
        app.load_posts();
        app.handle_api_event(ApiEvent::PostsLoaded {
            seq: app.posts.list_seq,
            result: Ok(vec![post(1, None)]),
        });
        assert!(app.notifications.current.is_none());

        app.load_posts();
        app.handle_api_event(ApiEvent::PostsLoaded {
            seq: app.posts.list_seq,
            result: Ok(vec![post(1, None)]),
        });
        assert_eq!(toast_message(&app), "게시글이 새로고침되었습니다.");
    }

    #[tokio::test]
    async fn update_with_foreign_author_short_circuits() {
        let (mut app, mut rx) = test_app();
        app.session.store("tok".to_string(), "hong".to_string());
        app.posts.detail = Resource::Ready(post(3, Some("kim")));
        app.posts.start_edit(&post(3, Some("kim")));
        app.ui.set_mode(AppMode::Edit);

        app.submit_draft();

        assert!(!app.posts.saving);
        assert_eq!(toast_message(&app), "자신이 작성한 게시글만 수정할 수 있습니다.");
        assert!(rx.try_recv().is_err());
    }
}
