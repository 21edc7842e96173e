use crate::model::Post;
use crate::state::{Resource, PAGE_SIZE};
use ratatui::widgets::TableState;

/// Focusable elements on the compose/edit screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeFocus {
    Title,
    Content,
    Submit,
}

/// State management for the post listing, detail, and compose screens.
///
/// `list_seq`/`detail_seq` tag the latest issued load of each resource;
/// completions carrying an older sequence are stale and must be dropped.
pub struct PostsState {
    pub list: Resource<Vec<Post>>,
    pub list_seq: u64,
    /// 1-indexed page into the fully loaded collection.
    pub current_page: usize,
    pub table_state: TableState,
    /// Toast "refreshed" on the next successful list load (set when a reload
    /// was requested while posts were already on screen).
    pub refresh_notice_pending: bool,

    pub detail: Resource<Post>,
    pub detail_seq: u64,
    pub current_post_id: Option<u64>,

    pub draft_title: String,
    pub draft_content: String,
    /// `Some(id)` while editing an existing post, `None` while composing.
    pub editing_id: Option<u64>,
    pub compose_focus: ComposeFocus,
    pub saving: bool,

    pub pending_delete: Option<u64>,
}

impl Default for PostsState {
    fn default() -> Self {
        Self {
            list: Resource::Loading,
            list_seq: 0,
            current_page: 1,
            table_state: TableState::default(),
            refresh_notice_pending: false,
            detail: Resource::Loading,
            detail_seq: 0,
            current_post_id: None,
            draft_title: String::new(),
            draft_content: String::new(),
            editing_id: None,
            compose_focus: ComposeFocus::Title,
            saving: false,
            pending_delete: None,
        }
    }
}

impl PostsState {
    /// Loaded posts, or an empty slice while loading/failed.
    pub fn posts(&self) -> &[Post] {
        self.list.ready().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total_pages(&self) -> usize {
        let count = self.posts().len();
        ((count + PAGE_SIZE - 1) / PAGE_SIZE).max(1)
    }

    pub fn page_start(&self) -> usize {
        (self.current_page - 1) * PAGE_SIZE
    }

    /// The slice of posts shown on the current page.
    pub fn page_slice(&self) -> &[Post] {
        let posts = self.posts();
        let start = self.page_start().min(posts.len());
        let end = (start + PAGE_SIZE).min(posts.len());
        &posts[start..end]
    }

    /// Advance one page; no-op at the last page.
    pub fn go_next(&mut self) {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
            self.reset_selection();
        }
    }

    /// Go back one page; no-op at the first page.
    pub fn go_prev(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
            self.reset_selection();
        }
    }

    /// Pull the page index back into range after the collection shrank.
    pub fn clamp_page(&mut self) {
        let total = self.total_pages();
        if self.current_page > total {
            self.current_page = total;
        }
        if self.current_page == 0 {
            self.current_page = 1;
        }
    }

    pub fn reset_selection(&mut self) {
        if self.page_slice().is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(0));
        }
    }

    pub fn select_next(&mut self) {
        let len = self.page_slice().len();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        self.table_state.select(Some((current + 1) % len));
    }

    pub fn select_prev(&mut self) {
        let len = self.page_slice().len();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        self.table_state.select(Some((current + len - 1) % len));
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.page_slice().get(self.table_state.selected()?)
    }

    pub fn start_compose(&mut self) {
        self.editing_id = None;
        self.draft_title.clear();
        self.draft_content.clear();
        self.compose_focus = ComposeFocus::Title;
        self.saving = false;
    }

    pub fn start_edit(&mut self, post: &Post) {
        self.editing_id = Some(post.id);
        self.draft_title = post.title.clone();
        self.draft_content = post.content.clone();
        self.compose_focus = ComposeFocus::Title;
        self.saving = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64) -> Post {
        Post {
            id,
            title: format!("title {}", id),
            content: format!("content {}", id),
            author_username: None,
            picture: None,
            date: None,
            summary: None,
        }
    }

    fn state_with(count: u64) -> PostsState {
        let mut state = PostsState::default();
        state.list = Resource::Ready((1..=count).map(post).collect());
        state
    }

    #[test]
    fn total_pages_is_ceiling_with_minimum_one() {
        assert_eq!(state_with(0).total_pages(), 1);
        assert_eq!(state_with(1).total_pages(), 1);
        assert_eq!(state_with(5).total_pages(), 1);
        assert_eq!(state_with(6).total_pages(), 2);
        assert_eq!(state_with(11).total_pages(), 3);
    }

    #[test]
    fn page_slices_reconstruct_collection_exactly_once() {
        for count in [0u64, 1, 4, 5, 6, 12, 17] {
            let mut state = state_with(count);
            let mut seen: Vec<Post> = Vec::new();
            for page in 1..=state.total_pages() {
                state.current_page = page;
                seen.extend_from_slice(state.page_slice());
            }
            assert_eq!(seen.as_slice(), state.posts(), "count = {}", count);
        }
    }

    #[test]
    fn paging_clamps_at_both_boundaries() {
        let mut state = state_with(12); // 3 pages

        state.go_prev();
        assert_eq!(state.current_page, 1);

        state.go_next();
        state.go_next();
        assert_eq!(state.current_page, 3);
        state.go_next();
        assert_eq!(state.current_page, 3);
    }

    #[test]
    fn clamp_page_after_collection_shrinks() {
        let mut state = state_with(12);
        state.current_page = 3;
        state.list = Resource::Ready((1..=4).map(post).collect());
        state.clamp_page();
        assert_eq!(state.current_page, 1);
        assert_eq!(state.page_slice().len(), 4);
    }

    #[test]
    fn selection_wraps_within_current_page() {
        let mut state = state_with(7);
        state.current_page = 2; // 2 posts on this page
        state.reset_selection();
        assert_eq!(state.selected_post().unwrap().id, 6);
        state.select_next();
        assert_eq!(state.selected_post().unwrap().id, 7);
        state.select_next();
        assert_eq!(state.selected_post().unwrap().id, 6);
        state.select_prev();
        assert_eq!(state.selected_post().unwrap().id, 7);
    }

    #[test]
    fn start_edit_prefills_draft() {
        let mut state = PostsState::default();
        let p = post(3);
        state.start_edit(&p);
        assert_eq!(state.editing_id, Some(3));
        assert_eq!(state.draft_title, "title 3");
        assert_eq!(state.draft_content, "content 3");

        state.start_compose();
        assert_eq!(state.editing_id, None);
        assert_eq!(state.draft_title, "");
    }
}
