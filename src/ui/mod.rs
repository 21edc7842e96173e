//! Screen rendering. One module per screen plus shared popups; `draw` is the
//! single entry point called each frame.

mod auth;
mod compose;
mod popups;
mod posts;

use ratatui::{Frame, layout::{Layout, Constraint, Direction, Alignment, Rect}, style::{Style, Color, Modifier}, widgets::Paragraph, text::{Line, Span}};

use crate::app::App;
use crate::state::AppMode;

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1), Constraint::Length(1)])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    match app.ui.mode {
        AppMode::Login => auth::draw_login(f, app, chunks[1]),
        AppMode::Signup => auth::draw_signup(f, app, chunks[1]),
        AppMode::PostList => posts::draw_list(f, app, chunks[1]),
        AppMode::PostDetail => posts::draw_detail(f, app, chunks[1]),
        AppMode::Compose | AppMode::Edit => compose::draw(f, app, chunks[1]),
    }

    draw_footer(f, app, chunks[2]);

    if app.posts.pending_delete.is_some() {
        popups::draw_delete_confirm(f);
    }
    if app.notifications.is_visible() {
        popups::draw_toast(f, app);
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        "💗 Hong Board",
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    )];
    if let Some(username) = app.session.username() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("안녕하세요, {}님!", username),
            Style::default().fg(Color::Gray),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    if app.ui.nav_pending().is_some() {
        f.render_widget(
            Paragraph::new("잠시 후 이동합니다...").style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }
    let help = match app.ui.mode {
        AppMode::Login | AppMode::Signup => "Tab: 이동 | Enter: 선택 | Ctrl+C: 종료",
        AppMode::PostList => {
            "↑/↓: 선택 | ←/→: 페이지 | Enter: 보기 | n: 글쓰기 | r: 새로고침 | d: 삭제 | o: 로그아웃 | q: 종료"
        }
        AppMode::PostDetail => "e: 수정 | d: 삭제 | r: 새로고침 | Esc: 목록으로",
        AppMode::Compose | AppMode::Edit => "Tab: 이동 | Enter: 다음/저장 | Esc: 취소",
    };
    f.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
