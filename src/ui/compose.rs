//! Compose and edit form.

use ratatui::{Frame, layout::{Rect, Layout, Constraint, Alignment}, style::{Style, Color}, widgets::{Block, Borders, Paragraph, Wrap}, text::Span};

use crate::app::App;
use crate::state::{AppMode, ComposeFocus};

pub fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let title = if app.ui.mode == AppMode::Edit { "게시글 수정" } else { "게시글 작성" };
    let outer_block = Block::default().title(title).borders(Borders::ALL);
    f.render_widget(outer_block, area);

    let chunks = Layout::default().margin(2).constraints([
        Constraint::Length(3), Constraint::Min(3), Constraint::Length(3)
    ]).split(area);

    let title_style = if app.posts.compose_focus == ComposeFocus::Title {
        Style::default().fg(Color::Yellow)
    } else { Style::default() };
    f.render_widget(
        Paragraph::new(app.posts.draft_title.as_str())
            .block(Block::default().borders(Borders::ALL).title("제목"))
            .style(title_style),
        chunks[0],
    );

    let content_style = if app.posts.compose_focus == ComposeFocus::Content {
        Style::default().fg(Color::Yellow)
    } else { Style::default() };
    f.render_widget(
        Paragraph::new(app.posts.draft_content.as_str())
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("내용"))
            .style(content_style),
        chunks[1],
    );

    let submit_label = if app.posts.saving {
        "저장 중..."
    } else if app.ui.mode == AppMode::Edit {
        "[ 수정하기 ]"
    } else {
        "[ 작성하기 ]"
    };
    let submit_style = if app.posts.saving {
        Style::default().fg(Color::DarkGray)
    } else if app.posts.compose_focus == ComposeFocus::Submit {
        Style::default().bg(Color::Cyan).fg(Color::Black)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new(Span::styled(submit_label, submit_style)).alignment(Alignment::Center),
        chunks[2],
    );

    if app.posts.compose_focus == ComposeFocus::Title {
        f.set_cursor_position((chunks[0].x + app.posts.draft_title.len() as u16 + 1, chunks[0].y + 1));
    } else if app.posts.compose_focus == ComposeFocus::Content {
        let lines = app.posts.draft_content.matches('\n').count() as u16;
        let last = app.posts.draft_content.split('\n').last().unwrap_or("");
        f.set_cursor_position((chunks[1].x + last.len() as u16 + 1, chunks[1].y + lines + 1));
    }
}
