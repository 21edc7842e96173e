//! Popups: toast notification and the delete confirmation.

use ratatui::{Frame, layout::{Rect, Layout, Constraint, Direction, Alignment}, style::{Style, Color, Modifier}, widgets::{Block, Borders, BorderType, Clear, Paragraph, Wrap}, text::Span};

use crate::app::App;
use crate::state::Severity;

pub fn draw_centered_rect(r: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let popup_layout = Layout::default().direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2), Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ]).split(r);
    Layout::default().direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2), Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ]).split(popup_layout[1])[1]
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
        Severity::Info => Color::Cyan,
    }
}

/// Toast in the top-right corner; any keypress or the auto-hide timer
/// removes it.
pub fn draw_toast(f: &mut Frame, app: &App) {
    let Some(toast) = &app.notifications.current else {
        return;
    };
    let width = (toast.message.chars().count() as u16 + 4).clamp(20, 60);
    let screen = f.area();
    let area = Rect {
        x: screen.width.saturating_sub(width + 1),
        y: 1,
        width: width.min(screen.width),
        height: 4.min(screen.height),
    };

    let color = severity_color(toast.severity);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .title("알림");
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(Span::styled(toast.message.as_str(), Style::default().fg(color)))
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

pub fn draw_delete_confirm(f: &mut Frame) {
    let area = draw_centered_rect(f.area(), 40, 20);
    let block = Block::default()
        .title(Span::styled(
            "게시글 삭제",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Double);

    let text = "정말로 이 게시글을 삭제하시겠습니까?\n\nEnter/y: 삭제  Esc/n: 취소";
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
