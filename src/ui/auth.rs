//! Login and signup forms.

use ratatui::{Frame, layout::{Rect, Layout, Constraint}, style::{Style, Color}, widgets::{Block, Paragraph, Borders}, text::Span};
use ratatui::prelude::{Alignment, Direction};

use crate::app::App;
use crate::state::InputFocus;

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn button_style(focused: bool, bg: Color) -> Style {
    if focused {
        Style::default().bg(bg).fg(Color::Black)
    } else {
        Style::default()
    }
}

pub fn draw_login(f: &mut Frame, app: &mut App, area: Rect) {
    let outer_block = Block::default().title("로그인").borders(Borders::ALL);
    f.render_widget(outer_block, area);
    let chunks = Layout::default().margin(2).constraints([
        Constraint::Length(3), Constraint::Length(3), Constraint::Min(1)
    ]).split(area);

    f.render_widget(
        Paragraph::new(app.auth.username_input.as_str())
            .block(Block::default().borders(Borders::ALL).title("아이디"))
            .style(field_style(app.auth.focus == InputFocus::LoginUsername)),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new("*".repeat(app.auth.password_input.len()))
            .block(Block::default().borders(Borders::ALL).title("비밀번호"))
            .style(field_style(app.auth.focus == InputFocus::LoginPassword)),
        chunks[1],
    );

    let button_area = Layout::default().margin(1).constraints([Constraint::Length(3)]).split(chunks[2])[0];
    let button_chunks = Layout::default().direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)]).split(button_area);

    f.render_widget(
        Paragraph::new(Span::styled(
            "[ 로그인 ]",
            button_style(app.auth.focus == InputFocus::LoginSubmit, Color::Cyan),
        ))
        .alignment(Alignment::Center),
        button_chunks[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            "[ 회원가입 ]",
            button_style(app.auth.focus == InputFocus::LoginToSignup, Color::Magenta),
        ))
        .alignment(Alignment::Center),
        button_chunks[1],
    );

    match app.auth.focus {
        InputFocus::LoginUsername => {
            f.set_cursor_position((chunks[0].x + app.auth.username_input.len() as u16 + 1, chunks[0].y + 1));
        }
        InputFocus::LoginPassword => {
            f.set_cursor_position((chunks[1].x + app.auth.password_input.len() as u16 + 1, chunks[1].y + 1));
        }
        _ => {}
    }
}

pub fn draw_signup(f: &mut Frame, app: &mut App, area: Rect) {
    let outer_block = Block::default().title("회원가입").borders(Borders::ALL);
    f.render_widget(outer_block, area);
    let chunks = Layout::default().margin(2).constraints([
        Constraint::Length(3), Constraint::Length(3), Constraint::Length(3), Constraint::Length(3), Constraint::Min(1)
    ]).split(area);

    f.render_widget(
        Paragraph::new(app.auth.email_input.as_str())
            .block(Block::default().borders(Borders::ALL).title("이메일"))
            .style(field_style(app.auth.focus == InputFocus::SignupEmail)),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(app.auth.username_input.as_str())
            .block(Block::default().borders(Borders::ALL).title("아이디"))
            .style(field_style(app.auth.focus == InputFocus::SignupUsername)),
        chunks[1],
    );
    f.render_widget(
        Paragraph::new("*".repeat(app.auth.password_input.len()))
            .block(Block::default().borders(Borders::ALL).title("비밀번호"))
            .style(field_style(app.auth.focus == InputFocus::SignupPassword)),
        chunks[2],
    );
    f.render_widget(
        Paragraph::new("*".repeat(app.auth.confirm_input.len()))
            .block(Block::default().borders(Borders::ALL).title("비밀번호 확인"))
            .style(field_style(app.auth.focus == InputFocus::SignupConfirm)),
        chunks[3],
    );

    let button_area = Layout::default().margin(1).constraints([Constraint::Length(3)]).split(chunks[4])[0];
    let button_chunks = Layout::default().direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)]).split(button_area);

    f.render_widget(
        Paragraph::new(Span::styled(
            "[ 가입하기 ]",
            button_style(app.auth.focus == InputFocus::SignupSubmit, Color::Cyan),
        ))
        .alignment(Alignment::Center),
        button_chunks[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            "[ 로그인으로 ]",
            button_style(app.auth.focus == InputFocus::SignupToLogin, Color::Magenta),
        ))
        .alignment(Alignment::Center),
        button_chunks[1],
    );

    match app.auth.focus {
        InputFocus::SignupEmail => {
            f.set_cursor_position((chunks[0].x + app.auth.email_input.len() as u16 + 1, chunks[0].y + 1));
        }
        InputFocus::SignupUsername => {
            f.set_cursor_position((chunks[1].x + app.auth.username_input.len() as u16 + 1, chunks[1].y + 1));
        }
        InputFocus::SignupPassword => {
            f.set_cursor_position((chunks[2].x + app.auth.password_input.len() as u16 + 1, chunks[2].y + 1));
        }
        InputFocus::SignupConfirm => {
            f.set_cursor_position((chunks[3].x + app.auth.confirm_input.len() as u16 + 1, chunks[3].y + 1));
        }
        _ => {}
    }
}
