//! Post listing and detail screens.

use ratatui::{Frame, layout::{Rect, Layout, Constraint, Alignment}, style::{Style, Color, Modifier}, widgets::{Block, Borders, Paragraph, Row, Table, Wrap}, text::{Line, Span}};

use crate::api::ApiError;
use crate::app::App;
use crate::state::Resource;

pub fn draw_list(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let block = Block::default().title("게시판").borders(Borders::ALL);

    match &app.posts.list {
        Resource::Loading => {
            f.render_widget(
                Paragraph::new("게시글을 불러오는 중...")
                    .block(block)
                    .alignment(Alignment::Center),
                chunks[0],
            );
        }
        Resource::Failed(err) => {
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!("게시글을 불러오는데 실패했습니다. ({})", err),
                    Style::default().fg(Color::Red),
                )))
                .block(block)
                .alignment(Alignment::Center),
                chunks[0],
            );
        }
        Resource::Ready(posts) if posts.is_empty() => {
            f.render_widget(
                Paragraph::new("게시글이 없습니다.")
                    .block(block)
                    .alignment(Alignment::Center),
                chunks[0],
            );
        }
        Resource::Ready(_) => {
            let rows: Vec<Row> = app
                .posts
                .page_slice()
                .iter()
                .map(|post| {
                    Row::new(vec![
                        post.id.to_string(),
                        post.title.clone(),
                        post.author_display().to_string(),
                        post.summary.clone().unwrap_or_else(|| {
                            post.content.lines().next().unwrap_or("").to_string()
                        }),
                    ])
                })
                .collect();

            let table = Table::new(
                rows,
                [
                    Constraint::Length(6),
                    Constraint::Percentage(35),
                    Constraint::Length(14),
                    Constraint::Percentage(45),
                ],
            )
            .header(
                Row::new(vec!["번호", "제목", "작성자", "내용"])
                    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            )
            .row_highlight_style(Style::default().bg(Color::Magenta).fg(Color::Black))
            .block(block);

            f.render_stateful_widget(table, chunks[0], &mut app.posts.table_state);
        }
    }

    let pagination = format!("{} / {}", app.posts.current_page, app.posts.total_pages());
    f.render_widget(
        Paragraph::new(pagination)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        chunks[1],
    );
}

pub fn draw_detail(f: &mut Frame, app: &mut App, area: Rect) {
    match &app.posts.detail {
        Resource::Loading => {
            f.render_widget(
                Paragraph::new("게시글을 불러오는 중...")
                    .block(Block::default().borders(Borders::ALL))
                    .alignment(Alignment::Center),
                area,
            );
        }
        Resource::Failed(err) => {
            let message = match err {
                ApiError::NotFound => "게시글을 찾을 수 없습니다.",
                _ => "게시글을 불러오는데 실패했습니다.",
            };
            f.render_widget(
                Paragraph::new(Span::styled(message, Style::default().fg(Color::Red)))
                    .block(Block::default().borders(Borders::ALL))
                    .alignment(Alignment::Center),
                area,
            );
        }
        Resource::Ready(post) => {
            let mut meta = vec![Span::styled(
                post.author_display().to_string(),
                Style::default().fg(Color::Cyan),
            )];
            if let Some(date) = &post.date {
                meta.push(Span::raw("  "));
                meta.push(Span::styled(date.clone(), Style::default().fg(Color::DarkGray)));
            }

            let outer = Block::default()
                .title(Span::styled(
                    post.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL);
            f.render_widget(outer, area);

            let inner = Layout::default().margin(1).constraints([Constraint::Min(1)]).split(area)[0];
            let inner_chunks = Layout::default()
                .constraints([Constraint::Length(1), Constraint::Min(1)])
                .split(inner);

            f.render_widget(Paragraph::new(Line::from(meta)), inner_chunks[0]);
            f.render_widget(
                Paragraph::new(post.content.as_str()).wrap(Wrap { trim: false }),
                inner_chunks[1],
            );
        }
    }
}
