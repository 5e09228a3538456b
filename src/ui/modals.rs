//! Overlay and alert renderers.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Draft, DraftField, Overlay, Post};
use crate::theme::theme;

use super::helpers::{centered_rect, fixed_centered_rect};

/// Draw the active overlay, if any.
pub(super) fn render_overlay(f: &mut Frame, app: &AppState, area: Rect) {
    match &app.overlay {
        Overlay::None => {}
        Overlay::Detail { post, scroll } => render_detail(f, app, area, post, *scroll),
        Overlay::Edit { post, draft } => {
            render_form(f, area, &format!(" Edit post #{} ", post.id), draft);
        }
        Overlay::Create { draft } => render_form(f, area, " New post ", draft),
    }
}

fn overlay_block(title: &str, focused: bool) -> Block<'static> {
    let th = theme();
    Block::default()
        .title(Span::styled(
            title.to_string(),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface2 }))
        .style(Style::default().bg(th.mantle))
}

/// What: Render the post detail overlay with its comments.
///
/// Inputs:
/// - `f`: Frame
/// - `app`: Application state (comments live in `app.comments`)
/// - `area`: Full screen area
/// - `post`: Post being shown
/// - `scroll`: Line offset applied to the whole content
fn render_detail(f: &mut Frame, app: &AppState, area: Rect, post: &Post, scroll: u16) {
    let th = theme();
    let rect = centered_rect(80, 80, area);
    f.render_widget(Clear, rect);

    let mut lines = vec![
        Line::from(Span::styled(
            post.title.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Post #{} by user {}", post.id, post.user_id),
            Style::default().fg(th.overlay1),
        )),
        Line::from(""),
    ];
    lines.extend(
        post.body
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(th.subtext1)))),
    );
    lines.push(Line::from(""));

    let comments = app.comments.comments();
    let heading = if app.comments.is_loading() {
        "Loading comments…".to_string()
    } else {
        format!("Comments ({})", comments.len())
    };
    lines.push(Line::from(Span::styled(
        heading,
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    )));
    for c in comments {
        lines.push(Line::from(vec![
            Span::styled(
                c.name.clone(),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  <{}>", c.email), Style::default().fg(th.sapphire)),
        ]));
        lines.extend(
            c.body
                .lines()
                .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(th.subtext0)))),
        );
        lines.push(Line::from(""));
    }

    let para = Paragraph::new(lines)
        .block(overlay_block(" Post ", true))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(para, rect);
}

/// What: Render a create or edit form.
///
/// Inputs:
/// - `f`: Frame
/// - `area`: Full screen area
/// - `title`: Overlay title
/// - `draft`: Values being edited
///
/// Details:
/// - The focused input gets the accent border and the terminal cursor.
/// - A submission in flight is shown in the title; inputs are read-only then.
fn render_form(f: &mut Frame, area: Rect, title: &str, draft: &Draft) {
    let th = theme();
    let rect = centered_rect(70, 60, area);
    f.render_widget(Clear, rect);
    let title = if draft.submitting {
        format!("{title}· saving… ")
    } else {
        title.to_string()
    };
    let outer = overlay_block(&title, true);
    let inner = outer.inner(rect);
    f.render_widget(outer, rect);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(inner);

    let field_block = |label: &'static str, focused: bool| {
        Block::default()
            .title(Span::styled(
                label,
                Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 }))
    };
    let title_focused = draft.field == DraftField::Title;

    let title_input = Paragraph::new(Span::styled(draft.title.clone(), Style::default().fg(th.text)))
        .block(field_block("Title", title_focused));
    f.render_widget(title_input, parts[0]);

    let body_input = Paragraph::new(draft.body.clone())
        .style(Style::default().fg(th.text))
        .wrap(Wrap { trim: false })
        .block(field_block("Body", !title_focused));
    f.render_widget(body_input, parts[1]);

    if !draft.submitting {
        let (field_area, text) = if title_focused {
            (parts[0], draft.title.as_str())
        } else {
            (parts[1], draft.body.as_str())
        };
        f.set_cursor_position(cursor_after(field_area, text));
    }
}

/// Cursor position just after `text` inside a bordered input.
fn cursor_after(field: Rect, text: &str) -> Position {
    let last = text.rsplit('\n').next().unwrap_or("");
    let rows = u16::try_from(text.matches('\n').count()).unwrap_or(u16::MAX);
    let cols = u16::try_from(last.width()).unwrap_or(u16::MAX);
    let right = field.x + field.width.saturating_sub(2);
    let bottom = field.y + field.height.saturating_sub(2);
    Position::new(
        field.x.saturating_add(1).saturating_add(cols).min(right),
        field.y.saturating_add(1).saturating_add(rows).min(bottom),
    )
}

/// What: Draw the blocking alert box.
///
/// Inputs:
/// - `f`: Frame
/// - `area`: Full screen area
/// - `message`: Alert text
pub(super) fn render_alert(f: &mut Frame, area: Rect, message: &str) {
    let th = theme();
    let rect = fixed_centered_rect(area.width.saturating_sub(10).min(60), 7, area);
    f.render_widget(Clear, rect);
    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter or Esc to dismiss",
            Style::default().fg(th.overlay1),
        )),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(
                " Error ",
                Style::default().fg(th.red).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(th.red))
            .style(Style::default().bg(th.mantle)),
    );
    f.render_widget(para, rect);
}
