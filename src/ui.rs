//! Terminal rendering: header, post list, footer and overlays.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::logic::filter::{current_view, distinct_user_ids};
use crate::state::{AppState, Overlay, UserFilter};
use crate::theme::theme;

pub mod helpers;
mod modals;

use helpers::truncate_to_width;

/// What: Render one frame.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Application state (mutable for the list scroll state)
///
/// Output:
/// - None.
///
/// Details:
/// - While the scroll lock is engaged the list is drawn at its pinned
///   offset, so the page behind an overlay does not move.
/// - The blocking alert is drawn last, above any overlay.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(f, app, chunks[0]);
    render_list(f, app, chunks[1]);
    render_footer(f, app, chunks[2]);

    modals::render_overlay(f, app, area);
    if let Some(message) = &app.alert {
        modals::render_alert(f, area, message);
    }
}

fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let ids = distinct_user_ids(app.store.posts());
    let shown = current_view(app).len();

    let mut options = vec![Span::styled("Filter: ", Style::default().fg(th.overlay1))];
    let all = std::iter::once(UserFilter::All).chain(ids.iter().map(|&id| UserFilter::User(id)));
    for (i, option) in all.enumerate() {
        if i > 0 {
            options.push(Span::raw(" "));
        }
        let text = match option {
            UserFilter::All => "All".to_string(),
            UserFilter::User(id) => id.to_string(),
        };
        if option == app.criterion {
            options.push(Span::styled(
                format!("[{text}]"),
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ));
        } else {
            options.push(Span::styled(text, Style::default().fg(th.subtext0)));
        }
    }
    // A filtered user whose last post was deleted is no longer offered.
    if let UserFilter::User(id) = app.criterion
        && !ids.contains(&id)
    {
        options.push(Span::styled(
            format!(" [{id}]"),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ));
    }

    let status = if app.loading_posts {
        Span::styled("Loading posts…", Style::default().fg(th.yellow))
    } else {
        Span::styled(
            format!("{shown} of {} posts", app.store.len()),
            Style::default().fg(th.subtext1),
        )
    };
    let lines = vec![
        Line::from(vec![
            Span::styled("Server: ", Style::default().fg(th.overlay1)),
            Span::styled(app.base_url.clone(), Style::default().fg(th.sapphire)),
            Span::raw("  "),
            status,
        ]),
        Line::from(options),
    ];
    let header = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(
                " postboard ",
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface2)),
    );
    f.render_widget(header, area);
}

fn render_list(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    // Borders plus the highlight symbol.
    let width = usize::from(area.width.saturating_sub(4));

    let items: Vec<ListItem> = current_view(app)
        .into_iter()
        .map(|p| {
            let id = format!("#{} ", p.id);
            let title_width = width.saturating_sub(id.chars().count());
            let meta = format!("  user {}  ", p.user_id);
            let body_width = width.saturating_sub(meta.chars().count());
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(id, Style::default().fg(th.overlay1)),
                    Span::styled(
                        truncate_to_width(&p.title, title_width),
                        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::styled(meta, Style::default().fg(th.green)),
                    Span::styled(
                        truncate_to_width(&p.body, body_width),
                        Style::default().fg(th.overlay2),
                    ),
                ]),
            ])
        })
        .collect();
    let count = items.len();

    let title = match app.criterion {
        UserFilter::All => format!("Posts ({count})"),
        UserFilter::User(id) => format!("Posts by user {id} ({count})"),
    };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(th.overlay1)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if app.overlay.is_none() {
            th.surface2
        } else {
            th.surface1
        }));

    if count == 0 {
        let text = if app.loading_posts {
            "Loading…"
        } else {
            "No posts to show"
        };
        let empty = Paragraph::new(Span::styled(text, Style::default().fg(th.overlay1))).block(block);
        f.render_widget(empty, area);
        return;
    }

    if let Some(offset) = app.scroll_lock.pinned_offset() {
        *app.list_state.offset_mut() = offset;
    }
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .highlight_style(Style::default().fg(th.crust).bg(th.lavender))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let line = if let Some(msg) = &app.toast_message {
        Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(th.yellow).add_modifier(Modifier::BOLD),
        ))
    } else {
        let hints = match &app.overlay {
            Overlay::None => {
                "↑↓ move  Enter open  n new  e edit  d delete  f/F filter  a all  r reload  q quit"
            }
            Overlay::Detail { .. } => "↑↓ scroll comments  e edit  Esc close",
            Overlay::Edit { .. } | Overlay::Create { .. } => {
                "Tab switch field  Enter on body or Ctrl+S save  Esc cancel"
            }
        };
        Line::from(Span::styled(hints, Style::default().fg(th.overlay1)))
    };
    f.render_widget(Paragraph::new(line).style(Style::default().bg(th.mantle)), area);
}
