use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::overlay::{close, open_edit, submit, update_draft};
use crate::logic::posts::PostRequest;
use crate::state::{AppState, DraftEdit, DraftField, Overlay};

use super::PAGE_STEP;

/// What: Handle a key while an overlay has focus.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Application state
/// - `posts_tx`: Posts worker request channel (for form submission)
///
/// Output:
/// - None.
pub(super) fn handle_overlay_key(
    ke: KeyEvent,
    app: &mut AppState,
    posts_tx: &mpsc::UnboundedSender<PostRequest>,
) {
    match &app.overlay {
        Overlay::None => {}
        Overlay::Detail { .. } => handle_detail_key(ke, app),
        Overlay::Edit { .. } | Overlay::Create { .. } => handle_form_key(ke, app, posts_tx),
    }
}

/// Scroll the detail overlay's comment section by `delta` lines.
pub(super) fn scroll_detail(app: &mut AppState, delta: isize) {
    if let Overlay::Detail { scroll, .. } = &mut app.overlay {
        let step = u16::try_from(delta.unsigned_abs()).unwrap_or(u16::MAX);
        *scroll = if delta < 0 {
            scroll.saturating_sub(step)
        } else {
            scroll.saturating_add(step)
        };
    }
}

fn handle_detail_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Esc | KeyCode::Char('q') => close(app),
        KeyCode::Up | KeyCode::Char('k') => scroll_detail(app, -1),
        KeyCode::Down | KeyCode::Char('j') => scroll_detail(app, 1),
        KeyCode::PageUp => scroll_detail(app, -PAGE_STEP),
        KeyCode::PageDown => scroll_detail(app, PAGE_STEP),
        KeyCode::Char('e') => {
            if let Overlay::Detail { post, .. } = &app.overlay {
                let post = post.clone();
                open_edit(app, post);
            }
        }
        _ => {}
    }
}

fn handle_form_key(ke: KeyEvent, app: &mut AppState, posts_tx: &mpsc::UnboundedSender<PostRequest>) {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    let on_body = app
        .overlay
        .draft()
        .is_some_and(|d| d.field == DraftField::Body);
    match ke.code {
        KeyCode::Esc => close(app),
        KeyCode::Char('s') if ctrl => {
            let _ = submit(app, posts_tx);
        }
        KeyCode::Enter if on_body => {
            let _ = submit(app, posts_tx);
        }
        KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab => {
            let _ = update_draft(app, DraftEdit::NextField);
        }
        KeyCode::Backspace => {
            let _ = update_draft(app, DraftEdit::Backspace);
        }
        KeyCode::Char(ch) if !ctrl => {
            let _ = update_draft(app, DraftEdit::Insert(ch));
        }
        _ => {}
    }
}
