//! Overlay transitions and the page-scroll lock that follows them.
//!
//! Every change to `app.overlay` goes through [`set_overlay`], which is the
//! only place the scroll lock is engaged or released. That keeps the lock
//! engaged exactly while an overlay is open, whatever path closed it.

use tokio::sync::mpsc;

use crate::logic::comments::CommentTicket;
use crate::logic::posts::PostRequest;
use crate::state::{AppState, Draft, DraftEdit, NewPost, Overlay, Post, PostPatch};

/// What: Replace the active overlay and keep the scroll lock in step.
///
/// Inputs:
/// - `app`: Application state.
/// - `next`: Overlay to show (`Overlay::None` closes).
///
/// Output:
/// - None.
///
/// Details:
/// - Closed to open pins the current list offset; open to closed restores it.
/// - Open to open (switching overlays) keeps the original pin.
/// - Leaving a detail overlay invalidates any comment fetch still in flight.
pub fn set_overlay(app: &mut AppState, next: Overlay) {
    let was_open = !app.overlay.is_none();
    let from = app.overlay.kind();
    app.overlay = next;
    let now_open = !app.overlay.is_none();

    if !matches!(app.overlay, Overlay::Detail { .. }) {
        app.comments.invalidate();
    }

    if now_open && !was_open {
        app.scroll_lock.engage(app.list_state.offset());
    } else if was_open
        && !now_open
        && let Some(offset) = app.scroll_lock.release()
    {
        *app.list_state.offset_mut() = offset;
    }
    tracing::debug!(from, to = app.overlay.kind(), "overlay changed");
}

/// Open an empty create form.
pub fn open_create(app: &mut AppState) {
    set_overlay(
        app,
        Overlay::Create {
            draft: Draft::default(),
        },
    );
}

/// What: Open the detail overlay and request the post's comments.
///
/// Inputs:
/// - `app`: Application state.
/// - `post`: Post to show.
/// - `comments_tx`: Comments worker request channel.
///
/// Output:
/// - None.
///
/// Details:
/// - A new activation ticket is taken for every open, so results from a
///   previous detail view are discarded on arrival.
pub fn open_detail(app: &mut AppState, post: Post, comments_tx: &mpsc::UnboundedSender<CommentTicket>) {
    let post_id = post.id;
    set_overlay(app, Overlay::Detail { post, scroll: 0 });
    let ticket = app.comments.begin(post_id);
    if comments_tx.send(ticket).is_err() {
        tracing::error!(post_id, "comments worker is gone");
        let _ = app.comments.accept(ticket, Ok(Vec::new()));
    }
}

/// Open the edit form pre-filled from `post`.
pub fn open_edit(app: &mut AppState, post: Post) {
    let draft = Draft::from_post(&post);
    set_overlay(app, Overlay::Edit { post, draft });
}

/// Close whatever overlay is open.
pub fn close(app: &mut AppState) {
    set_overlay(app, Overlay::None);
}

/// What: Apply an edit to the open form's draft.
///
/// Inputs:
/// - `app`: Application state.
/// - `edit`: Change to apply.
///
/// Output:
/// - `true` when a form was open and took the edit.
///
/// Details:
/// - Ignored while the form is waiting for the server.
pub fn update_draft(app: &mut AppState, edit: DraftEdit) -> bool {
    let Some(draft) = app.overlay.draft_mut() else {
        return false;
    };
    if draft.submitting {
        return false;
    }
    match edit {
        DraftEdit::Insert(ch) => draft.focused_mut().push(ch),
        DraftEdit::Backspace => {
            let _ = draft.focused_mut().pop();
        }
        DraftEdit::SetTitle(title) => draft.title = title,
        DraftEdit::SetBody(body) => draft.body = body,
        DraftEdit::NextField => draft.field = draft.field.next(),
    }
    true
}

/// What: Submit the open create or edit form.
///
/// Inputs:
/// - `app`: Application state.
/// - `tx`: Posts worker request channel.
///
/// Output:
/// - `true` when a request was queued.
///
/// Details:
/// - The overlay stays open until the outcome arrives; the draft is marked
///   as submitting so a second submit cannot be sent meanwhile.
/// - New posts belong to the filtered user, or the configured default owner.
pub fn submit(app: &mut AppState, tx: &mpsc::UnboundedSender<PostRequest>) -> bool {
    let request = match &app.overlay {
        Overlay::Create { draft } if !draft.submitting => PostRequest::Create(NewPost {
            user_id: app.criterion.user_id().unwrap_or(app.default_user_id),
            title: draft.title.clone(),
            body: draft.body.clone(),
        }),
        Overlay::Edit { post, draft } if !draft.submitting => PostRequest::Update {
            id: post.id,
            patch: PostPatch::text(draft.title.clone(), draft.body.clone()),
        },
        _ => return false,
    };
    let label = request.label();
    if tx.send(request).is_err() {
        tracing::error!(request = label, "posts worker is gone; cannot submit");
        app.show_toast("Post service is not running");
        return false;
    }
    if let Some(draft) = app.overlay.draft_mut() {
        draft.submitting = true;
    }
    tracing::info!(request = label, "form submitted");
    true
}
