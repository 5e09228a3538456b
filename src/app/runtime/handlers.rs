//! Event-loop handlers that apply worker results to `AppState`.

use std::time::Instant;

use crate::logic::comments::CommentTicket;
use crate::logic::filter::{reconcile_selection, selected_post};
use crate::logic::overlay::close;
use crate::logic::posts::PostOutcome;
use crate::sources::ApiError;
use crate::state::{AppState, Comment, Overlay};

/// Alert shown when the collection cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading posts from server";

/// What: Apply a posts worker outcome.
///
/// Inputs:
/// - `app`: Application state
/// - `outcome`: Result of a load, create, update or delete request
///
/// Output:
/// - None (mutates the collection, overlay and notifications)
///
/// Details:
/// - Nothing is changed locally until this point; a failure leaves the
///   collection exactly as it was, except a failed load which clears it.
/// - Create and edit overlays close only on success. On failure the draft is
///   kept and becomes editable again.
/// - Selection follows the previously selected post by id.
pub fn handle_post_outcome(app: &mut AppState, outcome: PostOutcome) {
    let prev = selected_post(app).map(|p| p.id);
    match outcome {
        PostOutcome::Loaded(Ok(posts)) => {
            app.loading_posts = false;
            app.store.replace_all(posts);
            reconcile_selection(app, prev);
            tracing::info!(count = app.store.len(), "posts loaded");
        }
        PostOutcome::Loaded(Err(e)) => {
            app.loading_posts = false;
            app.store.clear();
            reconcile_selection(app, None);
            tracing::error!(error = %e, "failed to load posts");
            app.show_alert(LOAD_ERROR_MESSAGE);
        }
        PostOutcome::Created(Ok(post)) => {
            let id = post.id;
            app.store.prepend(post);
            if matches!(app.overlay, Overlay::Create { .. }) {
                close(app);
            }
            reconcile_selection(app, Some(id));
            tracing::info!(id, "post created");
            app.show_toast(format!("Created post #{id}"));
        }
        PostOutcome::Created(Err(e)) => {
            if let Overlay::Create { draft } = &mut app.overlay {
                draft.submitting = false;
            }
            tracing::warn!(error = %e, "create failed");
            app.show_toast(failure_text("create post", &e));
        }
        PostOutcome::Updated { id, result: Ok(post) } => {
            if app.store.replace(post) {
                tracing::info!(id, "post updated");
                app.show_toast(format!("Updated post #{id}"));
            } else {
                tracing::warn!(id, "update for a post no longer in the list; dropped");
            }
            if matches!(&app.overlay, Overlay::Edit { post, .. } if post.id == id) {
                close(app);
            }
            reconcile_selection(app, prev);
        }
        PostOutcome::Updated { id, result: Err(e) } => {
            if let Overlay::Edit { post, draft } = &mut app.overlay
                && post.id == id
            {
                draft.submitting = false;
            }
            tracing::warn!(id, error = %e, "update failed");
            app.show_toast(failure_text("update post", &e));
        }
        PostOutcome::Deleted { id, result: Ok(()) } => {
            if app.store.remove(id).is_none() {
                tracing::debug!(id, "deleted post was already gone");
            }
            let shows_deleted = match &app.overlay {
                Overlay::Detail { post, .. } | Overlay::Edit { post, .. } => post.id == id,
                _ => false,
            };
            if shows_deleted {
                close(app);
            }
            reconcile_selection(app, prev);
            tracing::info!(id, "post deleted");
            app.show_toast(format!("Deleted post #{id}"));
        }
        PostOutcome::Deleted { id, result: Err(e) } => {
            tracing::warn!(id, error = %e, "delete failed");
            app.show_toast(failure_text("delete post", &e));
        }
    }
}

/// Toast text for a failed write.
fn failure_text(action: &str, err: &ApiError) -> String {
    match err {
        ApiError::NotFound { id } => format!("Could not {action}: post #{id} not found"),
        ApiError::Network(_) | ApiError::Decode(_) => {
            format!("Could not {action}: network error")
        }
    }
}

/// What: Apply a comments worker result.
///
/// Inputs:
/// - `app`: Application state
/// - `ticket`: Activation the request was issued for
/// - `result`: Fetched comments or the error
///
/// Output:
/// - `true` when the result belonged to the current detail view.
pub fn handle_comments_result(
    app: &mut AppState,
    ticket: CommentTicket,
    result: Result<Vec<Comment>, ApiError>,
) -> bool {
    app.comments.accept(ticket, result)
}

/// Periodic housekeeping: expire toasts.
pub fn handle_tick(app: &mut AppState, now: Instant) {
    app.expire_toast(now);
}
