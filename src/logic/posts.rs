//! Post write requests and the outcomes workers send back.
//!
//! The event loop never mutates the collection when a request is issued. A
//! change becomes visible only when the matching [`PostOutcome`] arrives and
//! is applied by the runtime handlers.

use tokio::sync::mpsc;

use crate::logic::filter::selected_post;
use crate::sources::ApiError;
use crate::state::{AppState, NewPost, Post, PostPatch};

/// Work item for the posts worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostRequest {
    /// `GET /posts`
    Load,
    /// `POST /posts`
    Create(NewPost),
    /// `PATCH /posts/{id}`
    Update {
        /// Target post.
        id: u64,
        /// Fields to replace.
        patch: PostPatch,
    },
    /// `DELETE /posts/{id}`
    Delete {
        /// Target post.
        id: u64,
    },
}

impl PostRequest {
    /// Short name used in logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Create(_) => "create",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
        }
    }
}

/// Result of one [`PostRequest`], routed back to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostOutcome {
    /// Full collection or the load failure.
    Loaded(Result<Vec<Post>, ApiError>),
    /// Server-assigned post or the create failure.
    Created(Result<Post, ApiError>),
    /// Updated post for `id` or the update failure.
    Updated {
        /// Target of the request.
        id: u64,
        /// Server echo of the post after the update.
        result: Result<Post, ApiError>,
    },
    /// Delete confirmation for `id` or the failure.
    Deleted {
        /// Target of the request.
        id: u64,
        /// Empty on success.
        result: Result<(), ApiError>,
    },
}

/// What: Queue a full reload of the collection.
///
/// Inputs:
/// - `app`: Application state; `loading_posts` is raised.
/// - `tx`: Posts worker request channel.
///
/// Output:
/// - `true` when the request was queued.
pub fn request_load(app: &mut AppState, tx: &mpsc::UnboundedSender<PostRequest>) -> bool {
    if tx.send(PostRequest::Load).is_err() {
        tracing::error!("posts worker is gone; cannot load");
        app.show_toast("Post service is not running");
        return false;
    }
    app.loading_posts = true;
    true
}

/// What: Queue deletion of the post under the list cursor.
///
/// Inputs:
/// - `app`: Application state.
/// - `tx`: Posts worker request channel.
///
/// Output:
/// - Id of the post the request targets, or `None` if nothing was sent.
///
/// Details:
/// - The post stays in the list until the server confirms.
/// - Deletion is immediate; there is no confirmation prompt.
pub fn request_delete(app: &mut AppState, tx: &mpsc::UnboundedSender<PostRequest>) -> Option<u64> {
    let id = selected_post(app)?.id;
    if tx.send(PostRequest::Delete { id }).is_err() {
        tracing::error!(id, "posts worker is gone; cannot delete");
        app.show_toast("Post service is not running");
        return None;
    }
    tracing::info!(id, "delete requested");
    Some(id)
}
