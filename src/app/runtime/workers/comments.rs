//! Background worker for fetching a post's comments.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::logic::comments::CommentTicket;
use crate::sources::{ApiError, PostsApi};
use crate::state::Comment;

/// Result of one comments fetch, tagged with the activation it belongs to.
pub type CommentsResult = (CommentTicket, Result<Vec<Comment>, ApiError>);

/// What: Spawn the comments worker.
///
/// Inputs:
/// - `api`: Shared service client.
/// - `req_rx`: Tickets for detail activations.
/// - `res_tx`: Results back to the event loop.
///
/// Output:
/// - None (spawns async task)
///
/// Details:
/// - Fetches run concurrently; the ticket lets the event loop drop results
///   for activations that are no longer current.
pub fn spawn_comments_worker(
    api: Arc<dyn PostsApi>,
    mut req_rx: mpsc::UnboundedReceiver<CommentTicket>,
    res_tx: mpsc::UnboundedSender<CommentsResult>,
) {
    tokio::spawn(async move {
        while let Some(ticket) = req_rx.recv().await {
            let api = Arc::clone(&api);
            let res_tx = res_tx.clone();
            tokio::spawn(async move {
                let result = api.list_comments(ticket.post_id).await;
                let _ = res_tx.send((ticket, result));
            });
        }
    });
}
