//! Background worker executing post requests against the REST service.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::logic::posts::{PostOutcome, PostRequest};
use crate::sources::PostsApi;

/// What: Run one request and wrap its result as an outcome.
///
/// Inputs:
/// - `api`: Service client.
/// - `request`: Work item from the event loop.
///
/// Output:
/// - Outcome carrying the success value or the `ApiError`.
pub async fn execute(api: &dyn PostsApi, request: PostRequest) -> PostOutcome {
    match request {
        PostRequest::Load => PostOutcome::Loaded(api.list_posts().await),
        PostRequest::Create(new_post) => PostOutcome::Created(api.create_post(new_post).await),
        PostRequest::Update { id, patch } => PostOutcome::Updated {
            id,
            result: api.update_post(id, patch).await,
        },
        PostRequest::Delete { id } => PostOutcome::Deleted {
            id,
            result: api.delete_post(id).await,
        },
    }
}

/// What: Spawn the posts worker.
///
/// Inputs:
/// - `api`: Shared service client.
/// - `req_rx`: Requests from the event loop.
/// - `res_tx`: Outcomes back to the event loop.
///
/// Output:
/// - None (spawns async task)
///
/// Details:
/// - Each request runs in its own task, so a slow call never delays the
///   next one and outcomes arrive in completion order.
/// - Errors travel inside the outcome; the worker itself never fails.
pub fn spawn_posts_worker(
    api: Arc<dyn PostsApi>,
    mut req_rx: mpsc::UnboundedReceiver<PostRequest>,
    res_tx: mpsc::UnboundedSender<PostOutcome>,
) {
    tokio::spawn(async move {
        while let Some(request) = req_rx.recv().await {
            let api = Arc::clone(&api);
            let res_tx = res_tx.clone();
            tokio::spawn(async move {
                let label = request.label();
                tracing::debug!(request = label, "posts request started");
                let outcome = execute(api.as_ref(), request).await;
                if res_tx.send(outcome).is_err() {
                    tracing::debug!(request = label, "event loop gone; dropping outcome");
                }
            });
        }
        tracing::debug!("posts worker stopped");
    });
}
