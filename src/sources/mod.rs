//! Remote post/comment service access.
//!
//! `PostsApi` is the seam between the runtime and the network: workers hold an
//! `Arc<dyn PostsApi>` so tests can substitute an in-memory service.

use async_trait::async_trait;
use thiserror::Error;

use crate::state::{Comment, NewPost, Post, PostPatch};

mod http;

pub use http::{HttpPostsApi, JSON_CONTENT_TYPE};

/// Failure of a single remote call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure, timeout, or a non-success HTTP status.
    #[error("Network error: {0}")]
    Network(String),
    /// The update/delete target does not exist on the server.
    #[error("Post {id} was not found on the server")]
    NotFound {
        /// Id that the server did not know.
        id: u64,
    },
    /// The server answered with a body that is not the expected JSON.
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

/// Request/response mapping for the post service. Every call is a single
/// best-effort attempt: no retries and no caching.
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// `GET /posts`.
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError>;

    /// `POST /posts`; the server assigns the id.
    async fn create_post(&self, new_post: NewPost) -> Result<Post, ApiError>;

    /// `PATCH /posts/{id}` with only the supplied fields; returns the full post.
    async fn update_post(&self, id: u64, patch: PostPatch) -> Result<Post, ApiError>;

    /// `DELETE /posts/{id}`; any success status counts.
    async fn delete_post(&self, id: u64) -> Result<(), ApiError>;

    /// `GET /posts/{post_id}/comments`.
    async fn list_comments(&self, post_id: u64) -> Result<Vec<Comment>, ApiError>;
}
