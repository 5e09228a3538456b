//! `PostsApi` over HTTP using a pooled `reqwest::Client`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{ApiError, PostsApi};
use crate::state::{Comment, NewPost, Post, PostPatch};

/// Content type sent with every request that carries a JSON body.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// HTTP implementation of [`PostsApi`] rooted at a base URL such as
/// `https://jsonplaceholder.typicode.com`.
#[derive(Debug, Clone)]
pub struct HttpPostsApi {
    /// Shared client (connection pooling is on by default).
    client: reqwest::Client,
    /// Base URL without trailing slash.
    base_url: String,
}

impl HttpPostsApi {
    /// What: Build a client for the service at `base_url`.
    ///
    /// Inputs:
    /// - `base_url`: Service root; a trailing `/` is ignored.
    /// - `connect_timeout`: Limit for establishing a connection.
    /// - `timeout`: Limit for a whole request/response exchange.
    ///
    /// Output:
    /// - `Ok(HttpPostsApi)`; `Err(ApiError::Network)` if the TLS/client setup fails.
    pub fn new(
        base_url: &str,
        connect_timeout: Duration,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .user_agent(format!("postboard/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send_json<B: Serialize + Sync>(
        &self,
        request: reqwest::RequestBuilder,
        body: &B,
    ) -> Result<Response, ApiError> {
        let bytes = serde_json::to_vec(body)
            .map_err(|e| ApiError::Decode(format!("Failed to encode request body: {e}")))?;
        request
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
            .body(bytes)
            .send()
            .await
            .map_err(transport_error)
    }
}

/// Map a `reqwest` send failure to `ApiError::Network`.
fn transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Network(format!("Request timed out: {e}"))
    } else {
        ApiError::Network(e.to_string())
    }
}

/// What: Turn a response into an error unless its status is a success.
///
/// Inputs:
/// - `resp`: Response as received.
/// - `target`: Post id addressed by the request, for 404 mapping.
///
/// Output:
/// - The response back on 2xx; `NotFound` on 404 with a target; `Network` otherwise.
fn check_status(resp: Response, target: Option<u64>) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    match (status, target) {
        (StatusCode::NOT_FOUND, Some(id)) => Err(ApiError::NotFound { id }),
        _ => Err(ApiError::Network(format!(
            "HTTP {status} from {}",
            resp.url()
        ))),
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            transport_error(e)
        }
    })
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let url = self.url("/posts");
        tracing::debug!(%url, "GET posts");
        let resp = self.client.get(&url).send().await.map_err(transport_error)?;
        decode(check_status(resp, None)?).await
    }

    async fn create_post(&self, new_post: NewPost) -> Result<Post, ApiError> {
        let url = self.url("/posts");
        tracing::debug!(%url, user_id = new_post.user_id, "POST post");
        let resp = self.send_json(self.client.post(&url), &new_post).await?;
        decode(check_status(resp, None)?).await
    }

    async fn update_post(&self, id: u64, patch: PostPatch) -> Result<Post, ApiError> {
        let url = self.url(&format!("/posts/{id}"));
        tracing::debug!(%url, "PATCH post");
        let resp = self.send_json(self.client.patch(&url), &patch).await?;
        decode(check_status(resp, Some(id))?).await
    }

    async fn delete_post(&self, id: u64) -> Result<(), ApiError> {
        let url = self.url(&format!("/posts/{id}"));
        tracing::debug!(%url, "DELETE post");
        let resp = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(resp, Some(id)).map(|_| ())
    }

    async fn list_comments(&self, post_id: u64) -> Result<Vec<Comment>, ApiError> {
        let url = self.url(&format!("/posts/{post_id}/comments"));
        tracing::debug!(%url, "GET comments");
        let resp = self.client.get(&url).send().await.map_err(transport_error)?;
        decode(check_status(resp, None)?).await
    }
}
