//! `HttpPostsApi` against a local stub server: request shapes and status mapping.

mod common;

use std::time::Duration;

use postboard::sources::{ApiError, HttpPostsApi, JSON_CONTENT_TYPE, PostsApi};
use postboard::state::{NewPost, PostPatch};

use common::{posts_json, spawn_stub};

fn client(base: &str) -> HttpPostsApi {
    HttpPostsApi::new(base, Duration::from_secs(2), Duration::from_secs(5)).expect("client")
}

#[tokio::test]
/// What: `GET /posts` decodes camelCase posts in server order.
async fn list_posts_decodes_collection() {
    let stub = spawn_stub(|_| (200, posts_json(4))).await;
    let posts = client(&stub.base_url).list_posts().await.expect("posts");
    assert_eq!(posts.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(posts[3].user_id, 1);
    let seen = stub.recorded();
    assert_eq!(seen[0].method, "GET");
    assert_eq!(seen[0].path, "/posts");
}

#[tokio::test]
/// What: Create posts JSON with the expected content type and body.
async fn create_sends_json_body() {
    let stub = spawn_stub(|_| {
        (
            201,
            r#"{"userId":7,"id":101,"title":"T","body":"B"}"#.to_string(),
        )
    })
    .await;
    let post = client(&stub.base_url)
        .create_post(NewPost {
            user_id: 7,
            title: "T".into(),
            body: "B".into(),
        })
        .await
        .expect("created");
    assert_eq!(post.id, 101);

    let req = &stub.recorded()[0];
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/posts");
    assert_eq!(req.header("content-type"), Some(JSON_CONTENT_TYPE));
    let body: serde_json::Value = serde_json::from_str(&req.body).expect("json body");
    assert_eq!(body, serde_json::json!({"userId": 7, "title": "T", "body": "B"}));
}

#[tokio::test]
/// What: PATCH carries only the supplied fields.
async fn patch_sends_only_supplied_fields() {
    let stub = spawn_stub(|_| {
        (
            200,
            r#"{"userId":1,"id":5,"title":"new","body":"old body"}"#.to_string(),
        )
    })
    .await;
    let patch = PostPatch {
        title: Some("new".into()),
        ..PostPatch::default()
    };
    let post = client(&stub.base_url).update_post(5, patch).await.expect("updated");
    assert_eq!(post.title, "new");

    let req = &stub.recorded()[0];
    assert_eq!(req.method, "PATCH");
    assert_eq!(req.path, "/posts/5");
    assert_eq!(req.header("content-type"), Some(JSON_CONTENT_TYPE));
    let body: serde_json::Value = serde_json::from_str(&req.body).expect("json body");
    assert_eq!(body, serde_json::json!({"title": "new"}));
}

#[tokio::test]
/// What: 404 on an addressed post maps to `NotFound`; 500 maps to `Network`.
async fn status_mapping() {
    let stub = spawn_stub(|req| {
        if req.path == "/posts/404" {
            (404, "{}".to_string())
        } else {
            (500, "{}".to_string())
        }
    })
    .await;
    let api = client(&stub.base_url);
    assert_eq!(api.delete_post(404).await, Err(ApiError::NotFound { id: 404 }));
    assert!(matches!(api.delete_post(1).await, Err(ApiError::Network(_))));
    assert!(matches!(api.list_posts().await, Err(ApiError::Network(_))));
}

#[tokio::test]
/// What: Any 2xx counts as a successful delete.
async fn delete_success() {
    let stub = spawn_stub(|_| (200, "{}".to_string())).await;
    client(&stub.base_url).delete_post(3).await.expect("deleted");
    let req = &stub.recorded()[0];
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.path, "/posts/3");
}

#[tokio::test]
/// What: Malformed JSON is a decode error.
async fn malformed_body_is_decode_error() {
    let stub = spawn_stub(|_| (200, "not json".to_string())).await;
    let err = client(&stub.base_url).list_posts().await.expect_err("decode fails");
    assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
}

#[tokio::test]
/// What: Comments come from the post's comments path.
async fn comments_path() {
    let stub = spawn_stub(|_| {
        (
            200,
            r#"[{"postId":2,"id":9,"name":"n","email":"e@x.io","body":"b"}]"#.to_string(),
        )
    })
    .await;
    let comments = client(&stub.base_url).list_comments(2).await.expect("comments");
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].email, "e@x.io");
    assert_eq!(stub.recorded()[0].path, "/posts/2/comments");
}
