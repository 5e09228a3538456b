//! End-to-end runtime smoke tests (headless) against a local stub service.

mod common;

use std::time::Duration;

use postboard::app::{RunOptions, run};
use postboard::config::Settings;

use common::{posts_json, spawn_stub};

fn options(base_url: String) -> RunOptions {
    RunOptions {
        settings: Settings {
            base_url,
            request_timeout_secs: 2,
            connect_timeout_secs: 1,
            ..Settings::default()
        },
        initial_user: Some(1),
        headless: true,
    }
}

#[tokio::test]
/// What: Headless mode loads once and exits cleanly.
///
/// - Input: stub answering `GET /posts` with five posts
/// - Output: `run` returns `Ok(())` after exactly one request
async fn headless_run_loads_and_exits() {
    let stub = spawn_stub(|_| (200, posts_json(5))).await;
    let result = tokio::time::timeout(Duration::from_secs(10), run(options(stub.base_url.clone())))
        .await
        .expect("headless run finished in time");
    if let Err(e) = result {
        panic!("run returned error: {e:?}");
    }
    let seen = stub.recorded();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].path, "/posts");
}

#[tokio::test]
/// What: A failing service does not make the runtime error out.
async fn headless_run_survives_load_failure() {
    let stub = spawn_stub(|_| (500, "{}".to_string())).await;
    let result = tokio::time::timeout(Duration::from_secs(10), run(options(stub.base_url.clone())))
        .await
        .expect("headless run finished in time");
    assert!(result.is_ok());
}
