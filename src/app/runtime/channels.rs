use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::logic::comments::CommentTicket;
use crate::logic::posts::{PostOutcome, PostRequest};
use crate::sources::PostsApi;

use super::workers::auxiliary::spawn_tick_worker;
use super::workers::comments::{CommentsResult, spawn_comments_worker};
use super::workers::posts::spawn_posts_worker;

/// What: Channel ends held by the event loop.
///
/// Details:
/// - The worker-side ends are moved into the workers by [`Channels::new`].
pub struct Channels {
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    pub event_thread_cancelled: Arc<AtomicBool>,
    pub posts_req_tx: mpsc::UnboundedSender<PostRequest>,
    pub posts_res_rx: mpsc::UnboundedReceiver<PostOutcome>,
    pub comments_req_tx: mpsc::UnboundedSender<CommentTicket>,
    pub comments_res_rx: mpsc::UnboundedReceiver<CommentsResult>,
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Channels {
    /// What: Create all channels and spawn the workers behind them.
    ///
    /// Inputs:
    /// - `api`: Service client shared by the posts and comments workers.
    /// - `tick_rate`: Interval for the tick worker.
    ///
    /// Output:
    /// - The event loop's side of every channel.
    ///
    /// Details:
    /// - Must be called inside a tokio runtime.
    pub fn new(api: Arc<dyn PostsApi>, tick_rate: Duration) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));

        let (posts_req_tx, posts_req_rx) = mpsc::unbounded_channel::<PostRequest>();
        let (posts_res_tx, posts_res_rx) = mpsc::unbounded_channel::<PostOutcome>();
        spawn_posts_worker(Arc::clone(&api), posts_req_rx, posts_res_tx);

        let (comments_req_tx, comments_req_rx) = mpsc::unbounded_channel::<CommentTicket>();
        let (comments_res_tx, comments_res_rx) = mpsc::unbounded_channel::<CommentsResult>();
        spawn_comments_worker(api, comments_req_rx, comments_res_tx);

        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();
        spawn_tick_worker(tick_tx, tick_rate);

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            posts_req_tx,
            posts_res_rx,
            comments_req_tx,
            comments_res_rx,
            tick_rx,
        }
    }
}
