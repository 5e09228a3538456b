use std::time::Instant;

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::select;

use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;
use super::handlers::{handle_comments_result, handle_post_outcome, handle_tick};

/// What: Process one message from whichever channel is ready first.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
///
/// Output: `true` if the event loop should exit, `false` to continue
///
/// Details:
/// - This is the only place `AppState` is mutated; every handler runs to
///   completion before the next message is taken.
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(&ev, app, &channels.posts_req_tx, &channels.comments_req_tx)
        }
        Some(outcome) = channels.posts_res_rx.recv() => {
            handle_post_outcome(app, outcome);
            false
        }
        Some((ticket, result)) = channels.comments_res_rx.recv() => {
            let _ = handle_comments_result(app, ticket, result);
            false
        }
        Some(()) = channels.tick_rx.recv() => {
            handle_tick(app, Instant::now());
            false
        }
        else => true
    }
}

/// What: Run the main event loop, rendering between messages.
///
/// Inputs:
/// - `terminal`: Terminal for rendering (`None` in headless mode)
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
///
/// Output: None (runs until exit condition is met)
///
/// Details:
/// - Without a terminal the loop stops as soon as the initial load has been
///   applied.
pub async fn run_event_loop(
    terminal: &mut Option<Terminal<CrosstermBackend<std::io::Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, app))
        {
            tracing::warn!(error = %e, "draw failed");
        }
        if process_channel_messages(app, channels).await {
            break;
        }
        if terminal.is_none() && !app.loading_posts {
            tracing::info!(posts = app.store.len(), "headless run finished");
            break;
        }
    }
}
