use std::sync::atomic::Ordering;

use crate::state::AppState;

use super::channels::Channels;

/// What: Shut down background pieces after the main loop exits.
///
/// Inputs:
/// - `app`: Application state at exit.
/// - `channels`: Communication channels.
///
/// Output:
/// - None.
///
/// Details:
/// - Signals the event thread; workers stop once the channels are dropped.
pub fn cleanup_on_exit(app: &AppState, channels: &Channels) {
    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
    tracing::info!(
        posts = app.store.len(),
        overlay = app.overlay.kind(),
        "main loop exited"
    );
}
