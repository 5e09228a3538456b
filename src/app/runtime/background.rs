use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// What: Spawn the thread that reads terminal events.
///
/// Inputs:
/// - `headless`: When `true`, no thread is started.
/// - `event_tx`: Channel for key, mouse and resize events.
/// - `cancelled`: Set by the event loop on exit.
///
/// Output:
/// - None (spawns OS thread)
///
/// Details:
/// - Polls with a 50ms timeout so the cancel flag is seen promptly.
/// - Exits when the flag is set or the receiver is gone.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::debug!(error = %e, "terminal read failed"),
                },
                Ok(false) => {}
                Err(e) => tracing::debug!(error = %e, "terminal poll failed"),
            }
        }
        tracing::debug!("event thread stopped");
    });
}
