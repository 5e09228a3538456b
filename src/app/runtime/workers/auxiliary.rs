use std::time::Duration;

use tokio::sync::mpsc;

/// What: Spawn the tick worker that drives toast expiry and redraws.
///
/// Inputs:
/// - `tick_tx`: Channel sender for tick events
/// - `rate`: Interval between ticks
///
/// Output:
/// - None (spawns async task)
///
/// Details:
/// - Stops once the event loop drops the receiver.
pub fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>, rate: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(rate);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}
