//! Central `AppState` container owned by the event loop.

use ratatui::widgets::ListState;
use std::time::{Duration, Instant};

use crate::logic::comments::CommentsLoader;
use crate::logic::store::PostStore;
use crate::state::modal::{Overlay, ScrollLock};
use crate::state::types::UserFilter;

/// Global application state shared by the event, networking, and UI layers.
///
/// The event loop is the single owner; workers never touch it and only send
/// results back over channels.
#[derive(Debug)]
pub struct AppState {
    /// Authoritative post collection.
    pub store: PostStore,
    /// Current filter criterion for the list.
    pub criterion: UserFilter,
    /// Index into the filtered view that is currently highlighted.
    pub selected: usize,
    /// List selection/scroll state for the post list.
    pub list_state: ListState,
    /// The single active overlay.
    pub overlay: Overlay,
    /// Page-scroll lock, engaged exactly while an overlay is open.
    pub scroll_lock: ScrollLock,
    /// Comments for the active detail overlay.
    pub comments: CommentsLoader,
    /// Blocking alert text; input is swallowed until it is dismissed.
    pub alert: Option<String>,
    /// Non-blocking notification shown in the footer.
    pub toast_message: Option<String>,
    /// When the current toast disappears.
    pub toast_expires_at: Option<Instant>,
    /// Lifetime applied to new toasts.
    pub toast_duration: Duration,
    /// Whether a `GET /posts` is in flight.
    pub loading_posts: bool,
    /// Owner used for new posts when the filter is `All`.
    pub default_user_id: u64,
    /// Service root shown in the header.
    pub base_url: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            store: PostStore::default(),
            criterion: UserFilter::All,
            selected: 0,
            list_state: ListState::default(),
            overlay: Overlay::None,
            scroll_lock: ScrollLock::default(),
            comments: CommentsLoader::default(),
            alert: None,
            toast_message: None,
            toast_expires_at: None,
            toast_duration: Duration::from_secs(4),
            loading_posts: false,
            default_user_id: 1,
            base_url: crate::config::DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl AppState {
    /// What: Show a non-blocking notification.
    ///
    /// Inputs:
    /// - `message`: Text for the footer toast.
    ///
    /// Output:
    /// - None; replaces any toast already shown and restarts its timer.
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_expires_at = Some(Instant::now() + self.toast_duration);
    }

    /// Show a blocking alert that must be dismissed.
    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    /// Drop the toast once its deadline has passed.
    pub fn expire_toast(&mut self, now: Instant) {
        if self.toast_expires_at.is_some_and(|t| now >= t) {
            self.toast_message = None;
            self.toast_expires_at = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Toasts vanish only after their deadline.
    fn toast_expires_after_deadline() {
        let mut app = AppState {
            toast_duration: Duration::from_secs(2),
            ..AppState::default()
        };
        app.show_toast("saved");
        let now = Instant::now();
        app.expire_toast(now);
        assert_eq!(app.toast_message.as_deref(), Some("saved"));
        app.expire_toast(now + Duration::from_secs(3));
        assert!(app.toast_message.is_none());
        assert!(app.toast_expires_at.is_none());
    }

    #[test]
    fn default_state_is_idle() {
        let app = AppState::default();
        assert!(app.overlay.is_none());
        assert!(!app.scroll_lock.is_engaged());
        assert!(app.store.is_empty());
        assert!(app.alert.is_none());
    }
}
