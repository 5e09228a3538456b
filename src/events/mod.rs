//! Event handling layer: routes terminal input to the list, the open
//! overlay, or the blocking alert.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::comments::CommentTicket;
use crate::logic::posts::PostRequest;
use crate::state::AppState;

mod list;
mod modals;
mod mouse;

/// Rows moved by PageUp/PageDown.
pub(crate) const PAGE_STEP: isize = 10;

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event
/// - `app`: Application state
/// - `posts_tx`: Posts worker request channel
/// - `comments_tx`: Comments worker request channel
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
///
/// Details:
/// - A blocking alert swallows all input until Enter or Esc dismisses it.
/// - With an overlay open, keys go to the overlay only.
pub fn handle_event(
    ev: &CEvent,
    app: &mut AppState,
    posts_tx: &mpsc::UnboundedSender<PostRequest>,
    comments_tx: &mpsc::UnboundedSender<CommentTicket>,
) -> bool {
    match ev {
        CEvent::Key(ke) => handle_key(*ke, app, posts_tx, comments_tx),
        CEvent::Mouse(me) => {
            if app.alert.is_none() {
                mouse::handle_mouse_event(*me, app);
            }
            false
        }
        _ => false,
    }
}

fn handle_key(
    ke: KeyEvent,
    app: &mut AppState,
    posts_tx: &mpsc::UnboundedSender<PostRequest>,
    comments_tx: &mpsc::UnboundedSender<CommentTicket>,
) -> bool {
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    if app.alert.is_some() {
        if matches!(ke.code, KeyCode::Enter | KeyCode::Esc) {
            app.alert = None;
        }
        return false;
    }
    if app.overlay.is_none() {
        list::handle_list_key(ke, app, posts_tx, comments_tx)
    } else {
        modals::handle_overlay_key(ke, app, posts_tx);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::filter::reconcile_selection;
    use crate::logic::store::PostStore;
    use crate::state::{Overlay, Post};
    use crossterm::event::{MouseEvent, MouseEventKind};

    pub(super) fn key(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    pub(super) fn ctrl(ch: char) -> CEvent {
        CEvent::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
    }

    pub(super) fn wheel(kind: MouseEventKind) -> CEvent {
        CEvent::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::empty(),
        })
    }

    pub(super) fn app_with(n: u64) -> AppState {
        let posts = (1..=n)
            .map(|id| Post {
                user_id: id % 3 + 1,
                id,
                title: format!("title {id}"),
                body: format!("body {id}"),
            })
            .collect();
        let mut app = AppState {
            store: PostStore::from_posts(posts),
            ..AppState::default()
        };
        reconcile_selection(&mut app, None);
        app
    }

    pub(super) struct Rig {
        pub app: AppState,
        pub posts_tx: mpsc::UnboundedSender<PostRequest>,
        pub posts_rx: mpsc::UnboundedReceiver<PostRequest>,
        pub comments_tx: mpsc::UnboundedSender<CommentTicket>,
        pub comments_rx: mpsc::UnboundedReceiver<CommentTicket>,
    }

    impl Rig {
        pub fn new(n: u64) -> Self {
            let (posts_tx, posts_rx) = mpsc::unbounded_channel();
            let (comments_tx, comments_rx) = mpsc::unbounded_channel();
            Self {
                app: app_with(n),
                posts_tx,
                posts_rx,
                comments_tx,
                comments_rx,
            }
        }

        pub fn send(&mut self, ev: &CEvent) -> bool {
            handle_event(ev, &mut self.app, &self.posts_tx, &self.comments_tx)
        }
    }

    #[test]
    /// What: The alert swallows keys until dismissed.
    fn alert_blocks_input() {
        let mut rig = Rig::new(3);
        rig.app.show_alert("boom");
        assert!(!rig.send(&key(KeyCode::Char('q'))));
        assert!(!rig.send(&key(KeyCode::Char('n'))));
        assert!(rig.app.overlay.is_none());
        assert!(!rig.send(&key(KeyCode::Enter)));
        assert!(rig.app.alert.is_none());
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut rig = Rig::new(1);
        rig.app.overlay = Overlay::Create {
            draft: crate::state::Draft::default(),
        };
        assert!(rig.send(&ctrl('c')));
    }

    #[test]
    /// What: Wheel moves the list only while no overlay is open.
    fn wheel_respects_scroll_lock() {
        let mut rig = Rig::new(5);
        assert!(!rig.send(&wheel(MouseEventKind::ScrollDown)));
        assert_eq!(rig.app.selected, 1);
        assert!(!rig.send(&key(KeyCode::Char('n'))));
        assert!(rig.app.scroll_lock.is_engaged());
        let _ = rig.send(&wheel(MouseEventKind::ScrollDown));
        let _ = rig.send(&key(KeyCode::PageDown));
        assert_eq!(rig.app.selected, 1);
        let _ = rig.send(&key(KeyCode::Esc));
        assert!(!rig.app.scroll_lock.is_engaged());
        let _ = rig.send(&wheel(MouseEventKind::ScrollUp));
        assert_eq!(rig.app.selected, 0);
    }
}
