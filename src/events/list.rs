use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::logic::comments::CommentTicket;
use crate::logic::filter::{cycle_criterion, distinct_user_ids, selected_post, set_criterion};
use crate::logic::overlay::{open_create, open_detail, open_edit};
use crate::logic::posts::{PostRequest, request_delete, request_load};
use crate::logic::selection::{jump_sel, move_sel};
use crate::state::{AppState, UserFilter};

use super::PAGE_STEP;

/// What: Handle a key while the post list has focus.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Application state
/// - `posts_tx`: Posts worker request channel
/// - `comments_tx`: Comments worker request channel
///
/// Output:
/// - `true` when the user asked to quit.
pub(super) fn handle_list_key(
    ke: KeyEvent,
    app: &mut AppState,
    posts_tx: &mpsc::UnboundedSender<PostRequest>,
    comments_tx: &mpsc::UnboundedSender<CommentTicket>,
) -> bool {
    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Up | KeyCode::Char('k') => {
            let _ = move_sel(app, -1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let _ = move_sel(app, 1);
        }
        KeyCode::PageUp => {
            let _ = move_sel(app, -PAGE_STEP);
        }
        KeyCode::PageDown => {
            let _ = move_sel(app, PAGE_STEP);
        }
        KeyCode::Home => {
            let _ = jump_sel(app, false);
        }
        KeyCode::End => {
            let _ = jump_sel(app, true);
        }
        KeyCode::Enter => {
            if let Some(post) = selected_post(app).cloned() {
                open_detail(app, post, comments_tx);
            }
        }
        KeyCode::Char('e') => {
            if let Some(post) = selected_post(app).cloned() {
                open_edit(app, post);
            }
        }
        KeyCode::Char('n') => open_create(app),
        KeyCode::Char('d') | KeyCode::Delete => {
            let _ = request_delete(app, posts_tx);
        }
        KeyCode::Char(c @ ('f' | 'F')) => {
            let ids = distinct_user_ids(app.store.posts());
            let next = cycle_criterion(app.criterion, &ids, c == 'f');
            set_criterion(app, next);
        }
        KeyCode::Char('a') => set_criterion(app, UserFilter::All),
        KeyCode::Char('r') => {
            if !app.loading_posts {
                let _ = request_load(app, posts_tx);
            }
        }
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use super::super::tests::{Rig, key};
    use crate::logic::posts::PostRequest;
    use crate::state::{Overlay, UserFilter};

    #[test]
    fn q_quits() {
        let mut rig = Rig::new(1);
        assert!(rig.send(&key(KeyCode::Char('q'))));
    }

    #[test]
    /// What: Navigation keys move within the view and clamp.
    fn navigation_keys() {
        let mut rig = Rig::new(15);
        let _ = rig.send(&key(KeyCode::Char('j')));
        let _ = rig.send(&key(KeyCode::Down));
        assert_eq!(rig.app.selected, 2);
        let _ = rig.send(&key(KeyCode::PageDown));
        assert_eq!(rig.app.selected, 12);
        let _ = rig.send(&key(KeyCode::End));
        assert_eq!(rig.app.selected, 14);
        let _ = rig.send(&key(KeyCode::Home));
        assert_eq!(rig.app.selected, 0);
        let _ = rig.send(&key(KeyCode::Char('k')));
        assert_eq!(rig.app.selected, 0);
    }

    #[test]
    /// What: Enter opens the selected post and requests its comments.
    fn enter_opens_detail() {
        let mut rig = Rig::new(3);
        let _ = rig.send(&key(KeyCode::Down));
        let _ = rig.send(&key(KeyCode::Enter));
        match &rig.app.overlay {
            Overlay::Detail { post, .. } => assert_eq!(post.id, 2),
            other => panic!("expected detail, got {other:?}"),
        }
        assert_eq!(rig.comments_rx.try_recv().map(|t| t.post_id).ok(), Some(2));
    }

    #[test]
    fn edit_and_new_open_forms() {
        let mut rig = Rig::new(2);
        let _ = rig.send(&key(KeyCode::Char('e')));
        assert!(matches!(rig.app.overlay, Overlay::Edit { .. }));
        let _ = rig.send(&key(KeyCode::Esc));
        let _ = rig.send(&key(KeyCode::Char('n')));
        assert!(matches!(rig.app.overlay, Overlay::Create { .. }));
    }

    #[test]
    fn delete_and_reload_send_requests() {
        let mut rig = Rig::new(2);
        let _ = rig.send(&key(KeyCode::Delete));
        assert_eq!(rig.posts_rx.try_recv().ok(), Some(PostRequest::Delete { id: 1 }));
        let _ = rig.send(&key(KeyCode::Char('r')));
        assert_eq!(rig.posts_rx.try_recv().ok(), Some(PostRequest::Load));
        assert!(rig.app.loading_posts);
        let _ = rig.send(&key(KeyCode::Char('r')));
        assert!(rig.posts_rx.try_recv().is_err());
    }

    #[test]
    /// What: f/F cycle the filter; a resets it.
    fn filter_keys_cycle() {
        // Owners in first-seen order are 2, 3, 1.
        let mut rig = Rig::new(6);
        let _ = rig.send(&key(KeyCode::Char('f')));
        assert_eq!(rig.app.criterion, UserFilter::User(2));
        let _ = rig.send(&key(KeyCode::Char('F')));
        assert_eq!(rig.app.criterion, UserFilter::All);
        let _ = rig.send(&key(KeyCode::Char('F')));
        assert_eq!(rig.app.criterion, UserFilter::User(1));
        let _ = rig.send(&key(KeyCode::Char('a')));
        assert_eq!(rig.app.criterion, UserFilter::All);
    }
}
