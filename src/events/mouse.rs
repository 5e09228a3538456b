use crossterm::event::{MouseEvent, MouseEventKind};

use crate::logic::selection::move_sel;
use crate::state::{AppState, Overlay};

use super::modals::scroll_detail;

/// What: Handle a mouse event.
///
/// Inputs:
/// - `me`: Mouse event
/// - `app`: Application state
///
/// Output:
/// - None.
///
/// Details:
/// - The wheel scrolls the detail overlay's comments when it is open.
/// - Otherwise it moves the list, which does nothing while the scroll lock
///   is engaged.
pub(super) fn handle_mouse_event(me: MouseEvent, app: &mut AppState) {
    let delta: isize = match me.kind {
        MouseEventKind::ScrollUp => -1,
        MouseEventKind::ScrollDown => 1,
        _ => return,
    };
    if matches!(app.overlay, Overlay::Detail { .. }) {
        scroll_detail(app, delta);
    } else {
        let _ = move_sel(app, delta);
    }
}
