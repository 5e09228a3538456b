use crate::logic::filter::current_view;
use crate::state::AppState;

/// What: Move the list selection by `delta` within the filtered view.
///
/// Inputs:
/// - `app`: Application state.
/// - `delta`: Signed step; large values jump to the ends.
///
/// Output:
/// - `true` when the selection moved.
///
/// Details:
/// - Clamps to the view bounds.
/// - Does nothing while the scroll lock is engaged, so the list behind an
///   overlay keeps its position.
pub fn move_sel(app: &mut AppState, delta: isize) -> bool {
    if app.scroll_lock.is_engaged() {
        return false;
    }
    let len = current_view(app).len();
    if len == 0 {
        return false;
    }
    let target = app.selected.saturating_add_signed(delta).min(len - 1);
    if target == app.selected && app.list_state.selected() == Some(target) {
        return false;
    }
    app.selected = target;
    app.list_state.select(Some(target));
    true
}

/// Jump to the first (`to_end == false`) or last post of the view.
pub fn jump_sel(app: &mut AppState, to_end: bool) -> bool {
    let delta = if to_end { isize::MAX } else { isize::MIN };
    move_sel(app, delta)
}
