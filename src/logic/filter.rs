use std::collections::HashSet;

use crate::state::{AppState, Post, UserFilter};

/// What: Project the collection through the filter criterion.
///
/// Inputs:
/// - `posts`: Collection in display order.
/// - `criterion`: `All` or a single owner.
///
/// Output:
/// - Matching posts, in collection order.
///
/// Details:
/// - Pure; recomputed whenever it is needed instead of being cached, so it can
///   never drift from the collection.
#[must_use]
pub fn filtered_view(posts: &[Post], criterion: UserFilter) -> Vec<&Post> {
    posts.iter().filter(|p| criterion.matches(p)).collect()
}

/// What: Distinct owner ids present in the collection, first-seen order.
///
/// Inputs:
/// - `posts`: Collection in display order.
///
/// Output:
/// - Owner ids for the filter selector.
#[must_use]
pub fn distinct_user_ids(posts: &[Post]) -> Vec<u64> {
    let mut seen = HashSet::new();
    posts
        .iter()
        .map(|p| p.user_id)
        .filter(|id| seen.insert(*id))
        .collect()
}

/// What: Step the filter selector to the next or previous option.
///
/// Inputs:
/// - `current`: Current criterion.
/// - `ids`: Selector options after `All`, as from [`distinct_user_ids`].
/// - `forward`: Direction.
///
/// Output:
/// - New criterion. Options cycle `All, ids[0], .., ids[n-1], All`.
///
/// Details:
/// - A current user id that is no longer offered restarts from `All`.
#[must_use]
pub fn cycle_criterion(current: UserFilter, ids: &[u64], forward: bool) -> UserFilter {
    // Option index 0 is All, i + 1 is ids[i].
    let n = ids.len() + 1;
    let cur = match current {
        UserFilter::All => 0,
        UserFilter::User(u) => match ids.iter().position(|&x| x == u) {
            Some(i) => i + 1,
            None => return UserFilter::All,
        },
    };
    let next = if forward { (cur + 1) % n } else { (cur + n - 1) % n };
    if next == 0 {
        UserFilter::All
    } else {
        UserFilter::User(ids[next - 1])
    }
}

/// The filtered view for the current state.
#[must_use]
pub fn current_view(app: &AppState) -> Vec<&Post> {
    filtered_view(app.store.posts(), app.criterion)
}

/// The post under the list cursor, if any.
#[must_use]
pub fn selected_post(app: &AppState) -> Option<&Post> {
    current_view(app).get(app.selected).copied()
}

/// What: Re-anchor the list selection after the collection or criterion changed.
///
/// Inputs:
/// - `app`: Application state with the new collection/criterion in place.
/// - `prev_id`: Id of the post that was selected before the change.
///
/// Output:
/// - Updates `app.selected` and `app.list_state`.
///
/// Details:
/// - Selection follows the previously selected post by id when it is still
///   visible; otherwise the index is clamped, or cleared if the view is empty.
pub fn reconcile_selection(app: &mut AppState, prev_id: Option<u64>) {
    let view = current_view(app);
    let len = view.len();
    let found = prev_id.and_then(|id| view.iter().position(|p| p.id == id));
    if len == 0 {
        app.selected = 0;
        app.list_state.select(None);
        return;
    }
    let clamped = app.selected.min(len - 1);
    app.selected = found.unwrap_or(clamped);
    app.list_state.select(Some(app.selected));
}

/// What: Set the filter criterion and keep the selection sensible.
///
/// Inputs:
/// - `app`: Application state.
/// - `criterion`: New criterion.
///
/// Output:
/// - Updates `app.criterion` and the list selection.
pub fn set_criterion(app: &mut AppState, criterion: UserFilter) {
    if app.criterion == criterion {
        return;
    }
    let prev = selected_post(app).map(|p| p.id);
    tracing::debug!(from = ?app.criterion, to = ?criterion, "filter changed");
    app.criterion = criterion;
    reconcile_selection(app, prev);
}
