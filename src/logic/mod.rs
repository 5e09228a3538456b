//! Core non-UI logic: the post collection, filtering, overlays and selection.

pub mod comments;
pub mod filter;
pub mod overlay;
pub mod posts;
pub mod selection;
pub mod store;

pub use comments::{CommentTicket, CommentsLoader};
pub use filter::{
    current_view, cycle_criterion, distinct_user_ids, filtered_view, reconcile_selection,
    selected_post, set_criterion,
};
pub use posts::{PostOutcome, PostRequest, request_delete, request_load};
pub use selection::{jump_sel, move_sel};
pub use store::PostStore;
