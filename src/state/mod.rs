//! Application state: the `AppState` container, overlay state and value types.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::AppState;
pub use modal::{Draft, DraftEdit, DraftField, Overlay, ScrollLock};
pub use types::{Comment, NewPost, Post, PostPatch, UserFilter};
