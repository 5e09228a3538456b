//! Application shell: terminal handling, workers and the event loop.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::handlers::{
    LOAD_ERROR_MESSAGE, handle_comments_result, handle_post_outcome, handle_tick,
};
pub use runtime::workers::posts::execute as execute_post_request;
pub use runtime::{RunOptions, run};
