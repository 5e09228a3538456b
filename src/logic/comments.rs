//! Comment loading for the detail overlay, with a stale-response guard.
//!
//! Every detail activation gets a fresh generation number. A response is
//! applied only if it carries the generation that is still current, so a
//! slow fetch for a post the user already left can never show up.

use crate::sources::ApiError;
use crate::state::Comment;

/// Identifies one detail overlay activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentTicket {
    /// Activation counter value at request time.
    pub generation: u64,
    /// Post whose comments were requested.
    pub post_id: u64,
}

/// Comments for the active detail overlay.
#[derive(Debug, Clone, Default)]
pub struct CommentsLoader {
    /// Last handed-out generation.
    generation: u64,
    /// Ticket of the activation that may still receive a result.
    active: Option<CommentTicket>,
    /// Whether the active request has not answered yet.
    loading: bool,
    /// Comments to render.
    comments: Vec<Comment>,
}

impl CommentsLoader {
    /// What: Start a new activation for `post_id`.
    ///
    /// Inputs:
    /// - `post_id`: Post shown by the detail overlay being opened.
    ///
    /// Output:
    /// - Ticket to send along with the fetch request.
    ///
    /// Details:
    /// - Clears previously shown comments; any ticket handed out before is stale.
    pub fn begin(&mut self, post_id: u64) -> CommentTicket {
        self.generation = self.generation.wrapping_add(1);
        let ticket = CommentTicket {
            generation: self.generation,
            post_id,
        };
        self.active = Some(ticket);
        self.loading = true;
        self.comments.clear();
        ticket
    }

    /// What: Apply a fetch result if it still belongs to the current activation.
    ///
    /// Inputs:
    /// - `ticket`: Ticket the request was issued with.
    /// - `result`: Outcome of `GET /posts/{id}/comments`.
    ///
    /// Output:
    /// - `true` when the result was applied; `false` when it was stale and dropped.
    ///
    /// Details:
    /// - A failure degrades to an empty list and is only logged.
    pub fn accept(&mut self, ticket: CommentTicket, result: Result<Vec<Comment>, ApiError>) -> bool {
        if self.active != Some(ticket) {
            tracing::debug!(
                post_id = ticket.post_id,
                generation = ticket.generation,
                current = self.generation,
                "discarding stale comments response"
            );
            return false;
        }
        self.loading = false;
        match result {
            Ok(comments) => {
                tracing::debug!(post_id = ticket.post_id, count = comments.len(), "comments loaded");
                self.comments = comments;
            }
            Err(e) => {
                tracing::warn!(post_id = ticket.post_id, error = %e, "failed to load comments");
                self.comments.clear();
            }
        }
        true
    }

    /// Forget the current activation; later responses are discarded.
    pub fn invalidate(&mut self) {
        self.active = None;
        self.loading = false;
        self.comments.clear();
    }

    /// Comments of the current activation.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Whether the current activation is still waiting for the server.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Ticket of the current activation, if any.
    #[must_use]
    pub const fn active(&self) -> Option<CommentTicket> {
        self.active
    }
}
