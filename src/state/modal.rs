//! Overlay (modal) state for the UI.

use crate::state::types::Post;

/// Which input of a create/edit form currently receives typed characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DraftField {
    /// Single-line title input.
    #[default]
    Title,
    /// Multi-line body input.
    Body,
}

impl DraftField {
    /// The other field.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Body,
            Self::Body => Self::Title,
        }
    }
}

/// Text being composed in a create or edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Title text.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Focused input.
    pub field: DraftField,
    /// Set while a submission for this draft awaits the server.
    pub submitting: bool,
}

impl Draft {
    /// What: Start a draft pre-filled from an existing post.
    ///
    /// Inputs:
    /// - `post`: Post being edited.
    ///
    /// Output:
    /// - Draft carrying the post's current title and body, title focused.
    #[must_use]
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            body: post.body.clone(),
            ..Self::default()
        }
    }

    /// Mutable access to the focused field's text.
    pub const fn focused_mut(&mut self) -> &mut String {
        match self.field {
            DraftField::Title => &mut self.title,
            DraftField::Body => &mut self.body,
        }
    }
}

/// A change requested against the open draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    /// Append a character to the focused field.
    Insert(char),
    /// Remove the last character of the focused field.
    Backspace,
    /// Replace the title wholesale.
    SetTitle(String),
    /// Replace the body wholesale.
    SetBody(String),
    /// Move focus to the other field.
    NextField,
}

/// The single overlay that owns user focus, if any.
///
/// At most one overlay exists at a time; opening one replaces the previous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Overlay {
    /// Nothing open; the post list has focus.
    #[default]
    None,
    /// Read-only view of a post plus its comments.
    Detail {
        /// Post being inspected (snapshot at open time).
        post: Post,
        /// Scroll offset in lines for the comment section.
        scroll: u16,
    },
    /// Edit form for an existing post.
    Edit {
        /// Post being edited (snapshot at open time).
        post: Post,
        /// Pending replacement values.
        draft: Draft,
    },
    /// Form for a brand new post.
    Create {
        /// Values typed so far.
        draft: Draft,
    },
}

impl Overlay {
    /// Whether no overlay is open.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Short name used in log lines.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Detail { .. } => "detail",
            Self::Edit { .. } => "edit",
            Self::Create { .. } => "create",
        }
    }

    /// The open draft, for Create and Edit overlays.
    #[must_use]
    pub const fn draft(&self) -> Option<&Draft> {
        match self {
            Self::Edit { draft, .. } | Self::Create { draft } => Some(draft),
            Self::None | Self::Detail { .. } => None,
        }
    }

    /// Mutable access to the open draft, for Create and Edit overlays.
    pub const fn draft_mut(&mut self) -> Option<&mut Draft> {
        match self {
            Self::Edit { draft, .. } | Self::Create { draft } => Some(draft),
            Self::None | Self::Detail { .. } => None,
        }
    }
}

/// Page-scroll lock held while any overlay is open.
///
/// Engaging pins the list's scroll offset so the list behind an overlay is
/// frozen; wheel and scroll keys are dropped while engaged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollLock {
    /// List offset captured when the lock was engaged.
    pinned_offset: Option<usize>,
}

impl ScrollLock {
    /// Engage the lock at the given list offset. Re-engaging keeps the first pin.
    pub fn engage(&mut self, offset: usize) {
        if self.pinned_offset.is_none() {
            tracing::debug!(offset, "scroll lock engaged");
            self.pinned_offset = Some(offset);
        }
    }

    /// Release the lock, returning the offset that was pinned.
    pub fn release(&mut self) -> Option<usize> {
        let pinned = self.pinned_offset.take();
        if pinned.is_some() {
            tracing::debug!("scroll lock released");
        }
        pinned
    }

    /// Whether scrolling is currently blocked.
    #[must_use]
    pub const fn is_engaged(&self) -> bool {
        self.pinned_offset.is_some()
    }

    /// Offset the list must render at while engaged.
    #[must_use]
    pub const fn pinned_offset(&self) -> Option<usize> {
        self.pinned_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Draft focus toggles and edits land in the focused field.
    fn draft_focus_routes_input() {
        let mut d = Draft::default();
        d.focused_mut().push('a');
        d.field = d.field.next();
        d.focused_mut().push('b');
        assert_eq!(d.title, "a");
        assert_eq!(d.body, "b");
        assert_eq!(d.field.next(), DraftField::Title);
    }

    #[test]
    /// What: Scroll lock pins the first offset and hands it back on release.
    ///
    /// - Input: engage(4), engage(9), release(), release()
    /// - Output: pinned at 4; second release yields nothing
    fn scroll_lock_pins_first_offset() {
        let mut lock = ScrollLock::default();
        assert!(!lock.is_engaged());
        lock.engage(4);
        lock.engage(9);
        assert_eq!(lock.pinned_offset(), Some(4));
        assert_eq!(lock.release(), Some(4));
        assert!(!lock.is_engaged());
        assert_eq!(lock.release(), None);
    }

    #[test]
    fn overlay_draft_access_only_for_forms() {
        let post = Post {
            user_id: 1,
            id: 1,
            title: "t".into(),
            body: "b".into(),
        };
        assert!(
            Overlay::Detail {
                post: post.clone(),
                scroll: 0
            }
            .draft()
            .is_none()
        );
        let edit = Overlay::Edit {
            draft: Draft::from_post(&post),
            post,
        };
        assert_eq!(edit.draft().map(|d| d.title.as_str()), Some("t"));
        assert_eq!(edit.kind(), "edit");
        assert!(Overlay::None.is_none());
    }
}
