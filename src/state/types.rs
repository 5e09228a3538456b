//! Core value types shared across the state, logic, network and UI layers.

use serde::{Deserialize, Serialize};

/// A post as served by the remote service.
///
/// Identity is `id`; `user_id` groups posts by owner and is never validated
/// client-side.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Owner of the post.
    pub user_id: u64,
    /// Server-assigned identifier, unique within the collection.
    pub id: u64,
    /// Headline shown in the list and overlays.
    pub title: String,
    /// Free-form content.
    pub body: String,
}

/// A comment attached to a post. Only ever held for the lifetime of one
/// detail overlay activation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Post this comment belongs to.
    pub post_id: u64,
    /// Comment identifier.
    pub id: u64,
    /// Short subject line.
    pub name: String,
    /// Author email address.
    pub email: String,
    /// Comment text.
    pub body: String,
}

/// Payload for `POST /posts`. The server assigns the id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    /// Owner to attribute the post to.
    pub user_id: u64,
    /// Title entered in the create form.
    pub title: String,
    /// Body entered in the create form.
    pub body: String,
}

/// Partial update for `PATCH /posts/{id}`.
///
/// Only fields that are `Some` are serialized, so the server changes exactly
/// what the client supplied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    /// Replacement title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Reassigned owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

impl PostPatch {
    /// What: Build a patch that replaces title and body.
    ///
    /// Inputs:
    /// - `title`, `body`: New values taken from an edit draft.
    ///
    /// Output:
    /// - Patch with both text fields set and `user_id` left untouched.
    #[must_use]
    pub fn text(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: Some(body.into()),
            user_id: None,
        }
    }

    /// Whether the patch would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none() && self.user_id.is_none()
    }
}

/// Filter criterion for the post list: every post, or one owner's posts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UserFilter {
    /// Show the whole collection.
    #[default]
    All,
    /// Show only posts whose `user_id` matches.
    User(u64),
}

impl UserFilter {
    /// Whether `post` passes this criterion.
    #[must_use]
    pub const fn matches(self, post: &Post) -> bool {
        match self {
            Self::All => true,
            Self::User(id) => post.user_id == id,
        }
    }

    /// The selected user id, if any.
    #[must_use]
    pub const fn user_id(self) -> Option<u64> {
        match self {
            Self::All => None,
            Self::User(id) => Some(id),
        }
    }

    /// Label used by the filter selector in the header.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::All => "All users".to_string(),
            Self::User(id) => format!("User {id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Posts and comments decode from the service's camelCase JSON.
    ///
    /// - Input: Literal JSON objects as returned by the REST service
    /// - Output: Fields land in the snake_case struct members
    fn decodes_camel_case_payloads() {
        let post: Post = serde_json::from_str(
            r#"{"userId":3,"id":21,"title":"asperiores","body":"repellat"}"#,
        )
        .expect("post json");
        assert_eq!(post.user_id, 3);
        assert_eq!(post.id, 21);

        let comment: Comment = serde_json::from_str(
            r#"{"postId":21,"id":101,"name":"quia","email":"a@b.c","body":"text"}"#,
        )
        .expect("comment json");
        assert_eq!(comment.post_id, 21);
        assert_eq!(comment.email, "a@b.c");
    }

    #[test]
    /// What: A patch only carries the fields it was given.
    ///
    /// - Input: Title-only patch and a text patch
    /// - Output: JSON omits absent fields entirely
    fn patch_serializes_supplied_fields_only() {
        let title_only = PostPatch {
            title: Some("X".into()),
            ..PostPatch::default()
        };
        assert_eq!(
            serde_json::to_value(&title_only).expect("json"),
            serde_json::json!({ "title": "X" })
        );
        assert!(!title_only.is_empty());
        assert!(PostPatch::default().is_empty());

        let text = PostPatch::text("t", "b");
        assert_eq!(
            serde_json::to_value(&text).expect("json"),
            serde_json::json!({ "title": "t", "body": "b" })
        );
    }

    #[test]
    /// What: New posts serialize with the service's field names.
    fn new_post_uses_user_id_key() {
        let np = NewPost {
            user_id: 7,
            title: "t".into(),
            body: "b".into(),
        };
        assert_eq!(
            serde_json::to_value(&np).expect("json"),
            serde_json::json!({ "userId": 7, "title": "t", "body": "b" })
        );
    }

    #[test]
    fn user_filter_matches_owner_only() {
        let post = Post {
            user_id: 2,
            id: 1,
            title: String::new(),
            body: String::new(),
        };
        assert!(UserFilter::All.matches(&post));
        assert!(UserFilter::User(2).matches(&post));
        assert!(!UserFilter::User(3).matches(&post));
        assert_eq!(UserFilter::User(2).user_id(), Some(2));
        assert_eq!(UserFilter::All.user_id(), None);
    }
}
